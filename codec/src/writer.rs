use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use rand::Rng;

use crate::{offset::Offset, transform};

/// Writes an encoded stream. The offset header is written on construction, so
/// even a writer that's dropped straight away leaves a valid, empty stream.
///
/// The sink is released when the writer is dropped or closed. `close` also
/// flushes and reports the flush error, which a plain drop can't.
pub struct CaesarWriter<W: Write> {
    writer: W,
    offset: Offset,
    encoded: String,
}

impl CaesarWriter<BufWriter<File>> {
    /// Create or truncate `path`. Without an explicit offset, one is drawn from
    /// the thread RNG.
    pub fn create(path: impl AsRef<Path>, offset: Option<Offset>) -> io::Result<Self> {
        Self::create_with_rng(path, offset, &mut rand::thread_rng())
    }

    pub fn create_with_rng(
        path: impl AsRef<Path>,
        offset: Option<Offset>,
        rng: &mut impl Rng,
    ) -> io::Result<Self> {
        let offset = offset.unwrap_or_else(|| Offset::random(rng));
        let file = File::create(path)?;

        Self::new(BufWriter::new(file), offset)
    }
}

impl<W: Write> CaesarWriter<W> {
    pub fn new(mut writer: W, offset: Offset) -> io::Result<Self> {
        let mut header = [0u8; 4];
        writer.write_all(offset.header_char().encode_utf8(&mut header).as_bytes())?;

        Ok(Self {
            writer,
            offset,
            encoded: String::new(),
        })
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Encode `text` and append it to the stream.
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.encoded.clear();
        transform::encode_str_into(text, self.offset, &mut self.encoded);
        self.writer.write_all(self.encoded.as_bytes())
    }

    /// Write each item in order. No separator is inserted between them.
    pub fn writelines<I>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.write(line.as_ref())?;
        }

        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Flush and hand back the underlying sink.
    pub fn close(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
