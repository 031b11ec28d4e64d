//! Whole-file helpers built on [`CaesarWriter`] and [`CaesarReader`].

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{offset::Offset, reader::CaesarReader, writer::CaesarWriter};

/// Encode the text file at `source` into `dest`, line by line. Returns the
/// offset that was used, which is random if none was given.
pub fn encrypt(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    offset: Option<Offset>,
) -> io::Result<Offset> {
    let (source, dest) = (source.as_ref(), dest.as_ref());

    let mut input = BufReader::new(File::open(source)?);
    let mut writer = CaesarWriter::create(dest, offset)?;

    let mut line = String::new();
    let mut line_count = 0usize;
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        writer.write(&line)?;
        line_count += 1;
    }

    let offset = writer.offset();
    writer.close()?;

    tracing::debug!(
        "Encrypted {} lines from {:?} to {:?} with offset {}",
        line_count,
        source,
        dest,
        offset
    );

    Ok(offset)
}

/// Decode `source`, which must have been written by [`CaesarWriter`], into the
/// plain text file `dest`. Returns the offset found in the stream header.
pub fn decrypt(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> io::Result<Offset> {
    let (source, dest) = (source.as_ref(), dest.as_ref());

    let mut reader = CaesarReader::open(source)?;
    let mut output = BufWriter::new(File::create(dest)?);

    let mut line_count = 0usize;
    for line in reader.lines() {
        output.write_all(line?.as_bytes())?;
        line_count += 1;
    }
    output.flush()?;

    tracing::debug!(
        "Decrypted {} lines from {:?} to {:?} with offset {}",
        line_count,
        source,
        dest,
        reader.offset()
    );

    Ok(reader.offset())
}
