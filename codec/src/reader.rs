use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use crate::{offset::Offset, transform, utf8::CharStream};

/// Reads an encoded stream back to plaintext. The offset is taken from the
/// stream's first code point when the reader is constructed.
pub struct CaesarReader<R: Read> {
    chars: CharStream<R>,
    offset: Offset,
}

impl CaesarReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read> CaesarReader<R> {
    pub fn new(reader: R) -> io::Result<Self> {
        let mut chars = CharStream::new(reader);

        let header = chars.next_char()?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Stream is empty, expected an offset header",
            )
        })?;

        let offset = Offset::from_header_char(header).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid offset header U+{:04X}", u32::from(header)),
            )
        })?;

        Ok(Self { chars, offset })
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn get_ref(&self) -> &R {
        self.chars.get_ref()
    }

    /// Read and decode up to `size` code points, or everything that's left
    /// if `size` is `None`. An empty string means the stream is exhausted.
    pub fn read(&mut self, size: Option<usize>) -> io::Result<String> {
        let mut result = String::new();
        let mut remaining = size;

        while remaining != Some(0) {
            let Some(c) = self.next_decoded()? else {
                break;
            };
            result.push(c);

            if let Some(remaining) = remaining.as_mut() {
                *remaining -= 1;
            }
        }

        Ok(result)
    }

    pub fn read_to_string(&mut self) -> io::Result<String> {
        self.read(None)
    }

    /// Read up to and including the next `\n`. The final line may lack the
    /// newline, and an empty string means the stream is exhausted.
    pub fn readline(&mut self) -> io::Result<String> {
        let mut line = String::new();

        while let Some(c) = self.next_decoded()? {
            line.push(c);
            if c == '\n' {
                break;
            }
        }

        Ok(line)
    }

    pub fn readlines(&mut self) -> io::Result<Vec<String>> {
        self.lines().collect()
    }

    /// Iterate over the remaining lines. Lines consumed here are gone for good,
    /// reading them again needs a fresh reader.
    pub fn lines(&mut self) -> Lines<'_, R> {
        Lines { reader: self }
    }

    /// Hand back the underlying source.
    pub fn close(self) -> R {
        self.chars.into_inner()
    }

    fn next_decoded(&mut self) -> io::Result<Option<char>> {
        let Some(c) = self.chars.next_char()? else {
            return Ok(None);
        };

        let decoded = transform::decode_char(c, self.offset).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "U+{:04X} does not decode to a valid character with offset {}",
                    u32::from(c),
                    self.offset
                ),
            )
        })?;

        Ok(Some(decoded))
    }
}

pub struct Lines<'a, R: Read> {
    reader: &'a mut CaesarReader<R>,
}

impl<'a, R: Read> Iterator for Lines<'a, R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.readline() {
            Ok(line) if line.is_empty() => None,
            result => Some(result),
        }
    }
}
