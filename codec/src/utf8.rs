use std::io::{self, Read};

/// Wraps a byte stream and yields it one UTF-8 code point at a time.
pub struct CharStream<R: Read> {
    reader: R,
}

impl<R: Read> CharStream<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read the next code point, or `None` at a clean end of stream.
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        let mut buf = [0u8; 4];
        if !self.read_first_byte(&mut buf[..1])? {
            return Ok(None);
        }

        let len = sequence_len(buf[0]).ok_or_else(|| {
            invalid_data(format!("Invalid UTF-8 leading byte 0x{:02x}", buf[0]))
        })?;

        self.reader.read_exact(&mut buf[1..len]).map_err(|err| {
            if err.kind() == io::ErrorKind::UnexpectedEof {
                invalid_data("Truncated UTF-8 sequence at end of stream".to_string())
            } else {
                err
            }
        })?;

        let s = std::str::from_utf8(&buf[..len])
            .map_err(|err| invalid_data(format!("Invalid UTF-8 sequence: {}", err)))?;

        Ok(s.chars().next())
    }

    fn read_first_byte(&mut self, buf: &mut [u8]) -> io::Result<bool> {
        loop {
            match self.reader.read(buf) {
                Ok(0) => return Ok(false),
                Ok(_) => return Ok(true),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }
}

fn sequence_len(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn collect(bytes: &[u8]) -> io::Result<String> {
        let mut stream = CharStream::new(Cursor::new(bytes));
        let mut out = String::new();
        while let Some(c) = stream.next_char()? {
            out.push(c);
        }
        Ok(out)
    }

    #[test]
    fn test_multi_byte_chars() {
        let text = "a\u{e9}\u{20ac}\u{1f980}\n";
        assert_eq!(collect(text.as_bytes()).unwrap(), text);
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(collect(&[]).unwrap(), "");
    }

    #[test]
    fn test_truncated_sequence() {
        let bytes = "\u{20ac}".as_bytes();
        let err = collect(&bytes[..2]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_invalid_leading_byte() {
        let err = collect(&[b'a', 0xFF]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_invalid_continuation_byte() {
        let err = collect(&[0xC3, b'a']).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
