//! A toy additive stream cipher for text files.
//!
//! The first code point of an encoded stream is the offset itself, so a reader
//! can discover it. Every following code point is the plaintext code point with
//! the offset added modulo 255. This is not encryption in any serious sense, it
//! only makes the file unreadable at a glance.

pub mod error;
pub mod files;
pub mod offset;
pub mod reader;
pub mod transform;
mod utf8;
pub mod writer;

#[cfg(test)]
mod test_dir;

pub use error::OffsetError;
pub use files::{decrypt, encrypt};
pub use offset::Offset;
pub use reader::CaesarReader;
pub use writer::CaesarWriter;
