use std::{fmt, str::FromStr};

use rand::Rng;

use crate::error::OffsetError;

/// The additive constant applied to every code point, stored as the first
/// code point of an encoded stream.
///
/// Any magnitude up to 255 is accepted. Random offsets are drawn from
/// [1, 254], since 0 and 255 leave most characters untouched.
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Offset(u8);

impl Offset {
    pub const MIN_RANDOM: u8 = 1;
    pub const MAX_RANDOM: u8 = 254;

    /// Resolve an offset from a signed integer. Negative values are replaced by
    /// their absolute value.
    pub fn new(value: i64) -> Result<Self, OffsetError> {
        let magnitude = value.unsigned_abs();
        if magnitude > u8::MAX as u64 {
            return Err(OffsetError::OutOfRange(value));
        }

        Ok(Self(magnitude as u8))
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self(rng.gen_range(Self::MIN_RANDOM..=Self::MAX_RANDOM))
    }

    pub fn random_thread() -> Self {
        Self::random(&mut rand::thread_rng())
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// The header code point that announces this offset in a stream.
    pub fn header_char(&self) -> char {
        char::from(self.0)
    }

    pub fn from_header_char(c: char) -> Option<Self> {
        u8::try_from(u32::from(c)).ok().map(Self)
    }
}

impl From<u8> for Offset {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Offset {
    type Error = OffsetError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Offset {
    type Error = OffsetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Offset {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| OffsetError::NotAnInteger(s.to_string()))?;

        Self::new(value)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
