/// Errors produced while resolving an offset from user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OffsetError {
    /// The input couldn't be converted to an integer.
    #[error("offset must be an integer or convertible to one, got {0:?}")]
    NotAnInteger(String),

    /// The magnitude of the offset is greater than 255.
    #[error("offset out of range: |{0}| is greater than 255")]
    OutOfRange(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_not_an_integer() {
        let err = OffsetError::NotAnInteger("abc".to_string());
        assert_eq!(
            err.to_string(),
            "offset must be an integer or convertible to one, got \"abc\""
        );
    }

    #[test]
    fn test_display_out_of_range() {
        let err = OffsetError::OutOfRange(-300);
        assert_eq!(err.to_string(), "offset out of range: |-300| is greater than 255");
    }
}
