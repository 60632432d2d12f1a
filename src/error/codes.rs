/// Error code registry
///
/// Error codes are organized by category:
/// - 1000-1999: Input errors
/// - 2000-2999: Configuration errors
pub struct ErrorCode;

impl ErrorCode {
    // Input errors (1000-1999)
    pub const EMPTY_INPUT: u16 = 1001;

    // Configuration errors (2000-2999)
    pub const INVALID_PARALLELISM: u16 = 2001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1001 => "Operation requires at least one element",
        2001 => "Parallelism limit must be at least 1",
        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_codes() {
        assert_eq!(
            describe_error_code(ErrorCode::EMPTY_INPUT),
            "Operation requires at least one element"
        );
        assert_eq!(
            describe_error_code(ErrorCode::INVALID_PARALLELISM),
            "Parallelism limit must be at least 1"
        );
    }

    #[test]
    fn test_describe_unknown_code() {
        assert_eq!(describe_error_code(42), "Unknown error code");
    }
}
