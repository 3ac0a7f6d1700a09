//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use lightrail::LightRailError;
    use lightrail::io::error::{file_system_error, invalid_parameter};
    use std::error::Error;

    // Tests error source chaining for wrapped errors
    // Verified by breaking the source chain of file system errors
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system_error("/tmp/run.gif", "create file", io_error);
        assert!(error.source().is_some());

        assert!(invalid_parameter("rows", &0, &"too small").source().is_none());
    }

    // Tests invalid parameter formatting
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_parameter_message() {
        let error = invalid_parameter("rows", &0, &"must be between 1 and 512");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'rows' = '0': must be between 1 and 512"
        );
    }

    // Tests file system errors name the operation and path
    // Verified by dropping the operation from the message
    #[test]
    fn test_file_system_error_message() {
        let io_error = std::io::Error::other("disk full");
        let error = file_system_error("out/run.gif", "create file", io_error);
        let message = error.to_string();
        assert!(message.contains("create file"));
        assert!(message.contains("out/run.gif"));
        assert!(message.contains("disk full"));
    }

    // Tests logging errors keep their reason
    // Verified by formatting a fixed message
    #[test]
    fn test_logging_error_message() {
        let error = LightRailError::Logging {
            reason: "subscriber already set".to_owned(),
        };
        assert!(error.to_string().contains("subscriber already set"));
        assert!(error.source().is_none());
    }
}
