//! Tests for log filter parsing

#[cfg(test)]
mod tests {
    use lightrail::io::logging::parse_filter;

    // Tests plain levels and per-target directives are accepted
    // Verified by rejecting target directives
    #[test]
    fn test_parse_valid_filters() {
        for directive in ["warn", "debug", "lightrail=trace", "info,lightrail=debug"] {
            assert!(parse_filter(directive).is_ok(), "{directive} rejected");
        }
    }

    // Tests invalid directives name the log level parameter
    // Verified by falling back to the default filter
    #[test]
    fn test_parse_invalid_filter() {
        let error = parse_filter("lightrail=loudest")
            .err()
            .map(|error| error.to_string())
            .unwrap_or_default();
        assert!(error.contains("log_level"));
        assert!(error.contains("lightrail=loudest"));
    }
}
