//! Percent-encoding for URL path segments.
//!
//! Job ids and index names are caller-provided and get interpolated into
//! request paths. Without escaping, a `/` in a job id would nest the path and
//! a `?` would start the query string early.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 plus characters with special meaning in request
/// paths. `%` is included to prevent double-decode issues and `/` to prevent
/// path traversal. `*` and `,` stay unencoded: index patterns and
/// multi-index expressions pass through as written.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a job id, index name, or index pattern for safe use as a
/// URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_pass_through() {
        assert_eq!(encode_path_segment("sensor"), "sensor");
        assert_eq!(encode_path_segment("sensor_rollup"), "sensor_rollup");
        assert_eq!(encode_path_segment("logs-2026.08"), "logs-2026.08");
    }

    #[test]
    fn test_patterns_and_index_lists_pass_through() {
        assert_eq!(encode_path_segment("sensor-*"), "sensor-*");
        assert_eq!(encode_path_segment("a,b,c"), "a,b,c");
    }

    #[test]
    fn test_slash_is_escaped() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
    }

    #[test]
    fn test_percent_is_escaped() {
        assert_eq!(encode_path_segment("50%"), "50%25");
        assert_eq!(encode_path_segment("a%2Fb"), "a%252Fb");
    }

    #[test]
    fn test_space_and_query_chars_are_escaped() {
        assert_eq!(encode_path_segment("job id"), "job%20id");
        assert_eq!(encode_path_segment("job?x"), "job%3Fx");
        assert_eq!(encode_path_segment("job#1"), "job%231");
    }

    #[test]
    fn test_unicode_is_utf8_escaped() {
        assert_eq!(encode_path_segment("caf\u{00e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_empty_segment() {
        assert_eq!(encode_path_segment(""), "");
    }
}
