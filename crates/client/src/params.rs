//! Typed request parameter store.
//!
//! Responsibilities:
//! - Hold query-string parameters as ordered `(name, raw value)` pairs.
//! - Encode and decode typed values (bool, string, integer, duration, list)
//!   to and from their wire tokens via the [`WireParam`] trait.
//! - Render the deterministic query-string form consumed by the transport.
//!
//! Does NOT handle:
//! - Request bodies or HTTP dispatch (see [`crate::endpoints`]).
//! - Which parameters an endpoint accepts (see [`crate::requests`]).
//!
//! Invariants:
//! - A name maps to at most one value; setting an existing name replaces the
//!   raw value in place, so serialization order stays stable.
//! - Setting `None` removes the entry; an empty token is never stored.
//! - A present raw value always decodes with the type its accessor was
//!   written for. A mismatch is a bug in this crate and panics.

use std::time::Duration;

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in query-string values.
///
/// Space and the URL metacharacters that would terminate or split a
/// `name=value` pair. Keys are `&'static str` literals chosen at compile time
/// and never need escaping.
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// A value that can round-trip through its query-string token.
pub trait WireParam: Sized {
    /// Encode to the canonical wire token.
    fn to_wire(&self) -> String;

    /// Decode from a wire token. `None` means the token does not belong to
    /// this type, which callers treat as a programming error.
    fn from_wire(raw: &str) -> Option<Self>;
}

impl WireParam for bool {
    fn to_wire(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }

    fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl WireParam for String {
    fn to_wire(&self) -> String {
        self.clone()
    }

    fn from_wire(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl WireParam for u64 {
    fn to_wire(&self) -> String {
        self.to_string()
    }

    fn from_wire(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

/// Durations use the service's compact token form: a whole number plus the
/// largest unit that divides it exactly (`d`, `h`, `m`, `s`, `ms`), e.g.
/// `30s`, `5m`, `1500ms`.
impl WireParam for Duration {
    fn to_wire(&self) -> String {
        let ms = self.as_millis();
        if ms == 0 {
            return "0s".to_string();
        }
        if ms % 1000 != 0 {
            return format!("{}ms", ms);
        }
        let secs = ms / 1000;
        if secs % 86_400 == 0 {
            format!("{}d", secs / 86_400)
        } else if secs % 3600 == 0 {
            format!("{}h", secs / 3600)
        } else if secs % 60 == 0 {
            format!("{}m", secs / 60)
        } else {
            format!("{}s", secs)
        }
    }

    fn from_wire(raw: &str) -> Option<Self> {
        // "ms" must be tried before the single-letter units or "1500ms"
        // would parse as "1500m" + trailing garbage.
        if let Some(n) = raw.strip_suffix("ms") {
            return n.parse().ok().map(Duration::from_millis);
        }
        let (number, unit_secs) = if let Some(n) = raw.strip_suffix('s') {
            (n, 1)
        } else if let Some(n) = raw.strip_suffix('m') {
            (n, 60)
        } else if let Some(n) = raw.strip_suffix('h') {
            (n, 3600)
        } else if let Some(n) = raw.strip_suffix('d') {
            (n, 86_400)
        } else {
            return None;
        };
        let number: u64 = number.parse().ok()?;
        Some(Duration::from_secs(number * unit_secs))
    }
}

/// Lists serialize as a single comma-joined token.
impl WireParam for Vec<String> {
    fn to_wire(&self) -> String {
        self.join(",")
    }

    fn from_wire(raw: &str) -> Option<Self> {
        Some(raw.split(',').map(str::to_string).collect())
    }
}

/// Ordered store of query-string parameters.
///
/// Every request descriptor owns one `Params`; typed property setters write
/// through it using fixed wire names and the transport reads it back out as
/// `name=value` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(&'static str, String)>,
}

impl Params {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear a typed parameter.
    ///
    /// `Some(value)` encodes and stores the wire token, replacing any
    /// existing value in place. `None` removes the parameter entirely.
    pub fn set<T: WireParam>(&mut self, name: &'static str, value: Option<T>) {
        match value {
            Some(value) => {
                let raw = value.to_wire();
                match self.entries.iter_mut().find(|(n, _)| *n == name) {
                    Some(entry) => entry.1 = raw,
                    None => self.entries.push((name, raw)),
                }
            }
            None => self.entries.retain(|(n, _)| *n != name),
        }
    }

    /// Read a typed parameter. `None` means the parameter is not set.
    ///
    /// # Panics
    ///
    /// Panics if the stored raw value does not decode as `T`. The store is
    /// only ever accessed through accessors written for the correct type, so
    /// a mismatch is a bug in this crate rather than a recoverable error.
    pub fn get<T: WireParam>(&self, name: &str) -> Option<T> {
        let raw = self.raw(name)?;
        match T::from_wire(raw) {
            Some(value) => Some(value),
            None => panic!(
                "parameter `{}` holds {:?}, which does not decode as the requested type",
                name, raw
            ),
        }
    }

    /// Raw wire token for a parameter, if set.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, raw)| raw.as_str())
    }

    /// Whether a parameter is set.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    /// Number of parameters set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrowed `(name, raw value)` pairs in insertion order, in the shape
    /// `reqwest::RequestBuilder::query` consumes.
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.entries
    }

    /// Render the percent-encoded query string, without a leading `?`.
    ///
    /// An empty store renders as the empty string.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(name, raw)| {
                format!(
                    "{}={}",
                    name,
                    percent_encode(raw.as_bytes(), QUERY_VALUE_ENCODE_SET)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Closed-set token type, as endpoint enums implement it.
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum SortOrder {
        Asc,
        Desc,
    }

    impl WireParam for SortOrder {
        fn to_wire(&self) -> String {
            match self {
                SortOrder::Asc => "asc",
                SortOrder::Desc => "desc",
            }
            .to_string()
        }

        fn from_wire(raw: &str) -> Option<Self> {
            match raw {
                "asc" => Some(SortOrder::Asc),
                "desc" => Some(SortOrder::Desc),
                _ => None,
            }
        }
    }

    #[test]
    fn test_bool_round_trip() {
        let mut params = Params::new();
        params.set("wait_for_completion", Some(true));
        assert_eq!(params.get::<bool>("wait_for_completion"), Some(true));
        assert_eq!(params.raw("wait_for_completion"), Some("true"));

        params.set("wait_for_completion", Some(false));
        assert_eq!(params.raw("wait_for_completion"), Some("false"));
    }

    #[test]
    fn test_string_and_u64_round_trip() {
        let mut params = Params::new();
        params.set("routing", Some("shard-5".to_string()));
        params.set("size", Some(25u64));
        assert_eq!(params.get::<String>("routing"), Some("shard-5".to_string()));
        assert_eq!(params.get::<u64>("size"), Some(25));
    }

    #[test]
    fn test_enum_round_trip() {
        let mut params = Params::new();
        params.set("order", Some(SortOrder::Desc));
        assert_eq!(params.raw("order"), Some("desc"));
        assert_eq!(params.get::<SortOrder>("order"), Some(SortOrder::Desc));
    }

    #[test]
    fn test_list_joins_with_commas() {
        let mut params = Params::new();
        params.set(
            "filter_path",
            Some(vec!["took".to_string(), "hits.total".to_string()]),
        );
        assert_eq!(params.raw("filter_path"), Some("took,hits.total"));
        assert_eq!(
            params.get::<Vec<String>>("filter_path"),
            Some(vec!["took".to_string(), "hits.total".to_string()])
        );
    }

    #[test]
    fn test_absent_reads_as_none() {
        let params = Params::new();
        assert_eq!(params.get::<bool>("typed_keys"), None);
        assert!(!params.contains("typed_keys"));
    }

    #[test]
    fn test_set_none_removes_entry() {
        let mut params = Params::new();
        params.set("timeout", Some(Duration::from_secs(30)));
        assert!(params.contains("timeout"));

        params.set::<Duration>("timeout", None);
        assert!(!params.contains("timeout"));
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn test_replace_preserves_position() {
        let mut params = Params::new();
        params.set("pretty", Some(true));
        params.set("typed_keys", Some(true));
        params.set("pretty", Some(false));
        assert_eq!(params.to_query_string(), "pretty=false&typed_keys=true");
    }

    #[test]
    fn test_empty_store_serializes_empty() {
        assert_eq!(Params::new().to_query_string(), "");
    }

    #[test]
    fn test_query_string_percent_encodes_values() {
        let mut params = Params::new();
        params.set("routing", Some("a b&c".to_string()));
        assert_eq!(params.to_query_string(), "routing=a%20b%26c");
    }

    #[test]
    #[should_panic(expected = "does not decode as the requested type")]
    fn test_type_mismatch_panics() {
        let mut params = Params::new();
        params.set("routing", Some("not-a-bool".to_string()));
        let _ = params.get::<bool>("routing");
    }

    #[test]
    fn test_duration_tokens() {
        let cases = [
            (Duration::from_secs(30), "30s"),
            (Duration::from_secs(90), "90s"),
            (Duration::from_secs(300), "5m"),
            (Duration::from_secs(7200), "2h"),
            (Duration::from_secs(86_400), "1d"),
            (Duration::from_millis(1500), "1500ms"),
            (Duration::ZERO, "0s"),
        ];
        for (duration, token) in cases {
            assert_eq!(duration.to_wire(), token, "encoding {:?}", duration);
            assert_eq!(
                Duration::from_wire(token),
                Some(duration),
                "decoding {:?}",
                token
            );
        }
    }

    #[test]
    fn test_duration_rejects_unknown_unit() {
        assert_eq!(Duration::from_wire("30x"), None);
        assert_eq!(Duration::from_wire("fast"), None);
    }
}
