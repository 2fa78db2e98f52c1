//! Query component parsing and serialization.

use indexmap::IndexMap;

/// An ordered mapping of query keys to values.
///
/// Iteration yields the pairs in the order their keys first appeared in
/// the raw query text.
pub type QueryMap = IndexMap<String, String>;

/// Decomposes raw query text into an ordered key/value mapping.
///
/// Pairs are separated by `&` and split at the first `=`; a pair without
/// `=` maps to the empty value. Empty segments (as in `a=1&&b=2`) are
/// skipped. When a key occurs more than once, the last value wins while
/// the key keeps the position of its first occurrence. The text is kept
/// as given; no percent-decoding happens here or anywhere else.
pub(crate) fn parse_pairs(raw: &str) -> QueryMap {
    let mut map = QueryMap::new();
    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        map.insert(key.to_owned(), value.to_owned());
    }
    map
}

/// Serializes a query mapping back into `&`-joined `key=value` pairs,
/// in map order. The `=` is always written, so a valueless input pair
/// `flag` reads back as `flag=` with the same meaning.
pub(crate) fn serialize(map: &QueryMap) -> String {
    let mut out = String::new();
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_and_rebuild() {
        let map = parse_pairs("name=ferret&color=purple");
        assert_eq!(map.len(), 2);
        assert_eq!(map["name"], "ferret");
        assert_eq!(map["color"], "purple");
        assert_eq!(serialize(&map), "name=ferret&color=purple");
    }

    #[test]
    fn missing_equals_means_empty_value() {
        let map = parse_pairs("flag&x=1");
        assert_eq!(map["flag"], "");
        assert_eq!(serialize(&map), "flag=&x=1");
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert!(parse_pairs("").is_empty());
        assert!(parse_pairs("&&").is_empty());
        let map = parse_pairs("a=1&&b=2");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn value_may_contain_equals() {
        let map = parse_pairs("a==b&c=1=2");
        assert_eq!(map["a"], "=b");
        assert_eq!(map["c"], "1=2");
    }
}
