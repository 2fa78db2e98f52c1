//! Standard ports for well-known schemes.

/// Returns the standard port for a scheme, looked up case-sensitively
/// by its lowercase name.
///
/// # Examples
///
/// ```
/// use uri_parts::standard_port;
///
/// assert_eq!(standard_port("http"), Some(80));
/// assert_eq!(standard_port("HTTP"), None);
/// assert_eq!(standard_port("example"), None);
/// ```
#[must_use]
pub fn standard_port(scheme: &str) -> Option<u16> {
    Some(match scheme {
        "ftp" => 21,
        "telnet" | "tn3270" => 23,
        "gopher" => 70,
        "http" => 80,
        "pop" => 110,
        "nntp" | "news" => 119,
        "imap" => 143,
        "ldap" => 389,
        "https" => 443,
        _ => return None,
    })
}

/// Elides a port that equals the scheme's standard port.
///
/// Schemes without a standard port never elide.
pub(crate) fn normalize(scheme: &str, port: Option<u16>) -> Option<u16> {
    port.filter(|&p| standard_port(scheme) != Some(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elision() {
        assert_eq!(normalize("http", Some(80)), None);
        assert_eq!(normalize("http", Some(8080)), Some(8080));
        assert_eq!(normalize("http", None), None);
        assert_eq!(normalize("https", Some(443)), None);
        assert_eq!(normalize("news", Some(119)), None);
        // Lookup is case-sensitive; uppercase schemes keep their port.
        assert_eq!(normalize("HTTP", Some(80)), Some(80));
        assert_eq!(normalize("example", Some(80)), Some(80));
        assert_eq!(normalize("", Some(80)), Some(80));
    }
}
