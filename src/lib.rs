#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]

//! A URI decomposition/recomposition library adhering to the generic
//! syntax of IETF [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! Parsing splits a raw string into its scheme, authority (userinfo,
//! host, port), path, query and fragment, producing an immutable [`Uri`]
//! value. Parsing is deliberately lenient: apart from the scheme and the
//! port, components are stored exactly as they appear, without
//! percent-decoding or normalization. The one normalization applied is
//! default-port elision: an explicit port equal to the scheme's standard
//! port (`http` 80, `https` 443, `ftp` 21, ...) is dropped.
//!
//! Only three conditions fail [`Uri::parse`]:
//!
//! - a control character (`0x00..=0x1F` or `0x7F`) anywhere in the input;
//! - a scheme that does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`;
//! - a port that is non-numeric or outside `[0, 65535]`.
//!
//! # Examples
//!
//! ```
//! use uri_parts::Uri;
//!
//! let uri = Uri::parse("foo://user@example.com:8042/over/there?name=ferret#nose")?;
//!
//! assert_eq!(uri.scheme(), "foo");
//! let auth = uri.authority().unwrap();
//! assert_eq!(auth.userinfo().unwrap().user(), "user");
//! assert_eq!(auth.host(), "example.com");
//! assert_eq!(auth.port(), Some(8042));
//! assert_eq!(uri.path(), "/over/there");
//! assert_eq!(uri.query().unwrap()["name"], "ferret");
//! assert_eq!(uri.fragment(), "nose");
//!
//! assert_eq!(uri.to_string(), "foo://user@example.com:8042/over/there?name=ferret#nose");
//! # Ok::<_, uri_parts::error::SyntaxError>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: Enables `Serialize` and `Deserialize` impls for [`Uri`],
//!   writing the composed string and parsing on read.

pub mod component;
pub mod error;
pub mod table;

mod fmt;
mod parser;
mod ports;
mod query;

pub use ports::standard_port;
pub use query::QueryMap;

use component::{Authority, UserInfo};
use error::SyntaxError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A URI decomposed per the RFC 3986 generic syntax.
///
/// A `Uri` is constructed exactly once, by [`parse`](Self::parse), and is
/// immutable afterwards: every accessor is a total read-only function and
/// [`Display`](std::fmt::Display) recomposes the canonical string.
///
/// Component storage is as-parsed. In particular the path keeps the form
/// it had in the input; the leading `/` mandated after an authority is
/// added during composition only.
#[derive(Clone, PartialEq, Eq)]
pub struct Uri {
    pub(crate) scheme: String,
    pub(crate) authority: Option<Authority>,
    pub(crate) path: String,
    pub(crate) query: Option<QueryMap>,
    pub(crate) fragment: String,
}

impl Uri {
    /// Parses a URI from a string.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] if the input contains a control
    /// character, a malformed scheme, or an invalid port. On failure no
    /// partially parsed value is observable.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::{error::SyntaxErrorKind, Uri};
    ///
    /// let uri = Uri::parse("http://www.ics.uci.edu/pub/ietf/uri/#Related")?;
    /// assert_eq!(uri.host(), "www.ics.uci.edu");
    ///
    /// let err = Uri::parse("scheme://host:99999/").unwrap_err();
    /// assert!(matches!(err.kind(), SyntaxErrorKind::InvalidPort { .. }));
    /// # Ok::<_, uri_parts::error::SyntaxError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Uri, SyntaxError> {
        parser::parse(input)
    }

    /// Returns the scheme, or the empty string if none was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// let uri = Uri::parse("http://example.com/")?;
    /// assert_eq!(uri.scheme(), "http");
    ///
    /// let uri = Uri::parse("//example.com/")?;
    /// assert_eq!(uri.scheme(), "");
    /// # Ok::<_, uri_parts::error::SyntaxError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the authority component, if one was present.
    ///
    /// An authority introduced by `//` is present even when empty, which
    /// keeps `scheme://` apart from `scheme:`:
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// let uri = Uri::parse("file:///etc/hosts")?;
    /// assert_eq!(uri.authority().unwrap().host(), "");
    ///
    /// let uri = Uri::parse("mailto:foo@bar.com")?;
    /// assert!(uri.authority().is_none());
    /// # Ok::<_, uri_parts::error::SyntaxError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    /// Returns the authority formatted as `[userinfo@]host[:port]`, or
    /// the empty string if no authority is present.
    ///
    /// The port is omitted when elided or absent.
    #[must_use]
    pub fn authority_string(&self) -> String {
        match &self.authority {
            Some(authority) => authority.to_string(),
            None => String::new(),
        }
    }

    /// Returns the userinfo subcomponent, if one was present.
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&UserInfo> {
        self.authority.as_ref().and_then(Authority::userinfo)
    }

    /// Returns the userinfo formatted as `user[:password]`, or the empty
    /// string if no userinfo is present.
    #[must_use]
    pub fn userinfo_string(&self) -> String {
        match self.userinfo() {
            Some(userinfo) => userinfo.to_string(),
            None => String::new(),
        }
    }

    /// Returns the host, or the empty string if no authority is present.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &str {
        match &self.authority {
            Some(authority) => authority.host(),
            None => "",
        }
    }

    /// Returns the port, after range validation and default-port elision.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// let uri = Uri::parse("http://example.com:8080/")?;
    /// assert_eq!(uri.port(), Some(8080));
    ///
    /// // 80 is the standard port for "http" and is elided.
    /// let uri = Uri::parse("http://example.com:80/")?;
    /// assert_eq!(uri.port(), None);
    /// # Ok::<_, uri_parts::error::SyntaxError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.authority.as_ref().and_then(Authority::port)
    }

    /// Returns the path, exactly as parsed.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the decomposed query, if a `?` was present.
    ///
    /// Iteration order is the order in which keys first appeared.
    /// Duplicate keys keep the last value; see [`QueryMap`].
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// let uri = Uri::parse("//h/p?a=1&b=2&a=3")?;
    /// let query = uri.query().unwrap();
    /// assert_eq!(query["a"], "3");
    /// assert_eq!(query["b"], "2");
    ///
    /// let uri = Uri::parse("//h/p")?;
    /// assert!(uri.query().is_none());
    /// # Ok::<_, uri_parts::error::SyntaxError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&QueryMap> {
        self.query.as_ref()
    }

    /// Returns the query serialized as `&`-joined `key=value` pairs, or
    /// the empty string if no query is present.
    #[must_use]
    pub fn query_string(&self) -> String {
        match &self.query {
            Some(map) => query::serialize(map),
            None => String::new(),
        }
    }

    /// Returns the fragment, or the empty string if no `#` was present.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl FromStr for Uri {
    type Err = SyntaxError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = SyntaxError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uri::parse(value)
    }
}

impl TryFrom<String> for Uri {
    type Error = SyntaxError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Uri::parse(&value)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uri::parse(&s).map_err(de::Error::custom)
    }
}
