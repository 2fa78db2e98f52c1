use crate::{
    component::{Authority, Host, Scheme, UserInfo},
    error::{SyntaxError, SyntaxErrorKind},
    query, Uri,
};
use std::fmt;

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SyntaxErrorKind::ControlCharacter { index } => {
                write!(f, "control character at index {} in {:?}", index, self.input)
            }
            SyntaxErrorKind::InvalidScheme { scheme } => {
                write!(f, "invalid scheme {:?} in {:?}", scheme, self.input)
            }
            SyntaxErrorKind::InvalidPort { port } => {
                write!(f, "invalid port {:?} in {:?}", port, self.input)
            }
        }
    }
}

/// Composes the URI back into a string.
///
/// When the host is non-empty the result is
/// `[scheme ":"] "//" authority [path] ["?" query] ["#" fragment]`,
/// with a `/` forced before a non-empty rootless path. When the host is
/// empty only `path ["?" query] ["#" fragment]` is written, without a
/// scheme prefix even if one is set.
impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.authority().filter(|a| !a.host().is_empty()) {
            Some(authority) => {
                if !self.scheme.is_empty() {
                    write!(f, "{}:", self.scheme)?;
                }
                write!(f, "//{authority}")?;
                if !self.path.is_empty() && !self.path.starts_with('/') {
                    f.write_str("/")?;
                }
                f.write_str(&self.path)?;
            }
            None => f.write_str(&self.path)?,
        }
        if let Some(map) = &self.query {
            write!(f, "?{}", query::serialize(map))?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme)
            .field("authority", &self.authority)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("fragment", &self.fragment)
            .finish()
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{userinfo}@")?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authority")
            .field("userinfo", &self.userinfo)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user)?;
        if let Some(password) = &self.password {
            write!(f, ":{password}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInfo")
            .field("user", &self.user)
            .field("password", &self.password)
            .finish()
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Host<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Ipv4(addr) => fmt::Display::fmt(addr, f),
            Host::Ipv6 { addr, zone: None } => write!(f, "[{addr}]"),
            Host::Ipv6 {
                addr,
                zone: Some(zone),
            } => write!(f, "[{addr}%{zone}]"),
            Host::RegName(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Uri;

    // A rootless path cannot arrive here through parsing, since the text
    // after an authority always starts with one of "/", "?" or "#". The
    // composition contract still covers the case: storage keeps the
    // rootless form and only the composed string gains the slash.
    #[test]
    fn rootless_path_gains_slash_with_authority() {
        let mut uri = Uri::parse("scheme://host/rooted").unwrap();
        uri.path = "rootless".to_owned();

        assert_eq!(uri.path(), "rootless");
        assert_eq!(uri.to_string(), "scheme://host/rootless");
    }

    #[test]
    fn empty_path_stays_empty() {
        let uri = Uri::parse("scheme://host").unwrap();
        assert_eq!(uri.to_string(), "scheme://host");
    }
}
