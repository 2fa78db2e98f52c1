use crate::{
    component::{Authority, Host, Scheme, UserInfo},
    error::{SyntaxError, SyntaxErrorKind},
    ports, query, table, Uri,
};

type Result<T> = std::result::Result<T, SyntaxError>;

/// Parses a raw string into a [`Uri`].
///
/// The split follows the grammar of RFC 3986 Appendix B: the input is cut
/// at the `:`, `//`, `/`, `?` and `#` delimiters and the pieces are kept
/// as they appear. Only three conditions fail: a control character
/// anywhere in the input, a present but malformed scheme, and a present
/// but non-numeric or out-of-range port.
pub(crate) fn parse(input: &str) -> Result<Uri> {
    if let Some(index) = input.bytes().position(|x| x.is_ascii_control()) {
        return Err(SyntaxError::new(
            SyntaxErrorKind::ControlCharacter { index },
            input,
        ));
    }

    let mut parser = Parser {
        reader: Reader::new(input),
        input,
    };
    parser.parse()
}

/// URI parser.
///
/// # Invariants
///
/// `pos <= len`, `pos` is non-decreasing and on the boundary of a UTF-8
/// code point: the reader only stops at ASCII delimiters.
struct Parser<'a> {
    reader: Reader<'a>,
    input: &'a str,
}

struct Reader<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(s: &'a str) -> Self {
        Reader { s, pos: 0 }
    }

    fn len(&self) -> usize {
        self.s.len()
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.len()
    }

    fn peek(&self, i: usize) -> Option<u8> {
        self.s.as_bytes().get(self.pos + i).copied()
    }

    // Any call to this method must keep the invariants.
    fn skip(&mut self, n: usize) {
        // INVARIANT: `pos` is non-decreasing.
        self.pos += n;
        debug_assert!(self.pos <= self.len());
    }

    fn reset(&mut self) {
        self.pos = 0;
    }

    fn read_str(&mut self, s: &str) -> bool {
        if self.s.as_bytes()[self.pos..].starts_with(s.as_bytes()) {
            // INVARIANT: The remaining bytes start with `s` so it's fine to skip `s.len()`.
            self.skip(s.len());
            true
        } else {
            false
        }
    }

    /// Reads up to but not including the first occurrence of any delimiter.
    fn read_until(&mut self, delims: &[u8]) -> &'a str {
        let start = self.pos;
        while let Some(x) = self.peek(0) {
            if delims.contains(&x) {
                break;
            }
            // INVARIANT: Slicing happens only at a delimiter or at the
            // end of input, both of which are code point boundaries.
            self.skip(1);
        }
        &self.s[start..self.pos]
    }

    fn read_rest(&mut self) -> &'a str {
        let rest = &self.s[self.pos..];
        self.pos = self.len();
        rest
    }

    fn peek_digit(&self, i: usize) -> Option<u32> {
        self.peek(i).and_then(|x| (x as char).to_digit(10))
    }

    fn peek_hexdig(&self, i: usize) -> Option<u16> {
        self.peek(i)
            .and_then(|x| (x as char).to_digit(16))
            .map(|v| v as u16)
    }

    fn read_v6(&mut self) -> Option<[u16; 8]> {
        let mut segs = [0; 8];
        let mut ellipsis_i = 8;

        let mut i = 0;
        while i < 8 {
            match self.read_v6_segment() {
                Some(Seg::Normal(seg, colon)) => {
                    if colon == (i == 0 || i == ellipsis_i) {
                        // Leading colon, triple colons, or no colon.
                        return None;
                    }
                    segs[i] = seg;
                    i += 1;
                }
                Some(Seg::Ellipsis) => {
                    if ellipsis_i != 8 {
                        // Multiple ellipses.
                        return None;
                    }
                    ellipsis_i = i;
                }
                Some(Seg::MaybeV4(colon)) => {
                    if i > 6 || colon == (i == ellipsis_i) {
                        // Not enough space, triple colons, or no colon.
                        return None;
                    }
                    let octets = self.read_v4()?.to_be_bytes();
                    segs[i] = u16::from_be_bytes([octets[0], octets[1]]);
                    segs[i + 1] = u16::from_be_bytes([octets[2], octets[3]]);
                    i += 2;
                    break;
                }
                Some(Seg::SingleColon) => return None,
                None => break,
            }
        }

        if ellipsis_i == 8 {
            // No ellipsis.
            if i != 8 {
                // Too short.
                return None;
            }
        } else if i == 8 {
            // Eliding nothing.
            return None;
        } else {
            // Shift the segments after the ellipsis to the right.
            for j in (ellipsis_i..i).rev() {
                segs[8 - (i - j)] = segs[j];
                segs[j] = 0;
            }
        }

        Some(segs)
    }

    fn read_v6_segment(&mut self) -> Option<Seg> {
        let colon = self.read_str(":");
        if !self.has_remaining() {
            return colon.then_some(Seg::SingleColon);
        }

        let first = self.peek(0).unwrap();
        let mut x = match self.peek_hexdig(0) {
            Some(v) => v,
            None => {
                return colon.then(|| {
                    if first == b':' {
                        // INVARIANT: Skipping ":" is fine.
                        self.skip(1);
                        Seg::Ellipsis
                    } else {
                        Seg::SingleColon
                    }
                });
            }
        };
        let mut i = 1;

        while i < 4 {
            match self.peek_hexdig(i) {
                Some(v) => {
                    x = (x << 4) | v;
                    i += 1;
                }
                None if self.peek(i) == Some(b'.') => return Some(Seg::MaybeV4(colon)),
                None => break,
            }
        }
        // INVARIANT: Skipping `i` hexadecimal digits is fine.
        self.skip(i);
        Some(Seg::Normal(x, colon))
    }

    fn read_v4(&mut self) -> Option<u32> {
        let mut addr = self.read_v4_octet()? << 24;
        for i in (0..3).rev() {
            if !self.read_str(".") {
                return None;
            }
            addr |= self.read_v4_octet()? << (i * 8);
        }
        Some(addr)
    }

    fn read_v4_octet(&mut self) -> Option<u32> {
        let mut res = self.peek_digit(0)?;
        if res == 0 {
            // INVARIANT: Skipping "0" is fine.
            self.skip(1);
            return Some(0);
        }

        for i in 1..3 {
            let Some(x) = self.peek_digit(i) else {
                // INVARIANT: Skipping `i` digits is fine.
                self.skip(i);
                return Some(res);
            };
            res = res * 10 + x;
        }
        // INVARIANT: Skipping 3 digits is fine.
        self.skip(3);

        u8::try_from(res).is_ok().then_some(res)
    }
}

enum Seg {
    // *1":" 1*4HEXDIG
    Normal(u16, bool),
    // "::"
    Ellipsis,
    // *1":" 1*4HEXDIG "."
    MaybeV4(bool),
    // ":"
    SingleColon,
}

impl<'a> Parser<'a> {
    fn parse(&mut self) -> Result<Uri> {
        let scheme = self.read_scheme()?;

        let authority = if self.reader.read_str("//") {
            let raw = self.reader.read_until(b"/?#");
            let mut authority = self.parse_authority(raw)?;
            authority.port = ports::normalize(&scheme, authority.port);
            Some(authority)
        } else {
            None
        };

        let path = self.reader.read_until(b"?#");

        let query = if self.reader.read_str("?") {
            Some(query::parse_pairs(self.reader.read_until(b"#")))
        } else {
            None
        };

        let fragment = if self.reader.read_str("#") {
            self.reader.read_rest()
        } else {
            ""
        };

        Ok(Uri {
            scheme,
            authority,
            path: path.to_owned(),
            query,
            fragment: fragment.to_owned(),
        })
    }

    /// Reads the scheme, if one is present.
    ///
    /// Per Appendix B, a scheme is the non-empty text before the first
    /// occurrence of `:`, `/`, `?` or `#`, provided that occurrence is a
    /// colon. Text that turns out not to be a scheme is left for the path.
    fn read_scheme(&mut self) -> Result<String> {
        let candidate = self.reader.read_until(b":/?#");

        if candidate.is_empty() || self.reader.peek(0) != Some(b':') {
            self.reader.reset();
            return Ok(String::new());
        }

        if Scheme::new(candidate).is_none() {
            return Err(SyntaxError::new(
                SyntaxErrorKind::InvalidScheme {
                    scheme: candidate.into(),
                },
                self.input,
            ));
        }

        // INVARIANT: Skipping ":" is fine.
        self.reader.skip(1);
        Ok(candidate.to_owned())
    }

    fn parse_authority(&self, raw: &'a str) -> Result<Authority> {
        // The userinfo ends at the last "@"; earlier "@"s belong to it.
        let (userinfo, host_port) = match raw.rfind('@') {
            Some(i) => (Some(parse_userinfo(&raw[..i])), &raw[i + 1..]),
            None => (None, raw),
        };

        let (host, port) = split_host_port(host_port);
        let port = match port {
            Some(p) if !p.is_empty() => Some(self.parse_port(p)?),
            _ => None,
        };

        Ok(Authority {
            userinfo,
            host: host.to_owned(),
            port,
        })
    }

    fn parse_port(&self, p: &str) -> Result<u16> {
        let err = || {
            SyntaxError::new(
                SyntaxErrorKind::InvalidPort { port: p.into() },
                self.input,
            )
        };

        if !p.bytes().all(|x| x.is_ascii_digit()) {
            return Err(err());
        }
        p.parse::<u32>()
            .ok()
            .and_then(|v| u16::try_from(v).ok())
            .ok_or_else(err)
    }
}

fn parse_userinfo(raw: &str) -> UserInfo {
    let (user, password) = match raw.split_once(':') {
        Some((user, password)) => (user, Some(password.to_owned())),
        None => (raw, None),
    };
    UserInfo {
        user: user.to_owned(),
        password,
    }
}

/// Splits an authority remainder into host and optional raw port.
///
/// Square brackets shield the colons of an IPv6 literal. For all other
/// hosts the split is at the last colon. An unclosed bracket leaves the
/// whole text as the host.
fn split_host_port(s: &str) -> (&str, Option<&str>) {
    if s.starts_with('[') {
        if let Some(i) = s.find(']') {
            let rest = &s[i + 1..];
            if let Some(port) = rest.strip_prefix(':') {
                return (&s[..=i], Some(port));
            }
            if rest.is_empty() {
                return (s, None);
            }
        }
        (s, None)
    } else {
        match s.rfind(':') {
            Some(i) => (&s[..i], Some(&s[i + 1..])),
            None => (s, None),
        }
    }
}

/// Classifies a stored host string as an IPv4 address, an IPv6 literal
/// or a registered name.
///
/// Classification is total: a bracketed form that is not a valid IPv6
/// literal falls back to a registered name rather than failing.
pub(crate) fn classify_host(host: &str) -> Host<'_> {
    if let Some(inner) = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
    {
        let (addr, zone) = match inner.split_once('%') {
            Some((addr, zone)) => (addr, Some(zone)),
            None => (inner, None),
        };

        let zone_ok = match zone {
            Some(z) => !z.is_empty() && table::ZONE_ID.validate(z.as_bytes()),
            None => true,
        };
        if zone_ok {
            let mut reader = Reader::new(addr);
            if let Some(segs) = reader.read_v6() {
                if !reader.has_remaining() {
                    return Host::Ipv6 {
                        addr: segs.into(),
                        zone,
                    };
                }
            }
        }
        Host::RegName(host)
    } else {
        let mut reader = Reader::new(host);
        match reader.read_v4() {
            Some(addr) if !reader.has_remaining() => Host::Ipv4(addr.into()),
            _ => Host::RegName(host),
        }
    }
}
