//! Byte pattern tables from RFC 3986.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 2234].
//!
//! These tables are the building blocks for every grammar in the crate:
//! the scheme check, the authority sub-parser, and the host classifier
//! are all defined in terms of them. They are plain `const` data, built
//! at compile time and never mutated.
//!
//! [RFC 2234]: https://datatracker.ietf.org/doc/html/rfc2234/

/// A table determining the byte patterns allowed in a string.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    arr: [bool; 256],
    allows_pct_encoded: bool,
}

impl Table {
    /// Generates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes equals `b'%'`.
    pub const fn gen(mut bytes: &[u8]) -> Table {
        let mut arr = [false; 256];
        while let [cur, rem @ ..] = bytes {
            assert!(*cur != b'%', "cannot allow unencoded %");
            arr[*cur as usize] = true;
            bytes = rem;
        }
        Table {
            arr,
            allows_pct_encoded: false,
        }
    }

    /// Marks this table as allowing percent-encoded octets.
    pub const fn enc(mut self) -> Table {
        self.allows_pct_encoded = true;
        self
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the byte patterns allowed
    /// either by `self` or by `other`.
    pub const fn or(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 256 {
            self.arr[i] |= other.arr[i];
            i += 1;
        }
        self.allows_pct_encoded |= other.allows_pct_encoded;
        self
    }

    /// Returns `true` if the given unencoded byte is allowed by the table.
    #[inline]
    pub const fn allows(&self, x: u8) -> bool {
        self.arr[x as usize]
    }

    /// Returns `true` if percent-encoded octets are allowed by the table.
    #[inline]
    pub const fn allows_pct_encoded(&self) -> bool {
        self.allows_pct_encoded
    }

    /// Validates the given byte sequence with the table.
    pub const fn validate(&self, s: &[u8]) -> bool {
        let mut i = 0;
        if !self.allows_pct_encoded() {
            while i < s.len() {
                if !self.allows(s[i]) {
                    return false;
                }
                i += 1;
            }
        } else {
            while i < s.len() {
                let x = s[i];
                if x == b'%' {
                    if i + 2 >= s.len() {
                        return false;
                    }
                    if !(HEXDIG.allows(s[i + 1]) && HEXDIG.allows(s[i + 2])) {
                        return false;
                    }
                    i += 3;
                } else {
                    if !self.allows(x) {
                        return false;
                    }
                    i += 1;
                }
            }
        }
        true
    }
}

const fn gen(bytes: &[u8]) -> Table {
    Table::gen(bytes)
}

/// ALPHA = A-Z / a-z
pub const ALPHA: &Table = &gen(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// DIGIT = 0-9
pub const DIGIT: &Table = &gen(b"0123456789");

/// HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"
///                / "a" / "b" / "c" / "d" / "e" / "f"
pub const HEXDIG: &Table = &DIGIT.or(&gen(b"ABCDEFabcdef"));

/// reserved = gen-delims / sub-delims
pub const RESERVED: &Table = &GEN_DELIMS.or(SUB_DELIMS);

/// gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"
pub const GEN_DELIMS: &Table = &gen(b":/?#[]@");

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///            / "*" / "+" / "," / ";" / "="
pub const SUB_DELIMS: &Table = &gen(b"!$&'()*+,;=");

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
pub const UNRESERVED: &Table = &ALPHA.or(DIGIT).or(&gen(b"-._~"));

/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
///
/// The table covers the characters after the first; the leading ALPHA
/// is checked separately.
pub const SCHEME: &Table = &ALPHA.or(DIGIT).or(&gen(b"+-."));

/// userinfo = *( unreserved / pct-encoded / sub-delims / ":" )
pub const USERINFO: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":")).enc();

/// reg-name = *( unreserved / pct-encoded / sub-delims )
pub const REG_NAME: &Table = &UNRESERVED.or(SUB_DELIMS).enc();

/// ZoneID = 1*( unreserved )
pub const ZONE_ID: &Table = UNRESERVED;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_unencoded() {
        assert!(SCHEME.validate(b"ttp+s-2.0"));
        assert!(!SCHEME.validate(b"h%74tp"));
        assert!(ZONE_ID.validate(b"eth0"));
        assert!(!ZONE_ID.validate(b"eth0/1"));
    }

    #[test]
    fn validate_pct_encoded() {
        assert!(REG_NAME.validate(b"www.%E4%BE%8B.example"));
        assert!(USERINFO.validate(b"user:p%40ss"));
        // Incomplete and non-hexadecimal octets.
        assert!(!REG_NAME.validate(b"example%"));
        assert!(!REG_NAME.validate(b"example%a"));
        assert!(!REG_NAME.validate(b"example%zz"));
        // Colon is allowed in userinfo but not in reg-name.
        assert!(USERINFO.validate(b"a:b"));
        assert!(!REG_NAME.validate(b"a:b"));
    }

    #[test]
    fn delimiters_disjoint_from_unreserved() {
        let mut x = 0u8;
        loop {
            assert!(!(RESERVED.allows(x) && UNRESERVED.allows(x)));
            if x == 255 {
                break;
            }
            x += 1;
        }
    }
}
