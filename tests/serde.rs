#![cfg(feature = "serde")]

use serde_test::{assert_de_tokens_error, assert_tokens, Token};
use uri_parts::Uri;

#[test]
fn serializes_as_composed_string() {
    let uri = Uri::parse("http://example.com/x?a=1#f").unwrap();
    assert_tokens(&uri, &[Token::Str("http://example.com/x?a=1#f")]);
}

#[test]
fn deserialization_rejects_invalid_input() {
    assert_de_tokens_error::<Uri>(
        &[Token::Str("scheme://host:99999/")],
        "invalid port \"99999\" in \"scheme://host:99999/\"",
    );
}
