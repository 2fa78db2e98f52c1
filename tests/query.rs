use uri_parts::Uri;

#[test]
fn preserves_first_appearance_order() {
    let u = Uri::parse("//h/p?b=2&a=1&c=3").unwrap();
    let keys: Vec<_> = u.query().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["b", "a", "c"]);
    assert_eq!(u.query_string(), "b=2&a=1&c=3");
}

#[test]
fn duplicate_keys_last_value_wins() {
    let u = Uri::parse("//h/p?a=1&b=2&a=3").unwrap();
    let query = u.query().unwrap();
    assert_eq!(query.len(), 2);
    assert_eq!(query["a"], "3");
    assert_eq!(query["b"], "2");
    // The overwritten key keeps its original position.
    let keys: Vec<_> = query.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b"]);
}

#[test]
fn bracket_keys_are_ordinary_scalars() {
    let u = Uri::parse("//h/p?foo[]=1&foo[]=2").unwrap();
    let query = u.query().unwrap();
    assert_eq!(query.len(), 1);
    assert_eq!(query["foo[]"], "2");
}

#[test]
fn pairs_without_equals_and_empty_segments() {
    let u = Uri::parse("//h/p?flag&&x=1&").unwrap();
    let query = u.query().unwrap();
    assert_eq!(query.len(), 2);
    assert_eq!(query["flag"], "");
    assert_eq!(query["x"], "1");
}

#[test]
fn encoded_octets_pass_through_untouched() {
    let u = Uri::parse("//h/p?q=%E4%BE%8B&r=a%20b").unwrap();
    let query = u.query().unwrap();
    assert_eq!(query["q"], "%E4%BE%8B");
    assert_eq!(query["r"], "a%20b");
    assert_eq!(u.query_string(), "q=%E4%BE%8B&r=a%20b");
}

#[test]
fn empty_keys_are_kept() {
    let u = Uri::parse("//h?=x").unwrap();
    let query = u.query().unwrap();
    assert_eq!(query[""], "x");
    assert_eq!(u.query_string(), "=x");
}
