use std::net::{Ipv4Addr, Ipv6Addr};
use uri_parts::{component::Host, Uri};

fn host_of(s: &str) -> Uri {
    Uri::parse(s).unwrap()
}

#[test]
fn ipv4_hosts() {
    let u = host_of("telnet://192.0.2.16:80/");
    let a = u.authority().unwrap();
    assert_eq!(a.host(), "192.0.2.16");
    assert_eq!(a.host_parsed(), Host::Ipv4(Ipv4Addr::new(192, 0, 2, 16)));
    assert_eq!(a.port(), Some(80));

    let u = host_of("//0.0.0.0");
    assert_eq!(
        u.authority().unwrap().host_parsed(),
        Host::Ipv4(Ipv4Addr::UNSPECIFIED)
    );

    let u = host_of("//255.255.255.255");
    assert_eq!(
        u.authority().unwrap().host_parsed(),
        Host::Ipv4(Ipv4Addr::BROADCAST)
    );
}

#[test]
fn strict_ipv4_falls_back_to_reg_name() {
    for host in ["127.0.0.001", "127.1", "127.00.00.1", "256.1.1.1", "192.0.2.16x"] {
        let u = Uri::parse(&format!("//{host}")).unwrap();
        let a = u.authority().unwrap();
        assert_eq!(a.host_parsed(), Host::RegName(host), "{host}");
    }
}

#[test]
fn ipv6_hosts() {
    let u = host_of("ldap://[2001:db8::7]/c=GB?objectClass?one");
    let a = u.authority().unwrap();
    assert_eq!(a.host(), "[2001:db8::7]");
    assert_eq!(
        a.host_parsed(),
        Host::Ipv6 {
            addr: Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0x7),
            zone: None,
        }
    );

    let u = host_of("//[::]");
    assert_eq!(
        u.authority().unwrap().host_parsed(),
        Host::Ipv6 {
            addr: Ipv6Addr::UNSPECIFIED,
            zone: None,
        }
    );

    let u = host_of("//[::1]");
    assert_eq!(
        u.authority().unwrap().host_parsed(),
        Host::Ipv6 {
            addr: Ipv6Addr::LOCALHOST,
            zone: None,
        }
    );

    // Embedded IPv4 form.
    let u = host_of("//[::ffff:192.0.2.1]");
    assert_eq!(
        u.authority().unwrap().host_parsed(),
        Host::Ipv6 {
            addr: Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0xc000, 0x0201),
            zone: None,
        }
    );

    let u = host_of("//[0:0:0:0:0:0:255.255.255.255]");
    assert_eq!(
        u.authority().unwrap().host_parsed(),
        Host::Ipv6 {
            addr: Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0xffff, 0xffff),
            zone: None,
        }
    );
}

#[test]
fn ipv6_zone_identifiers() {
    let u = host_of("//[fe80::%eth0]/");
    let a = u.authority().unwrap();
    assert_eq!(a.host(), "[fe80::%eth0]");
    assert_eq!(
        a.host_parsed(),
        Host::Ipv6 {
            addr: Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0),
            zone: Some("eth0"),
        }
    );

    let u = host_of("//[fe80::1%25]");
    assert_eq!(
        u.authority().unwrap().host_parsed(),
        Host::Ipv6 {
            addr: Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1),
            zone: Some("25"),
        }
    );

    // An empty zone is not a zone.
    let u = host_of("//[::1%]");
    assert_eq!(u.authority().unwrap().host_parsed(), Host::RegName("[::1%]"));
}

#[test]
fn invalid_literals_fall_back_to_reg_name() {
    for host in ["[44:55::66::77]", "[:]", "[]", "[::01.1.1.1]", "[vFe.foo.bar]", "[::1"] {
        let u = Uri::parse(&format!("//{host}")).unwrap();
        let a = u.authority().unwrap();
        assert_eq!(a.host_parsed(), Host::RegName(host), "{host}");
    }
}

#[test]
fn reg_name_hosts() {
    let u = host_of("http://example.com/");
    assert_eq!(
        u.authority().unwrap().host_parsed(),
        Host::RegName("example.com")
    );

    let u = host_of("///");
    assert_eq!(u.authority().unwrap().host_parsed(), Host::RegName(""));
}

#[test]
fn bracketed_host_with_port_and_userinfo() {
    let u = host_of("https://user@[::1]:8080/x");
    let a = u.authority().unwrap();
    assert_eq!(a.userinfo().unwrap().user(), "user");
    assert_eq!(a.host(), "[::1]");
    assert_eq!(a.port(), Some(8080));
    assert_eq!(u.path(), "/x");
}
