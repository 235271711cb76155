//! Grammar-level properties: list ordering, flags, arity

use super::tunnel_of;
use ferrolisten::Tunnel;

fn http(block: &str) -> ferrolisten_tunnel::HttpTunnel {
    match tunnel_of(&format!("tunnel http {{\n{block}\n}}")).unwrap() {
        Tunnel::Http(http) => http,
        other => panic!("expected http tunnel, got {other:?}"),
    }
}

#[test]
fn test_cidr_lists_default_to_empty() {
    for kind in ["tcp", "tls", "http"] {
        let tunnel = tunnel_of(&format!("tunnel {kind} {{\n}}")).unwrap();
        let (allow, deny) = match &tunnel {
            Tunnel::Tcp(t) => (&t.allow, &t.deny),
            Tunnel::Tls(t) => (&t.allow, &t.deny),
            Tunnel::Http(t) => (&t.allow, &t.deny),
            Tunnel::Labeled(_) => unreachable!(),
        };
        assert!(allow.is_empty(), "{kind}");
        assert!(deny.is_empty(), "{kind}");
    }
}

#[test]
fn test_cidr_order_across_forms() {
    let http = http(
        " allow 1.0.0.0/8
          deny 9.0.0.0/8
          allow {
            2.0.0.0/8 3.0.0.0/8
            4.0.0.0/8
          }
          allow 5.0.0.0/8
          deny {
            8.0.0.0/8
          }",
    );
    assert_eq!(
        http.allow,
        vec!["1.0.0.0/8", "2.0.0.0/8", "3.0.0.0/8", "4.0.0.0/8", "5.0.0.0/8"]
    );
    assert_eq!(http.deny, vec!["9.0.0.0/8", "8.0.0.0/8"]);
}

#[test]
fn test_flags() {
    for (arg, expected) in [
        ("", true),
        ("true", true),
        ("on", true),
        ("yes", true),
        ("1", true),
        ("false", false),
        ("off", false),
        ("no", false),
        ("0", false),
    ] {
        let tunnel = http(&format!(" compression {arg}\n websocket_tcp_converter {arg}"));
        assert_eq!(tunnel.compression, expected, "compression {arg:?}");
        assert_eq!(tunnel.websocket_tcp_converter, expected, "websocket {arg:?}");
    }
}

#[test]
fn test_unparsable_flag_is_syntax_error() {
    for arg in ["maybe", "2", "enabled"] {
        let err = tunnel_of(&format!("tunnel http {{\n compression {arg}\n}}")).unwrap_err();
        assert!(err.is_syntax(), "{arg}");
    }
    let err = tunnel_of("tunnel http {\n compression on off\n}").unwrap_err();
    assert!(err.is_syntax());
}

#[test]
fn test_quoted_and_commented_values() {
    let http = http(
        " # a comment line
          metadata \"quoted \\\"value\\\" with spaces\" # trailing comment
          domain app.example.com",
    );
    assert_eq!(http.metadata.as_deref(), Some("quoted \"value\" with spaces"));
    assert_eq!(http.domain.as_deref(), Some("app.example.com"));
}

#[test]
fn test_placeholders_are_words() {
    let http = http(" allow {env.OFFICE_NET}/24");
    assert_eq!(http.allow, vec!["{env.OFFICE_NET}/24"]);
}

#[test]
fn test_password_length_boundary() {
    for len in 1..=12 {
        let password = "p".repeat(len);
        let result = tunnel_of(&format!("tunnel http {{\n basic_auth user {password}\n}}"));
        assert_eq!(result.is_ok(), len >= 8, "password length {len}");
    }
}

#[test]
fn test_label_cardinality() {
    let none = tunnel_of("tunnel labeled {\n metadata only\n}").unwrap();
    assert!(none.validate().is_err());

    for count in 1..=3 {
        let labels: String = (0..count).map(|i| format!(" label k{i} v{i}\n")).collect();
        let tunnel = tunnel_of(&format!("tunnel labeled {{\n{labels}}}")).unwrap();
        assert!(tunnel.validate().is_ok(), "{count} labels");
        assert_eq!(tunnel.labels().map(|l| l.len()), Some(count));
    }
}
