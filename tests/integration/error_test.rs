//! Error classification and source positions

use super::{session_with, tunnel_of};
use ferrolisten::{ListenError, SessionConfig, ValidationError};

#[test]
fn test_syntax_errors_carry_position() {
    let err = SessionConfig::from_directives(
        "site.conf",
        "ngrok {\n\ttunnel http {\n\t\tdomain a.example.com\n\t\tbogus on\n\t}\n}",
    )
    .unwrap_err();
    match err {
        ListenError::Syntax(e) => {
            assert_eq!(e.file, "site.conf");
            assert_eq!(e.line, 4);
            assert!(e.message.contains("'bogus'"));
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_syntax_error_cases() {
    let cases = [
        ("stray tunnel argument", "tunnel http extra {\n}"),
        ("unknown tunnel type", "tunnel udp {\n}"),
        ("domain arity", "tunnel tls {\n domain\n}"),
        ("remote addr arity", "tunnel tcp {\n remote_addr a b\n}"),
        ("scheme arity", "tunnel http {\n scheme\n}"),
        ("label arity", "tunnel labeled {\n label only\n}"),
        ("header operation", "tunnel http {\n request_header set X-A 1\n}"),
        ("bad duration", "heartbeat_tolerance forever"),
        ("region arity", "region"),
    ];
    for (name, input) in cases {
        let err = session_with(input).unwrap_err();
        assert!(err.is_syntax(), "{name}: {err}");
    }
}

#[test]
fn test_unterminated_block() {
    let err = SessionConfig::from_directives("Caddyfile", "ngrok {\n tunnel http {\n}").unwrap_err();
    assert!(err.is_syntax());
    assert!(err.to_string().contains("unterminated block"));
}

#[test]
fn test_empty_blocks_are_syntax_errors() {
    let cases = [
        ("allow", "tunnel tcp {\n allow {\n }\n}"),
        ("deny", "tunnel http {\n deny {\n }\n}"),
        ("basic auth", "tunnel http {\n basic_auth {\n }\n}"),
        ("label", "tunnel labeled {\n label {\n }\n}"),
        ("request header", "tunnel http {\n request_header {\n }\n}"),
    ];
    for (name, input) in cases {
        let err = session_with(input).unwrap_err();
        assert!(err.is_syntax(), "{name}: {err}");
    }
}

#[test]
fn test_validation_errors() {
    let err = tunnel_of("tunnel http {\n circuit_breaker NaN\n}").unwrap_err();
    assert!(matches!(
        err.validation(),
        Some(ValidationError::InvalidRatio { .. })
    ));

    let tunnel = tunnel_of("tunnel http {\n circuit_breaker 2\n}").unwrap();
    assert!(tunnel.validate().is_ok());
    assert_eq!(tunnel.unusual_ratio(), Some(2.0));

    let err = tunnel_of("tunnel http {\n basic_auth \"\" password1\n}").unwrap_err();
    assert_eq!(err.validation(), Some(&ValidationError::EmptyUsername));

    let err = tunnel_of("tunnel http {\n basic_auth bob \"\"\n}").unwrap_err();
    assert!(matches!(
        err.validation(),
        Some(ValidationError::EmptyPassword { .. })
    ));
}

#[test]
fn test_validation_errors_carry_position() {
    let err = SessionConfig::from_directives(
        "site.conf",
        "ngrok {\n\ttunnel http {\n\t\tdomain a.example.com\n\t\tbasic_auth bob short\n\t}\n}",
    )
    .unwrap_err();
    assert!(err.is_validation());
    assert!(!err.is_syntax());
    assert_eq!(
        err.to_string(),
        "site.conf:4 - basic auth password for user 'bob' must be at least 8 characters"
    );

    let err = SessionConfig::from_directives(
        "site.conf",
        "ngrok {\n\ttunnel http {\n\n\t\tcircuit_breaker lots\n\t}\n}",
    )
    .unwrap_err();
    match err {
        ListenError::InvalidDirective { file, line, source } => {
            assert_eq!(file, "site.conf");
            assert_eq!(line, 4);
            assert_eq!(
                source,
                ValidationError::InvalidRatio {
                    value: "lots".into()
                }
            );
        }
        other => panic!("expected positioned validation error, got {other:?}"),
    }
}

#[test]
fn test_json_basic_auth_is_validated() {
    let config = SessionConfig::from_json(
        r#"{"tunnel": {"type": "http", "basic_auth": {"bob": "short"}}}"#,
    )
    .unwrap();
    assert!(matches!(
        config.validate(),
        Err(ListenError::Validation(
            ValidationError::PasswordTooShort { .. }
        ))
    ));
}

#[test]
fn test_missing_tunnel() {
    let config = session_with("region eu").unwrap();
    assert!(matches!(
        ferrolisten::provision(&config, &ferrolisten::NoopReplacer),
        Err(ListenError::ConfigurationIncomplete(_))
    ));
}
