//! Provisioning whole fixture files into provider option sets

use ferrolisten::{
    establish, provision, DryRunConnector, EndpointOption, EnvReplacer, ListenError,
    SessionConfig, SessionOption, TunnelKind, ValidationError,
};
use ferrolisten_tests::{fake_env, fixture};
use ferrolisten_tunnel::Scheme;
use std::time::Duration;

#[test]
fn test_http_fixture_plan() {
    ferrolisten_observability::init_minimal_logging();

    let config = SessionConfig::load(fixture("http.caddyfile")).unwrap();
    let plan = provision(&config, &EnvReplacer::with_lookup(fake_env)).unwrap();

    assert_eq!(plan.kind, TunnelKind::Http);
    assert_eq!(
        plan.session,
        vec![
            SessionOption::Authtoken("tok_fixture".into()),
            SessionOption::Metadata("edge session".into()),
            SessionOption::Region("eu".into()),
            SessionOption::HeartbeatInterval(Duration::from_secs(10)),
            SessionOption::HeartbeatTolerance(Duration::from_secs(30)),
        ]
    );
    assert_eq!(
        plan.tunnel,
        vec![
            EndpointOption::Domain("app.example.com".into()),
            EndpointOption::Metadata("Hello, World!".into()),
            EndpointOption::AllowCidr(vec![
                "10.0.0.0/8".into(),
                "203.0.113.0/24".into(),
                "192.168.0.0/16".into(),
            ]),
            EndpointOption::DenyCidr(vec!["10.1.0.0/16".into()]),
            EndpointOption::CircuitBreaker(0.5),
            EndpointOption::Compression,
            EndpointOption::Scheme(Scheme::Https),
            EndpointOption::BasicAuth {
                username: "amy".into(),
                password: "amyamyamy".into(),
            },
            EndpointOption::BasicAuth {
                username: "zoe".into(),
                password: "zoezoezoe".into(),
            },
            EndpointOption::RequestHeader {
                name: "X-Env".into(),
                value: "staging".into(),
            },
            EndpointOption::RemoveRequestHeader("Cookie".into()),
            EndpointOption::ResponseHeader {
                name: "Strict-Transport-Security".into(),
                value: "max-age=31536000".into(),
            },
            EndpointOption::RemoveResponseHeader("Server".into()),
            EndpointOption::RemoveResponseHeader("X-Powered-By".into()),
        ]
    );
}

#[test]
fn test_labeled_fixture_plan() {
    let config = SessionConfig::load(fixture("labeled.json")).unwrap();
    let plan = provision(&config, &EnvReplacer::with_lookup(fake_env)).unwrap();

    assert_eq!(plan.kind, TunnelKind::Labeled);
    assert_eq!(
        plan.session,
        vec![
            SessionOption::Authtoken("tok_fixture".into()),
            SessionOption::Region("us".into()),
            SessionOption::HeartbeatInterval(Duration::from_secs(15)),
        ]
    );
    assert_eq!(
        plan.tunnel,
        vec![
            EndpointOption::Label {
                label: "app".into(),
                value: "billing".into(),
            },
            EndpointOption::Label {
                label: "edge".into(),
                value: "edghts_2Xc4".into(),
            },
            EndpointOption::Metadata("labeled via json".into()),
        ]
    );
}

#[test]
fn test_tcp_fixture_plan() {
    let config = SessionConfig::load(fixture("tcp.caddyfile")).unwrap();
    let plan = provision(&config, &EnvReplacer::with_lookup(fake_env)).unwrap();

    assert_eq!(plan.session, vec![SessionOption::AuthtokenFromEnv]);
    assert_eq!(
        plan.tunnel,
        vec![
            EndpointOption::RemoteAddr("1.tcp.ngrok.io:20000".into()),
            EndpointOption::AllowCidr(vec!["127.0.0.0/8".into(), "10.0.0.0/8".into()]),
        ]
    );
}

#[test]
fn test_strict_substitution_reports_placeholder() {
    let config = SessionConfig::load(fixture("http.caddyfile")).unwrap();
    let empty_env = EnvReplacer::with_lookup(|_: &str| None).strict(true);

    match provision(&config, &empty_env) {
        Err(ListenError::Validation(ValidationError::Substitution { placeholder })) => {
            assert!(placeholder.starts_with("{env."), "{placeholder}");
        }
        other => panic!("expected substitution error, got {other:?}"),
    }

    let lenient = EnvReplacer::with_lookup(|_: &str| None);
    let plan = provision(&config, &lenient).unwrap();
    assert_eq!(
        plan.session[0],
        SessionOption::Authtoken("{env.NGROK_AUTHTOKEN}".into())
    );
}

#[test]
fn test_dry_run_matches_provision() {
    ferrolisten_observability::init_minimal_logging();

    let config = SessionConfig::load(fixture("labeled.json")).unwrap();
    let replacer = EnvReplacer::with_lookup(fake_env);
    let plan = establish(&config, &replacer, &DryRunConnector).unwrap();
    assert_eq!(plan, provision(&config, &replacer).unwrap());
}

#[test]
fn test_plan_serializes_for_inspection() {
    let config = SessionConfig::load(fixture("tcp.caddyfile")).unwrap();
    let plan = provision(&config, &EnvReplacer::with_lookup(fake_env)).unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["kind"], "tcp");
    assert_eq!(json["tunnel"][0]["option"], "remote_addr");
    assert_eq!(json["tunnel"][0]["value"], "1.tcp.ngrok.io:20000");
}
