//! Option lists must not depend on declaration order of mapping entries

use super::tunnel_of;
use ferrolisten::{EndpointOption, NoopReplacer};

fn option_bytes(block: &str) -> Vec<u8> {
    let tunnel = tunnel_of(block).unwrap();
    serde_json::to_vec(&tunnel.build_options()).unwrap()
}

/// Every rotation of `lines`, wrapped in a tunnel block
fn rotations(kind: &str, lines: &[&str]) -> Vec<String> {
    (0..lines.len())
        .map(|shift| {
            let mut rotated = lines.to_vec();
            rotated.rotate_left(shift);
            format!("tunnel {kind} {{\n{}\n}}", rotated.join("\n"))
        })
        .collect()
}

#[test]
fn test_http_mappings_are_sorted() {
    let lines = [
        " basic_auth carol carolcarol",
        " basic_auth alice alicealice",
        " basic_auth bob bobbobbob",
        " request_header add X-C 3",
        " request_header add X-A 1",
        " response_header add X-B 2",
        " response_header add X-A 1",
    ];
    let variants = rotations("http", &lines);
    let first = option_bytes(&variants[0]);
    for variant in &variants[1..] {
        assert_eq!(option_bytes(variant), first, "{variant}");
    }
}

#[test]
fn test_labels_are_sorted() {
    let lines = [" label zone eu", " label app api", " label tier gold"];
    let variants = rotations("labeled", &lines);
    let first = option_bytes(&variants[0]);
    for variant in &variants[1..] {
        assert_eq!(option_bytes(variant), first, "{variant}");
    }

    let tunnel = tunnel_of(&variants[0]).unwrap();
    let labels: Vec<String> = tunnel
        .build_options()
        .into_iter()
        .filter_map(|opt| match opt {
            EndpointOption::Label { label, .. } => Some(label),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["app", "tier", "zone"]);
}

#[test]
fn test_removals_keep_declaration_order() {
    let tunnel = tunnel_of(
        "tunnel http {\n request_header remove Zeta Alpha\n request_header remove Mid\n}",
    )
    .unwrap();
    assert_eq!(
        tunnel.build_options(),
        vec![
            EndpointOption::RemoveRequestHeader("Zeta".into()),
            EndpointOption::RemoveRequestHeader("Alpha".into()),
            EndpointOption::RemoveRequestHeader("Mid".into()),
        ]
    );
}

#[test]
fn test_repeated_provisioning_is_identical() {
    let config = super::session_with(
        "authtoken abc\n tunnel http {\n basic_auth b bbbbbbbb\n basic_auth a aaaaaaaa\n}",
    )
    .unwrap();
    let plans: Vec<_> = (0..5)
        .map(|_| ferrolisten::provision(&config, &NoopReplacer).unwrap())
        .collect();
    for plan in &plans[1..] {
        assert_eq!(plan, &plans[0]);
    }
}
