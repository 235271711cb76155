//! Scalar argument parsing

/// Parse a boolean directive argument.
///
/// Accepts `true`/`false`, `on`/`off`, `yes`/`no` and `1`/`0`, ignoring case.
pub fn parse_bool(arg: &str) -> Option<bool> {
    match arg.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}
