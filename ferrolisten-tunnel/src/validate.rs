//! Field validators shared by the tunnel variants

use ferrolisten_common::{ValidationError, MIN_BASIC_AUTH_PASSWORD_LEN};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Check one Basic-Auth credential.
pub fn validate_basic_auth(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword {
            username: username.to_string(),
        });
    }
    if password.chars().count() < MIN_BASIC_AUTH_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            username: username.to_string(),
            min: MIN_BASIC_AUTH_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Check every credential, in username order.
pub fn validate_credentials(credentials: &BTreeMap<String, String>) -> Result<(), ValidationError> {
    credentials
        .iter()
        .try_for_each(|(username, password)| validate_basic_auth(username, password))
}

pub fn require_labels(labels: &BTreeMap<String, String>) -> Result<(), ValidationError> {
    if labels.is_empty() {
        return Err(ValidationError::LabelRequired);
    }
    Ok(())
}

/// Deserialize a CIDR list where `null` and a missing field both mean "empty".
pub(crate) fn cidr_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
