//! Default subject lines per alert type.

use crate::core::AlertType;
use crate::environment::EnvSnapshot;

/// Builds the subject used when `--subject` is not given.
///
/// Missing macros render as empty text.
pub fn default_subject(kind: AlertType, env: &EnvSnapshot) -> String {
    let get = |key: &str| env.get(key).map(String::as_str).unwrap_or_default();
    match kind {
        AlertType::Host => format!("{} is {}", get("HOSTADDRESS"), get("HOSTSTATE")),
        AlertType::Service => format!(
            "{}: {} - {}",
            get("SERVICESTATE"),
            get("HOSTADDRESS"),
            get("SERVICEDESC")
        ),
        AlertType::Acknowledgement => format!(
            "{}: {} - {}",
            get("NOTIFICATIONTYPE"),
            get("HOSTADDRESS"),
            get("SERVICEDESC")
        ),
    }
}
