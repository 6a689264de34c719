//! Snapshot of the monitoring daemon's environment macros.

use std::collections::BTreeMap;

/// Prefix-stripped environment variables, e.g. `HOSTADDRESS -> "web1"`.
///
/// Sorted so the JSON dump in the fallback body is stable.
pub type EnvSnapshot = BTreeMap<String, String>;

/// Keeps the variables starting with `prefix` and strips it from their names.
///
/// A variable named exactly `prefix` would produce an empty key and is dropped.
pub fn snapshot<I, K, V>(vars: I, prefix: &str) -> EnvSnapshot
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    vars.into_iter()
        .filter_map(|(name, value)| {
            let key = name.as_ref().strip_prefix(prefix)?;
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.into()))
        })
        .collect()
}

/// Reads the current process environment.
///
/// Variables that are not valid unicode cannot come from the monitoring
/// daemon's macros and are skipped.
pub fn process_vars() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

/// Looks up a key, treating an empty value as absent.
pub fn non_empty<'a>(env: &'a EnvSnapshot, key: &str) -> Option<&'a str> {
    env.get(key).map(String::as_str).filter(|v| !v.is_empty())
}
