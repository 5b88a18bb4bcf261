//! The `version` check: compare the running release against the published
//! latest one.

use serde_json::Value;

use crate::collectors::api;
use crate::constants::VERSION_URL;

/// Compare the locally running version against the latest published one and
/// print a notice when they differ. Emits no JSON.
pub fn check() {
    let current = version_string(&api::api_json("/storage_service/scylla_release_version"));
    let latest = version_string(&api::fetch_json(VERSION_URL));
    if let Some(line) = mismatch_line(&current, &latest) {
        println!("{}", line);
    }
}

/// Flatten a version lookup result to a plain string. A failed lookup
/// (null) or any non-string payload without content becomes empty.
fn version_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// The notice to print when the versions differ. A lookup that failed on
/// either side suppresses the notice.
fn mismatch_line(current: &str, latest: &str) -> Option<String> {
    if current.is_empty() || latest.is_empty() || current == latest {
        return None;
    }
    Some(format!(
        "A new version was found, current version={} latest version={}",
        current, latest
    ))
}
