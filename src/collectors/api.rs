//! JSON lookups against the local management API and the remote
//! version-check endpoint.

use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::constants::{API_BASE, HTTP_TIMEOUT};

/// Query the local management API, expecting a JSON body.
///
/// Any transport failure, HTTP error status, or undecodable body degrades to
/// `Value::Null` so a report field is emitted either way.
pub fn api_json(path: &str) -> Value {
    fetch_json(&format!("{}{}", API_BASE, path))
}

/// GET a URL and decode the JSON response, degrading to `Value::Null` on any
/// failure. Requests carry a bounded timeout so an unreachable endpoint
/// cannot stall the run.
pub fn fetch_json(url: &str) -> Value {
    let client = match Client::builder().timeout(HTTP_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => {
            debug!("failed to build http client: {}", e);
            return Value::Null;
        }
    };
    match client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.json::<Value>())
    {
        Ok(value) => value,
        Err(e) => {
            debug!("request to {} failed: {}", url, e);
            Value::Null
        }
    }
}
