//! Best-effort upload of run artifacts to the support bucket.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::constants::{TELEMETRICS_BUCKET, UPLOAD_TIMEOUT};
use crate::context::RunContext;

/// Upload this run's results when call-home was requested.
///
/// Uploads are sequential and independent: a failed file is reported with a
/// single line and the remaining files are still attempted.
pub fn send_results(ctx: &RunContext, call_home: bool) {
    if !call_home {
        return;
    }
    info!("using UUID {}", ctx.run_id());
    let client = match Client::builder().timeout(UPLOAD_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => {
            warn!("failed to build upload client: {}", e);
            return;
        }
    };
    for path in upload_targets(ctx) {
        let url = object_url(TELEMETRICS_BUCKET, ctx.run_id(), &path);
        put_file(&client, &path, &url);
    }
}

/// Destination priority: the encrypted artifact, else the plain archive,
/// else every raw report file individually.
fn upload_targets(ctx: &RunContext) -> Vec<PathBuf> {
    if let Some(encrypted) = ctx.encrypted() {
        vec![encrypted.to_path_buf()]
    } else if let Some(archive) = ctx.archive() {
        vec![archive.to_path_buf()]
    } else {
        ctx.files().to_vec()
    }
}

/// URL an artifact is uploaded to: the bucket endpoint, namespaced by the
/// run identifier, keyed by the artifact's file name.
pub fn object_url(bucket: &str, run_id: &str, path: &Path) -> String {
    let base_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("https://{}.s3.amazonaws.com/{}/{}", bucket, run_id, base_name)
}

fn put_file(client: &Client, path: &Path, url: &str) {
    // A report file that was never produced (e.g. an absent syslog) is
    // simply not uploaded.
    if !path.exists() {
        return;
    }
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed uploading file {}: {}", path.display(), e);
            return;
        }
    };
    match client.put(url).body(bytes).send() {
        Ok(resp) if resp.status() == StatusCode::OK => info!("uploaded {}", path.display()),
        Ok(resp) => warn!(
            "Failed uploading file {}: HTTP {}",
            path.display(),
            resp.status()
        ),
        Err(e) => warn!("Failed uploading file {}: {}", path.display(), e),
    }
}
