//! Host-level facts: files under candidate directories, distribution info,
//! and server log sources.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::collectors::command;
use crate::constants::{JOURNAL_FILE_NAME, SYSLOG_PATH, UPSTART_LOG_PATH};
use crate::context::RunContext;

/// Read a file by name from the first candidate directory that holds it.
/// Returns an empty string when no candidate matches or the file is
/// unreadable.
pub fn read_first_file(dirs: &[&str], name: &str) -> String {
    for dir in dirs {
        let path = Path::new(dir).join(name);
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(contents) => return contents,
                Err(e) => debug!("failed reading {}: {}", path.display(), e),
            }
        }
    }
    String::new()
}

/// Distribution info from `lsb_release -a`, parsed into a map.
pub fn distribution() -> BTreeMap<String, String> {
    parse_distribution(&command::exec("lsb_release", &["-a"]))
}

/// Parse a colon-delimited `key: value` block. Lines without a delimiter are
/// skipped; keys and values are trimmed.
pub fn parse_distribution(raw: &str) -> BTreeMap<String, String> {
    let mut res = BTreeMap::new();
    for line in raw.lines() {
        if let Some((key, value)) = line.split_once(':') {
            res.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    res
}

/// Attach the server's log source to the run.
///
/// Ubuntu releases before 15 logged through upstart, so their log files are
/// attached directly. Everything else gets the last two days of the scylla
/// journal captured into a workspace file.
pub fn attach_server_logs(
    ctx: &mut RunContext,
    distribution: &BTreeMap<String, String>,
) -> Result<()> {
    if uses_upstart_logs(distribution) {
        ctx.attach(SYSLOG_PATH);
        ctx.attach(UPSTART_LOG_PATH);
        return Ok(());
    }
    let capture = command::exec(
        "journalctl",
        &["_COMM=scylla", "--since", "2 days ago", "-n", "10000"],
    );
    let path = ctx.workspace()?.join(JOURNAL_FILE_NAME);
    fs::write(&path, capture)
        .with_context(|| format!("failed to write journal capture to {}", path.display()))?;
    ctx.attach(path);
    Ok(())
}

fn uses_upstart_logs(distribution: &BTreeMap<String, String>) -> bool {
    let distro = distribution
        .get("Distributor ID")
        .map(String::as_str)
        .unwrap_or("");
    let release = distribution
        .get("Release")
        .and_then(|r| r.trim().parse::<f64>().ok());
    distro.eq_ignore_ascii_case("ubuntu") && release.map_or(false, |r| r < 15.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_distribution_skips_undelimited_lines() {
        let parsed =
            parse_distribution("Distributor ID:\tUbuntu\nDescription:\tUbuntu 14.04\nbadline\n");
        assert_eq!(
            parsed,
            dist(&[
                ("Distributor ID", "Ubuntu"),
                ("Description", "Ubuntu 14.04"),
            ])
        );
    }

    #[test]
    fn test_parse_distribution_splits_on_first_colon() {
        let parsed = parse_distribution("Description: Ubuntu 14.04: LTS\n");
        assert_eq!(parsed, dist(&[("Description", "Ubuntu 14.04: LTS")]));
    }

    #[test]
    fn test_parse_distribution_empty_input() {
        assert!(parse_distribution("").is_empty());
    }

    #[test]
    fn test_read_first_file_returns_first_match() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        fs::write(b.path().join("x.txt"), "from b").unwrap();

        let a_dir = a.path().to_str().unwrap();
        let b_dir = b.path().to_str().unwrap();
        assert_eq!(read_first_file(&[a_dir, b_dir], "x.txt"), "from b");

        fs::write(a.path().join("x.txt"), "from a").unwrap();
        assert_eq!(read_first_file(&[a_dir, b_dir], "x.txt"), "from a");
    }

    #[test]
    fn test_read_first_file_missing_everywhere() {
        let a = tempfile::tempdir().unwrap();
        assert_eq!(read_first_file(&[a.path().to_str().unwrap()], "x.txt"), "");
    }

    #[test]
    fn test_upstart_selection() {
        assert!(uses_upstart_logs(&dist(&[
            ("Distributor ID", "Ubuntu"),
            ("Release", "14.04"),
        ])));
        assert!(!uses_upstart_logs(&dist(&[
            ("Distributor ID", "Ubuntu"),
            ("Release", "16.04"),
        ])));
        assert!(!uses_upstart_logs(&dist(&[
            ("Distributor ID", "CentOS"),
            ("Release", "7.2"),
        ])));
        // A failed lsb_release lookup parses to an empty map.
        assert!(!uses_upstart_logs(&BTreeMap::new()));
    }

    #[test]
    fn test_journal_capture_lands_in_workspace() {
        let mut ctx = RunContext::new(None);
        attach_server_logs(&mut ctx, &BTreeMap::new()).unwrap();

        let files = ctx.files().to_vec();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with(JOURNAL_FILE_NAME));
        assert!(files[0].exists());
        ctx.cleanup(false);
    }

    #[test]
    fn test_upstart_paths_attached_without_workspace() {
        let mut ctx = RunContext::new(None);
        let d = dist(&[("Distributor ID", "ubuntu"), ("Release", "12.04")]);
        attach_server_logs(&mut ctx, &d).unwrap();

        let files = ctx.files();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0], Path::new(SYSLOG_PATH));
        assert_eq!(files[1], Path::new(UPSTART_LOG_PATH));
        ctx.cleanup(false);
    }
}
