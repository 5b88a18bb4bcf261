//! Integration tests for the report pipeline: sink routing, archiving, and
//! workspace cleanup, driven the way `main` drives a run.

use std::fs::{self, File};
use std::io::Read;

use anyhow::Result;
use serde_json::Value;
use zip::ZipArchive;

use scylla_help::archive::archive_files;
use scylla_help::context::RunContext;
use scylla_help::report;

/// A report written through an out-file sink lands on disk byte-for-byte as
/// one JSON line, and cleanup leaves the user's file alone.
#[test]
fn test_out_file_receives_report_and_survives_cleanup() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("out.json");

    let mut ctx = RunContext::new(None);
    ctx.open_sinks(Some(&out), false, false)?;
    report::write(&mut ctx, &serde_json::json!({"help_version": "1.0"}))?;
    ctx.close_sinks();
    ctx.cleanup(false);

    assert_eq!(fs::read_to_string(&out)?, "{\"help_version\":\"1.0\"}\n");
    Ok(())
}

/// Without `--zip` or `--encrypt` no archive artifact appears.
#[test]
fn test_archive_is_noop_without_flags() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("out.json");

    let mut ctx = RunContext::new(None);
    ctx.open_sinks(Some(&out), false, false)?;
    report::write(&mut ctx, &serde_json::json!({"help_version": "1.0"}))?;
    ctx.close_sinks();
    archive_files(&mut ctx, false, false)?;

    assert!(ctx.archive().is_none());
    ctx.cleanup(false);
    Ok(())
}

/// The archive is named by the run identifier and round-trips the sink
/// file's bytes.
#[test]
fn test_archive_named_by_run_id_and_roundtrips() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("out.json");

    let mut ctx = RunContext::new(Some("feedbeef".to_string()));
    ctx.open_sinks(Some(&out), false, false)?;
    report::write(&mut ctx, &serde_json::json!({"help_version": "1.0", "disk": ""}))?;
    ctx.close_sinks();
    archive_files(&mut ctx, true, false)?;

    let archive_path = ctx.archive().unwrap().to_path_buf();
    assert_eq!(
        archive_path.file_name().unwrap().to_str().unwrap(),
        "feedbeef.zip"
    );

    let mut archive = ZipArchive::new(File::open(&archive_path)?)?;
    assert_eq!(archive.len(), 1);
    let mut contents = String::new();
    archive.by_index(0)?.read_to_string(&mut contents)?;
    let parsed: Value = serde_json::from_str(contents.trim())?;
    assert_eq!(parsed["help_version"], "1.0");

    ctx.cleanup(false);
    assert!(!archive_path.exists());
    Ok(())
}

/// `--keep` retains the workspace and the artifacts in it.
#[test]
fn test_keep_retains_workspace_artifacts() -> Result<()> {
    let mut ctx = RunContext::new(None);
    ctx.open_sinks(None, true, false)?;
    report::write(&mut ctx, &serde_json::json!({"help_version": "1.0"}))?;
    ctx.close_sinks();
    archive_files(&mut ctx, true, false)?;

    let archive_path = ctx.archive().unwrap().to_path_buf();
    let workspace = archive_path.parent().unwrap().to_path_buf();
    ctx.cleanup(true);

    assert!(archive_path.exists());
    assert!(workspace.join("data.json").exists());

    fs::remove_dir_all(workspace)?;
    Ok(())
}

/// The system report carries every expected field even on a host where the
/// underlying commands and files are unavailable.
#[test]
fn test_system_report_shape() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("out.json");

    let mut ctx = RunContext::new(None);
    ctx.open_sinks(Some(&out), false, false)?;
    let res = report::system::collect(&mut ctx)?;
    report::write(&mut ctx, &res)?;
    ctx.close_sinks();

    let parsed: Value = serde_json::from_str(fs::read_to_string(&out)?.trim())?;
    for field in [
        "help_version",
        "distribution",
        "rpms",
        "scylla.yaml",
        "disk",
        "cpuinfo",
        "meminfo",
    ] {
        assert!(parsed.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(parsed["help_version"], "1.0");

    ctx.cleanup(false);
    Ok(())
}
