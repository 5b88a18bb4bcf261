//! # scylla-help
//!
//! Support-data collection tool for Scylla nodes.
//!
//! A run is one pass through a fixed pipeline: collect host or runtime
//! facts, serialize them to a JSON report, route the bytes through the
//! configured sinks, then optionally archive, encrypt, and upload the result
//! before cleaning up the temporary workspace.
//!
//! ## Module Organization
//!
//! - [`cli`]: command-line interface definitions
//! - [`constants`]: bucket names, endpoints, and the embedded certificate
//! - [`context`]: per-run state (identifier, workspace, sinks, artifacts)
//! - [`collectors`]: failure-tolerant command/file/API collectors
//! - [`report`]: report assembly for the `system`, `scylla`, and `version`
//!   operations
//! - [`archive`]: zip creation over the run's report files
//! - [`crypto`]: archive encryption via the external openssl tool
//! - [`upload`]: best-effort PUTs to the support bucket
//!
//! Collection failures degrade to empty values; only the archive and
//! encrypt stages are allowed to fail the run.

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Application constants and embedded credentials
pub mod constants;

/// Per-run state threaded through the pipeline stages
pub mod context;

/// Failure-tolerant data collectors
pub mod collectors;

/// Report assembly and routing
pub mod report;

/// Archiving of report files
pub mod archive;

/// Archive encryption
pub mod crypto;

/// Artifact upload
pub mod upload;
