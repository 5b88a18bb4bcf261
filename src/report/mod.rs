//! Report assembly and routing.
//!
//! A report is one JSON object composed from collector output. Each report
//! leads with the `help_version` field and is written as a single serialized
//! line through every open sink.

pub mod runtime;
pub mod system;
pub mod version;

use anyhow::Result;
use serde_json::{Map, Value};

use crate::constants::HELP_VERSION;
use crate::context::RunContext;

/// Start a report mapping, stamped with the tool version.
fn new_report() -> Map<String, Value> {
    let mut res = Map::new();
    res.insert("help_version".to_string(), Value::from(HELP_VERSION));
    res
}

/// Serialize a report and route it through the configured sinks.
pub fn write(ctx: &mut RunContext, report: &Value) -> Result<()> {
    let line = serde_json::to_string(report)?;
    ctx.write_line(&line)
}
