//! The `system` report: host facts for a support case.

use anyhow::Result;
use serde_json::{json, Value};

use crate::collectors::{command, host};
use crate::constants::{CONF_DIRS, PROC_DIR};
use crate::context::RunContext;

/// Collect the system report: distribution info, installed packages, the
/// server log source, the server configuration, and disk/CPU/memory data.
pub fn collect(ctx: &mut RunContext) -> Result<Value> {
    let mut res = super::new_report();

    let distribution = host::distribution();
    res.insert("distribution".to_string(), json!(distribution));
    res.insert("rpms".to_string(), json!(command::exec("rpm", &["-qa"])));
    host::attach_server_logs(ctx, &distribution)?;
    res.insert(
        "scylla.yaml".to_string(),
        json!(host::read_first_file(CONF_DIRS, "scylla.yaml")),
    );
    res.insert("disk".to_string(), json!(command::exec("df", &["-k"])));
    res.insert(
        "cpuinfo".to_string(),
        json!(host::read_first_file(&[PROC_DIR], "cpuinfo")),
    );
    res.insert(
        "meminfo".to_string(),
        json!(host::read_first_file(&[PROC_DIR], "meminfo")),
    );

    Ok(Value::Object(res))
}
