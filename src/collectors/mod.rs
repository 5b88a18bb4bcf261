//! Data collectors for host facts, external commands, and the local
//! management API.
//!
//! Every collector degrades to an empty value on failure (missing file,
//! absent command, unreachable endpoint). Whether a failure is fatal is
//! decided at the call site, not here.

pub mod api;
pub mod command;
pub mod host;
