//! Failure-tolerant capture of external command output.

use std::process::Command;

use log::debug;

/// Run an external command and capture its output as text.
///
/// Diagnostic output takes priority: if the command wrote anything to
/// stderr, that text is returned instead of stdout. A command that cannot be
/// found or fails to start yields the error's description. This function
/// never returns an error.
pub fn exec(program: &str, args: &[&str]) -> String {
    debug!("running {} {}", program, args.join(" "));
    match Command::new(program).args(args).output() {
        Ok(output) => {
            if !output.stderr.is_empty() {
                String::from_utf8_lossy(&output.stderr).into_owned()
            } else {
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
        }
        Err(e) => e.to_string(),
    }
}

/// Run `nodetool` with the given arguments, capturing its output.
pub fn nodetool(args: &[&str]) -> String {
    exec("nodetool", args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_captures_stdout() {
        assert_eq!(exec("echo", &["hello"]), "hello\n");
    }

    #[test]
    fn test_exec_prefers_stderr() {
        let out = exec("sh", &["-c", "echo data; echo oops >&2"]);
        assert_eq!(out, "oops\n");
    }

    #[test]
    fn test_exec_missing_command_degrades_to_message() {
        let out = exec("definitely-not-a-real-command-xyz", &[]);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_exec_nonzero_exit_without_stderr_keeps_stdout() {
        let out = exec("sh", &["-c", "echo partial; exit 3"]);
        assert_eq!(out, "partial\n");
    }
}
