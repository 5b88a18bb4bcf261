//! Per-run state threaded through every pipeline stage.
//!
//! The context owns the run identifier, the lazily created temporary
//! workspace, the set of open sinks, and the paths of the artifacts produced
//! by the archive and encrypt stages. One context exists per invocation.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use log::{info, warn};
use uuid::Uuid;

use crate::constants::{CALL_HOME_FILE_NAME, WORKSPACE_PREFIX};

/// A destination currently receiving report bytes.
///
/// File sinks are owned and close with their handles; dropping the stdout
/// variant leaves the process's standard output open.
#[derive(Debug)]
pub enum Sink {
    /// An owned file opened for writing.
    File { path: PathBuf, file: File },
    /// The process standard output.
    Stdout,
}

impl Sink {
    /// Open a writable file sink at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to open output file {}", path.display()))?;
        Ok(Sink::File {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Write one line and flush, so every sink observes the same bytes in
    /// the same order they were produced.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        match self {
            Sink::File { path, file } => {
                file.write_all(line.as_bytes())
                    .and_then(|()| file.write_all(b"\n"))
                    .and_then(|()| file.flush())
                    .with_context(|| format!("failed writing to {}", path.display()))
            }
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line.as_bytes())
                    .and_then(|()| out.write_all(b"\n"))
                    .and_then(|()| out.flush())
                    .context("failed writing to standard output")
            }
        }
    }

    /// Identifying path for file sinks; stdout has none.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Sink::File { path, .. } => Some(path),
            Sink::Stdout => None,
        }
    }
}

/// State shared by all stages of a single run.
#[derive(Debug, Default)]
pub struct RunContext {
    run_id: String,
    workspace: Option<PathBuf>,
    sinks: Vec<Sink>,
    files: Vec<PathBuf>,
    archive: Option<PathBuf>,
    encrypted: Option<PathBuf>,
}

impl RunContext {
    /// Create a context, generating a fresh run identifier unless the caller
    /// supplied one. The identifier stays stable across all stages.
    pub fn new(run_id: Option<String>) -> Self {
        let run_id = match run_id {
            Some(id) if !id.is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };
        RunContext {
            run_id,
            ..RunContext::default()
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Path of the temporary workspace, creating it on first use. Repeated
    /// calls return the same directory.
    pub fn workspace(&mut self) -> Result<PathBuf> {
        if let Some(ws) = &self.workspace {
            return Ok(ws.clone());
        }
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir()
            .context("failed to create temporary directory")?
            .into_path();
        info!("using temporary directory {}", dir.display());
        self.workspace = Some(dir.clone());
        Ok(dir)
    }

    /// Open the sink set for this run.
    ///
    /// An explicit `--out-file` wins over the hidden call-home sink; the
    /// stdout tee, if requested, is pushed last so it is the first to go at
    /// teardown.
    pub fn open_sinks(
        &mut self,
        out_file: Option<&Path>,
        call_home: bool,
        tee: bool,
    ) -> Result<()> {
        if let Some(path) = out_file {
            self.workspace()?;
            self.push_file_sink(path)?;
            info!("writing to file {}", path.display());
        } else if call_home {
            let path = self.workspace()?.join(CALL_HOME_FILE_NAME);
            self.push_file_sink(&path)?;
        }
        if tee {
            self.sinks.push(Sink::Stdout);
        }
        Ok(())
    }

    fn push_file_sink(&mut self, path: &Path) -> Result<()> {
        let sink = Sink::open(path)?;
        self.files.push(path.to_path_buf());
        self.sinks.push(sink);
        Ok(())
    }

    /// Route one line of report output through every open sink.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        for sink in &mut self.sinks {
            sink.write_line(line)?;
        }
        Ok(())
    }

    /// Record a read-only file (a log source) as part of the report file
    /// set without opening it for writing.
    pub fn attach(&mut self, path: impl Into<PathBuf>) {
        self.files.push(path.into());
    }

    /// Every on-disk file backing this run's report, in the order it was
    /// added: owned sink files first, then attached log sources.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Drop all sinks in reverse acquisition order. File sinks close with
    /// their handles; the stdout stream stays open.
    pub fn close_sinks(&mut self) {
        while let Some(sink) = self.sinks.pop() {
            drop(sink);
        }
    }

    pub fn set_archive(&mut self, path: PathBuf) {
        self.archive = Some(path);
    }

    pub fn archive(&self) -> Option<&Path> {
        self.archive.as_deref()
    }

    pub fn set_encrypted(&mut self, path: PathBuf) {
        self.encrypted = Some(path);
    }

    pub fn encrypted(&self) -> Option<&Path> {
        self.encrypted.as_deref()
    }

    /// Remove the workspace and everything in it, unless retention was
    /// requested. A workspace that never existed or was already removed is
    /// not an error.
    pub fn cleanup(mut self, keep: bool) {
        if keep {
            info!("not cleaning any files");
            return;
        }
        self.close_sinks();
        if let Some(ws) = self.workspace.take() {
            if let Err(e) = fs::remove_dir_all(&ws) {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!("failed to remove workspace {}: {}", ws.display(), e);
                }
            }
        }
    }
}
