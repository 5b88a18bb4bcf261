//! Archiving of the run's report files into a single zip.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

use crate::context::RunContext;

/// Compress every report file into `<run_id>.zip` inside the workspace.
///
/// No-op unless archiving or encryption was requested. Originals are left in
/// place. A missing or unreadable report file is fatal and propagates.
pub fn archive_files(ctx: &mut RunContext, zip: bool, encrypt: bool) -> Result<()> {
    if !zip && !encrypt {
        return Ok(());
    }
    let path = ctx.workspace()?.join(format!("{}.zip", ctx.run_id()));
    let file = File::create(&path)
        .with_context(|| format!("failed to create archive {}", path.display()))?;
    let mut writer = ZipWriter::new(file);

    let files: Vec<PathBuf> = ctx.files().to_vec();
    for f in &files {
        info!("adding file to archive {}", f.display());
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        let name = f.to_string_lossy().trim_start_matches('/').to_string();
        writer
            .start_file(name, options)
            .with_context(|| format!("failed to add {} to archive", f.display()))?;
        let bytes =
            fs::read(f).with_context(|| format!("failed to read {}", f.display()))?;
        writer.write_all(&bytes)?;
    }
    writer.finish().context("failed to finalize archive")?;
    ctx.set_archive(path);
    Ok(())
}
