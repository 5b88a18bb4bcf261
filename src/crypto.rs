//! Encryption of the support archive against the embedded certificate.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context, Result};
use log::info;

use crate::constants::{KEY_FILE_NAME, SCYLLA_PUBLIC_KEY};
use crate::context::RunContext;

/// Encrypt the previously produced archive, leaving a detached
/// `<archive>.cryp` alongside it.
///
/// The certificate is written to the workspace and handed to
/// `openssl smime`; its exit status is authoritative and a failure is fatal.
pub fn encrypt_archive(ctx: &mut RunContext) -> Result<()> {
    let archive = ctx
        .archive()
        .context("no archive to encrypt")?
        .to_path_buf();
    let key_file = ctx.workspace()?.join(KEY_FILE_NAME);
    fs::write(&key_file, SCYLLA_PUBLIC_KEY)
        .with_context(|| format!("failed to write {}", key_file.display()))?;

    let encrypted = PathBuf::from(format!("{}.cryp", archive.display()));
    info!("encrypting archive to {}", encrypted.display());
    let status = Command::new("openssl")
        .args(["smime", "-encrypt", "-binary", "-aes-256-cbc", "-in"])
        .arg(&archive)
        .arg("-out")
        .arg(&encrypted)
        .args(["-outform", "DER"])
        .arg(&key_file)
        .status()
        .context("failed to run openssl")?;
    if !status.success() {
        bail!("openssl smime failed with {}", status);
    }
    ctx.set_encrypted(encrypted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_without_archive_is_an_error() {
        let mut ctx = RunContext::new(None);
        assert!(encrypt_archive(&mut ctx).is_err());
        ctx.cleanup(false);
    }
}
