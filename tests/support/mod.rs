use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// Path of the compiled `tech-lookup` binary for this test run.
pub fn lookup_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tech-lookup"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Write raw catalog JSON to a temp file the loader can be pointed at.
///
/// Temp files live outside the repo, so schema resolution falls back to the
/// canonical copy under the crate's `schema/` directory.
pub fn write_catalog(json: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog file")?;
    file.write_all(json.as_bytes())
        .context("failed to write catalog fixture")?;
    Ok(file)
}
