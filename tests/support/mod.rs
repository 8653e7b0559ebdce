use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn status_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_factory-status"))
}

pub fn check_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_factory-check"))
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

/// Scratch project root laid out like a real checkout (`src/factories/<id>`).
pub struct FactoryFixture {
    pub root: TempDir,
}

impl FactoryFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            root: TempDir::new().context("failed to allocate fixture root")?,
        })
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn base_dir(&self) -> PathBuf {
        self.path().join("src").join("factories")
    }

    pub fn output_path(&self) -> PathBuf {
        self.path().join("factories_status.json")
    }

    /// Create the category directory and the given (empty) files inside it.
    pub fn category(&self, id: &str, files: &[&str]) -> Result<PathBuf> {
        let dir = self.base_dir().join(id);
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        for name in files {
            fs::write(dir.join(name), "")
                .with_context(|| format!("failed to write {name} under {}", dir.display()))?;
        }
        Ok(dir)
    }
}
