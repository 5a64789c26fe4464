use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;

use anyhow::anyhow;
use anyhow::Context;

use crate::PackageManager;

/// `PackageManager` implementation that shells out to npm.
#[derive(Debug)]
pub struct NpmPackageManager {
  binary: String,
}

impl Default for NpmPackageManager {
  fn default() -> Self {
    Self::with_binary("npm")
  }
}

impl NpmPackageManager {
  pub fn with_binary(binary: impl Into<String>) -> Self {
    Self {
      binary: binary.into(),
    }
  }
}

impl PackageManager for NpmPackageManager {
  #[tracing::instrument(level = "debug", skip(self), ret)]
  fn is_available(&self) -> bool {
    Command::new(&self.binary)
      .arg("-v")
      .stdin(Stdio::null())
      .stdout(Stdio::null())
      .stderr(Stdio::null())
      .status()
      .map(|status| status.success())
      .unwrap_or(false)
  }

  #[tracing::instrument(level = "debug", skip(self))]
  fn global_root(&self) -> anyhow::Result<PathBuf> {
    let output = Command::new(&self.binary)
      .arg("root")
      .arg("-g")
      .stdin(Stdio::null())
      .output()
      .with_context(|| format!("Failed to invoke {} root -g", self.binary))?;

    if !output.status.success() {
      return Err(anyhow!(
        "{} root -g exited with status {}",
        self.binary,
        output.status
      ));
    }

    let root = String::from_utf8(output.stdout)
      .with_context(|| format!("{} root -g produced non-utf8 output", self.binary))?;

    Ok(PathBuf::from(root.trim()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // A binary with this name will not be on anyone's PATH.
  const MISSING_BINARY: &str = "loom-test-no-such-package-manager";

  #[test]
  fn missing_binary_is_unavailable() {
    let npm = NpmPackageManager::with_binary(MISSING_BINARY);
    assert!(!npm.is_available());
  }

  #[test]
  fn global_root_propagates_invocation_failure() {
    let npm = NpmPackageManager::with_binary(MISSING_BINARY);
    let err = npm.global_root().unwrap_err();
    assert!(err.to_string().contains("Failed to invoke"));
  }
}
