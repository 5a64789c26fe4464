use std::path::PathBuf;
use std::sync::Arc;

use mockall::automock;

/// PackageManager abstraction instance
pub type PackageManagerRef = Arc<dyn PackageManager + Send + Sync>;

/// Probes the host's package manager.
///
/// Both operations block on a synchronous child-process invocation with no
/// timeout or retry.
#[automock]
pub trait PackageManager {
  /// Whether the package manager binary can be invoked at all. Any failure,
  /// including a missing binary or a non-zero exit, reads as unavailable.
  fn is_available(&self) -> bool;

  /// The package manager's global module installation root, as reported by
  /// the tool itself. Propagates invocation failures, so callers are
  /// expected to confirm availability first.
  fn global_root(&self) -> anyhow::Result<PathBuf>;
}
