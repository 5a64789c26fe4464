use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::theme::DebugScreens;
use crate::theme::Theme;

/// Package name of the built-in breakpoint-overlay plugin.
pub const DEBUG_SCREENS_PACKAGE: &str = "loom-plugin-debug-screens";

/// A plugin reference recorded in the assembled configuration.
#[derive(Clone, Debug, Deserialize, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginNode {
  pub package_name: String,
  pub resolve_from: Arc<PathBuf>,
}

/// Capability interface for theme plugins.
///
/// Candidates are statically known and selected by package name; nothing is
/// ever loaded from a runtime-resolved path.
pub trait ThemePlugin: Debug {
  fn package_name(&self) -> &str;
  fn apply(&self, theme: &mut Theme) -> anyhow::Result<()>;
}

/// Lookup of the statically known plugin candidates, keyed by package name.
#[derive(Debug)]
pub struct PluginRegistry {
  candidates: Vec<Box<dyn ThemePlugin + Send + Sync>>,
}

impl Default for PluginRegistry {
  fn default() -> Self {
    Self {
      candidates: vec![Box::new(DebugScreensPlugin)],
    }
  }
}

impl PluginRegistry {
  pub fn get(&self, package_name: &str) -> Option<&(dyn ThemePlugin + Send + Sync)> {
    self
      .candidates
      .iter()
      .find(|candidate| candidate.package_name() == package_name)
      .map(|candidate| candidate.as_ref())
  }

  pub fn contains(&self, package_name: &str) -> bool {
    self.get(package_name).is_some()
  }
}

/// Overlays the active responsive breakpoint during development.
#[derive(Debug, Default)]
pub struct DebugScreensPlugin;

impl ThemePlugin for DebugScreensPlugin {
  fn package_name(&self) -> &str {
    DEBUG_SCREENS_PACKAGE
  }

  fn apply(&self, theme: &mut Theme) -> anyhow::Result<()> {
    theme.debug_screens = Some(DebugScreens::default());
    Ok(())
  }
}
