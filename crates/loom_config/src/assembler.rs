use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use loom_filesystem::FileSystemRef;
use loom_package_manager::PackageManagerRef;

use crate::loom_config::LoomConfig;
use crate::loom_rc_loader::LoomRcLoader;
use crate::plugin::PluginNode;
use crate::plugin::PluginRegistry;
use crate::plugin::DEBUG_SCREENS_PACKAGE;

/// The environment mode the host tool is running in, taken from the
/// `LOOM_ENV` variable by the binary and passed in as data.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Mode {
  /// Explicit "development", or the variable was unset.
  #[default]
  Development,
  /// Any other explicit value, e.g. "production".
  Other(String),
}

impl Mode {
  pub fn parse(value: Option<&str>) -> Mode {
    match value {
      // An unset variable behaves as development mode
      None => Mode::Development,
      Some("development") => Mode::Development,
      Some(other) => Mode::Other(String::from(other)),
    }
  }

  pub fn is_development(&self) -> bool {
    matches!(self, Mode::Development)
  }
}

/// Human-readable reason the debug screens plugin was not activated.
///
/// These are expected conditions, not errors; the binary prints them to
/// stdout.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Hint {
  ProductionMode,
  PackageManagerUnavailable,
  PluginNotInstalled { package_name: String },
}

impl fmt::Display for Hint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Hint::ProductionMode => {
        write!(f, "Hint: in production mode, the debug screens plugin is not enabled")
      }
      Hint::PackageManagerUnavailable => {
        write!(f, "Hint: npm is not available, please install npm to use the debug screens plugin")
      }
      Hint::PluginNotInstalled { package_name } => {
        write!(
          f,
          "Hint: {package_name} is not installed, run `npm install -g {package_name}` to use the debug screens plugin"
        )
      }
    }
  }
}

#[derive(Debug, Default)]
pub struct AssembleOptions {
  pub mode: Mode,
  /// Directory the `.loomrc` search is rooted at [default: the current
  /// working directory]
  pub project_root: Option<PathBuf>,
}

#[derive(Debug)]
pub struct AssembledConfig {
  pub config: LoomConfig,
  pub hints: Vec<Hint>,
}

/// Builds the configuration artifact and decides, once, whether the debug
/// screens plugin is registered.
///
/// Probing failures never fail the assembly; they degrade to a `Hint` and
/// an empty plugin list.
pub struct ConfigAssembler {
  fs: FileSystemRef,
  package_manager: PackageManagerRef,
  registry: PluginRegistry,
}

impl ConfigAssembler {
  pub fn new(fs: FileSystemRef, package_manager: PackageManagerRef) -> Self {
    ConfigAssembler {
      fs,
      package_manager,
      registry: PluginRegistry::default(),
    }
  }

  pub fn assemble(&self, options: AssembleOptions) -> anyhow::Result<AssembledConfig> {
    let project_root = match options.project_root {
      Some(root) => root,
      None => self
        .fs
        .cwd()
        .context("Failed to resolve the current working directory")?,
    };

    let (mut theme, content) = LoomRcLoader::new(Arc::clone(&self.fs)).load(&project_root)?;

    let (plugins, hint) = self.select_plugins(&options.mode);

    for node in &plugins {
      if let Some(plugin) = self.registry.get(&node.package_name) {
        plugin.apply(&mut theme)?;
      }
    }

    Ok(AssembledConfig {
      config: LoomConfig {
        content,
        theme,
        plugins,
      },
      hints: hint.into_iter().collect(),
    })
  }

  /// Evaluates the activation rule and returns the immutable plugin list
  /// together with the hint for the non-activation outcomes.
  #[tracing::instrument(level = "debug", skip(self))]
  fn select_plugins(&self, mode: &Mode) -> (Vec<PluginNode>, Option<Hint>) {
    if !self.package_manager.is_available() {
      return (Vec::new(), Some(Hint::PackageManagerUnavailable));
    }

    if !mode.is_development() {
      return (Vec::new(), Some(Hint::ProductionMode));
    }

    let global_root = match self.package_manager.global_root() {
      Ok(root) => root,
      Err(error) => {
        tracing::warn!("Failed to resolve the global module root: {:?}", error);
        return (Vec::new(), Some(Hint::PackageManagerUnavailable));
      }
    };

    let module_path = global_root.join(DEBUG_SCREENS_PACKAGE);
    if !self.fs.is_dir(&module_path) || !self.registry.contains(DEBUG_SCREENS_PACKAGE) {
      return (
        Vec::new(),
        Some(Hint::PluginNotInstalled {
          package_name: String::from(DEBUG_SCREENS_PACKAGE),
        }),
      );
    }

    (
      vec![PluginNode {
        package_name: String::from(DEBUG_SCREENS_PACKAGE),
        resolve_from: Arc::new(module_path),
      }],
      None,
    )
  }
}
