use serde::Deserialize;
use serde::Serialize;

use crate::content::ContentGlobs;
use crate::plugin::PluginNode;
use crate::theme::Theme;

/// The assembled configuration artifact handed to the host tool.
///
/// Immutable once assembled; the host consumes it and the process ends.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoomConfig {
  pub content: ContentGlobs,
  pub theme: Theme,
  pub plugins: Vec<PluginNode>,
}
