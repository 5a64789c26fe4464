use indexmap::IndexMap;
use serde::Deserialize;

use crate::theme::ColorValue;
use crate::theme::ThemeExtend;

/// Deserialized shape of a `.loomrc` override file. Every field is optional;
/// an empty file is equivalent to no file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoomRcFile {
  pub content: Vec<String>,
  pub theme: LoomRcTheme,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoomRcTheme {
  pub extend: ThemeExtend,
  pub colors: IndexMap<String, ColorValue>,
}
