use std::path::Path;

use glob_match::glob_match;
use serde::Deserialize;
use serde::Serialize;

/// Glob patterns describing which source files the host tool scans for
/// class names.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContentGlobs {
  inner: Vec<String>,
}

impl Default for ContentGlobs {
  fn default() -> Self {
    ContentGlobs::base()
  }
}

impl ContentGlobs {
  pub fn new(patterns: Vec<String>) -> Self {
    Self { inner: patterns }
  }

  /// The built-in patterns: all HTML under `html/` and all CSS under
  /// `html/style/`, including nested folders.
  pub fn base() -> Self {
    ContentGlobs::new(vec![
      String::from("./html/**/*.html"),
      String::from("./html/style/**/*.css"),
    ])
  }

  pub fn patterns(&self) -> &[String] {
    &self.inner
  }

  /// Append extra patterns after the built-ins.
  pub fn extend(&mut self, patterns: impl IntoIterator<Item = String>) {
    self.inner.extend(patterns);
  }

  /// Whether any pattern matches the given project-relative path.
  pub fn matches(&self, path: &Path) -> bool {
    let path = path.to_string_lossy();
    let path = path.strip_prefix("./").unwrap_or(&path);

    self
      .inner
      .iter()
      .any(|pattern| glob_match(pattern.strip_prefix("./").unwrap_or(pattern), path))
  }
}
