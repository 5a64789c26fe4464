use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use loom_filesystem::search::find_ancestor_file;
use loom_filesystem::FileSystemRef;

use crate::content::ContentGlobs;
use crate::loom_rc::LoomRcFile;
use crate::theme::ColorValue;
use crate::theme::Theme;
use crate::theme::ThemeExtend;

pub const LOOM_RC_FILENAME: &str = ".loomrc";

/// Loads the built-in tokens and merges the nearest `.loomrc` override file
/// over them, if one exists.
pub struct LoomRcLoader {
  fs: FileSystemRef,
}

impl LoomRcLoader {
  pub fn new(fs: FileSystemRef) -> Self {
    LoomRcLoader { fs }
  }

  /// Resolves the theme and content globs for `project_root`.
  ///
  /// The nearest `.loomrc` ancestor of the current working directory is
  /// used, without searching above the project root. A missing file yields
  /// the built-ins unchanged; an unreadable or unparseable one is an error.
  pub fn load(&self, project_root: &Path) -> anyhow::Result<(Theme, ContentGlobs)> {
    let mut theme = Theme::base();
    let mut content = ContentGlobs::base();

    let from = self
      .fs
      .cwd()
      .unwrap_or_else(|_| project_root.to_path_buf());
    let from = if from.starts_with(project_root) {
      from
    } else {
      project_root.to_path_buf()
    };

    let Some(path) = find_ancestor_file(&*self.fs, &[LOOM_RC_FILENAME], &from, project_root)
    else {
      tracing::debug!("No {} found, using built-in tokens", LOOM_RC_FILENAME);
      return Ok((theme, content));
    };

    let raw = self
      .fs
      .read_to_string(&path)
      .with_context(|| format!("Failed to read {}", path.display()))?;

    let rc: LoomRcFile = serde_json5::from_str(&raw)
      .with_context(|| format!("Failed to parse {}", path.display()))?;

    merge_theme(&mut theme, rc.theme.extend, rc.theme.colors);
    content.extend(rc.content);

    Ok((theme, content))
  }
}

/// Override entries win per key; palette groups are replaced wholesale per
/// top-level key.
fn merge_theme(theme: &mut Theme, extend: ThemeExtend, colors: IndexMap<String, ColorValue>) {
  theme.extend.background_color.extend(extend.background_color);
  theme.extend.background_image.extend(extend.background_image);
  theme.extend.width.extend(extend.width);
  theme.extend.height.extend(extend.height);
  theme
    .extend
    .transition_property
    .extend(extend.transition_property);
  theme.extend.font_family.extend(extend.font_family);
  theme.extend.spacing.extend(extend.spacing);
  theme.extend.min_height.extend(extend.min_height);
  theme.colors.extend(colors);
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use loom_filesystem::in_memory_file_system::InMemoryFileSystem;
  use loom_filesystem::FileSystem;

  use super::*;
  use crate::theme::ColorValue;

  #[test]
  fn returns_builtins_when_rc_is_missing() {
    let fs = Arc::new(InMemoryFileSystem::default());
    let project_root = fs.cwd().unwrap();

    let (theme, content) = LoomRcLoader::new(fs).load(&project_root).unwrap();

    assert_eq!(theme, Theme::base());
    assert_eq!(content, ContentGlobs::base());
  }

  #[test]
  fn overrides_win_per_token() {
    let fs = Arc::new(InMemoryFileSystem::default());
    let project_root = fs.cwd().unwrap();

    // json5, comments and trailing commas included
    fs.write_file(
      &project_root.join(".loomrc"),
      String::from(
        r#"{
          // widen the modal scrim
          theme: {
            extend: {
              spacing: { "90%": "90%" },
              backgroundColor: { "modal-black-50": "rgba(0, 0, 0, 0.7)" },
            },
            colors: {
              brand: { accent: "rgba(10, 20, 30, 1)" },
            },
          },
          content: ["./docs/**/*.html"],
        }"#,
      ),
    );

    let (theme, content) = LoomRcLoader::new(fs).load(&project_root).unwrap();

    assert_eq!(theme.extend.spacing.get("90%").map(String::as_str), Some("90%"));
    assert_eq!(
      theme.extend.background_color.get("modal-black-50").map(String::as_str),
      Some("rgba(0, 0, 0, 0.7)")
    );
    // untouched tokens survive
    assert_eq!(theme.extend.min_height.get("128").map(String::as_str), Some("32rem"));
    assert!(matches!(theme.colors.get("brand"), Some(ColorValue::Group(_))));
    assert_eq!(content.patterns().last().map(String::as_str), Some("./docs/**/*.html"));
    assert!(content.patterns().starts_with(&[String::from("./html/**/*.html")]));
  }

  #[test]
  fn finds_rc_above_nested_working_directory() {
    let fs = Arc::new(InMemoryFileSystem::default());
    let project_root = fs.cwd().unwrap().join("project");

    fs.write_file(
      &project_root.join(".loomrc"),
      String::from(r#"{ theme: { extend: { spacing: { "90%": "90%" } } } }"#),
    );
    fs.set_current_working_directory(&project_root.join("packages").join("site"));

    let (theme, _) = LoomRcLoader::new(fs).load(&project_root).unwrap();

    assert_eq!(theme.extend.spacing.get("90%").map(String::as_str), Some("90%"));
  }

  #[test]
  fn invalid_rc_is_an_error_with_file_context() {
    let fs = Arc::new(InMemoryFileSystem::default());
    let project_root = fs.cwd().unwrap();
    let rc_path = project_root.join(".loomrc");

    fs.write_file(&rc_path, String::from("{ theme: "));

    let err = LoomRcLoader::new(fs).load(&project_root).unwrap_err();

    assert!(err
      .to_string()
      .contains(&format!("Failed to parse {}", rc_path.display())));
  }
}
