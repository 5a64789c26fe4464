use std::path::Path;
use std::path::PathBuf;

use crate::FileSystem;

/// Walks up from `from` looking for the first directory that contains one of
/// `file_names`, stopping once `root` has been searched.
pub fn find_ancestor_file(
  fs: &dyn FileSystem,
  file_names: &[&str],
  from: &Path,
  root: &Path,
) -> Option<PathBuf> {
  for dir in from.ancestors() {
    for file_name in file_names {
      let candidate = dir.join(file_name);
      if fs.is_file(&candidate) {
        return Some(candidate);
      }
    }

    if dir == root {
      break;
    }
  }

  None
}
