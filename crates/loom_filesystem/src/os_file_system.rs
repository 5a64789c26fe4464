use std::path::Path;
use std::path::PathBuf;

use crate::FileSystem;

#[derive(Default, Debug)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn cwd(&self) -> std::io::Result<PathBuf> {
    std::env::current_dir()
  }

  fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
    std::fs::read_to_string(path)
  }

  fn is_file(&self, path: &Path) -> bool {
    path.is_file()
  }

  fn is_dir(&self, path: &Path) -> bool {
    path.is_dir()
  }
}
