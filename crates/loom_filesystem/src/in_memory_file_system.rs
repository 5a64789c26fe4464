use std::collections::HashMap;
use std::io;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use parking_lot::RwLock;

use crate::FileSystem;

#[cfg(not(target_os = "windows"))]
fn root_dir() -> PathBuf {
  PathBuf::from("/")
}

#[cfg(target_os = "windows")]
fn root_dir() -> PathBuf {
  PathBuf::from("C:/")
}

/// In memory implementation of a file-system entry
#[derive(Debug)]
enum InMemoryFileSystemEntry {
  File { contents: String },
  Directory,
}

/// In memory implementation of the `FileSystem` trait, for testing purposes.
#[derive(Debug)]
pub struct InMemoryFileSystem {
  files: RwLock<HashMap<PathBuf, InMemoryFileSystemEntry>>,
  current_working_directory: RwLock<PathBuf>,
}

impl Default for InMemoryFileSystem {
  fn default() -> Self {
    Self {
      files: Default::default(),
      current_working_directory: RwLock::new(root_dir()),
    }
  }
}

impl InMemoryFileSystem {
  /// Change the current working directory. Used for resolving relative paths.
  pub fn set_current_working_directory(&self, cwd: &Path) {
    let cwd = self.resolve(cwd);
    let mut state = self.current_working_directory.write();
    *state = cwd;
  }

  /// Write a file at the given path, creating directory entries for all of
  /// its ancestors.
  pub fn write_file(&self, path: &Path, contents: String) {
    let path = self.resolve(path);
    let mut files = self.files.write();

    files.insert(path.clone(), InMemoryFileSystemEntry::File { contents });

    let mut dir = path.parent();
    while let Some(path) = dir {
      files.insert(path.to_path_buf(), InMemoryFileSystemEntry::Directory);
      dir = path.parent();
    }
  }

  /// Create a directory entry without any contents.
  pub fn create_directory(&self, path: &Path) {
    let path = self.resolve(path);
    let mut files = self.files.write();

    let mut dir = Some(path.as_path());
    while let Some(path) = dir {
      files.insert(path.to_path_buf(), InMemoryFileSystemEntry::Directory);
      dir = path.parent();
    }
  }

  /// Resolve a path against the current working directory and strip `.` and
  /// `..` components. Symlinks do not exist here, so this is all that
  /// canonicalization has to do.
  fn resolve(&self, path: &Path) -> PathBuf {
    let path = if path.is_absolute() {
      path.to_path_buf()
    } else {
      self.current_working_directory.read().join(path)
    };

    let mut result = PathBuf::new();
    for component in path.components() {
      match component {
        Component::CurDir => {}
        Component::ParentDir => {
          result.pop();
        }
        component => result.push(component),
      }
    }

    result
  }
}

impl FileSystem for InMemoryFileSystem {
  fn cwd(&self) -> io::Result<PathBuf> {
    Ok(self.current_working_directory.read().clone())
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    let path = self.resolve(path);
    let files = self.files.read();
    match files.get(&path) {
      None => Err(io::Error::new(io::ErrorKind::NotFound, "File not found")),
      Some(InMemoryFileSystemEntry::File { contents }) => Ok(contents.clone()),
      Some(InMemoryFileSystemEntry::Directory) => Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        "Path is a directory",
      )),
    }
  }

  fn is_file(&self, path: &Path) -> bool {
    let path = self.resolve(path);
    let files = self.files.read();
    matches!(files.get(&path), Some(InMemoryFileSystemEntry::File { .. }))
  }

  fn is_dir(&self, path: &Path) -> bool {
    let path = self.resolve(path);
    let files = self.files.read();
    matches!(files.get(&path), Some(InMemoryFileSystemEntry::Directory))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_read_missing_file_errors() {
    let fs = InMemoryFileSystem::default();
    let result = fs.read_to_string(&root_dir().join("foo.txt"));
    assert!(result.is_err());
  }

  #[test]
  fn test_write_then_read() {
    let fs = InMemoryFileSystem::default();
    let path = root_dir().join("dir").join("file.txt");
    fs.write_file(&path, String::from("contents"));
    assert_eq!(fs.read_to_string(&path).unwrap(), "contents");
    assert!(fs.is_file(&path));
    assert!(fs.is_dir(&root_dir().join("dir")));
  }

  #[test]
  fn test_resolve_relative_dots() {
    let fs = InMemoryFileSystem::default();
    fs.write_file(&root_dir().join("foo").join("bar.txt"), String::new());
    assert!(fs.is_file(&root_dir().join("foo/./baz/../bar.txt")));
  }

  #[test]
  fn test_relative_paths_resolve_against_cwd() {
    let fs = InMemoryFileSystem::default();
    let cwd = root_dir().join("project");
    fs.set_current_working_directory(&cwd);
    fs.write_file(Path::new("nested.txt"), String::from("x"));
    assert!(fs.is_file(&cwd.join("nested.txt")));
  }

  #[test]
  fn test_create_directory() {
    let fs = InMemoryFileSystem::default();
    let path = root_dir().join("a").join("b");
    fs.create_directory(&path);
    assert!(fs.is_dir(&path));
    assert!(!fs.is_file(&path));
  }
}
