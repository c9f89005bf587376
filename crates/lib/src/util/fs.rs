use std::path::Path;

use walkdir::WalkDir;

/// Total size in bytes of regular files under `path`; 0 if it does not exist.
pub fn dir_size(path: &Path) -> u64 {
  if !path.exists() {
    return 0;
  }

  WalkDir::new(path)
    .follow_links(false)
    .into_iter()
    .filter_map(Result::ok)
    .filter(|entry| entry.file_type().is_file())
    .filter_map(|entry| entry.metadata().ok())
    .map(|meta| meta.len())
    .sum()
}
