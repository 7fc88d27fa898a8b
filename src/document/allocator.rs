use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ParsedBranch;

/// Pick an output path under `docs_dir` that does not exist yet.
///
/// Tries `ISSUE-<n>-<safe-title>.md` first, then `-2.md`, `-3.md`, ... and
/// returns the first free one. Any directory entry counts as taken, including
/// a dangling symlink. The existence check and the later write are
/// not atomic; two concurrent runs can pick the same path.
pub fn allocate_path(docs_dir: &Path, branch: &ParsedBranch) -> PathBuf {
    let base = branch.file_stem();

    let candidate = docs_dir.join(format!("{}.md", base));
    if is_free(&candidate) {
        return candidate;
    }

    let mut suffix: u64 = 2;
    loop {
        let candidate = docs_dir.join(format!("{}-{}.md", base, suffix));
        if is_free(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// No directory entry at `path`; symlinks are not followed
fn is_free(path: &Path) -> bool {
    fs::symlink_metadata(path).is_err()
}
