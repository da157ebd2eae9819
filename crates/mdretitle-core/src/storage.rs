//! Document rewrites.
//!
//! New content goes to `<path>.part` first and is renamed over the
//! original, so a failed write never leaves a half-written document.
//! The temp file takes over the original's permission bits before the rename.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `intro.md` → `intro.md.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Replace the contents of `path` with `content`, keeping its permissions.
pub fn rewrite(path: &Path, content: &str) -> io::Result<()> {
    let permissions = fs::metadata(path)?.permissions();
    let tmp = temp_path(path);
    let result = write_synced(&tmp, content)
        .and_then(|()| fs::set_permissions(&tmp, permissions))
        .and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_synced(path: &Path, content: &str) -> io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(content.as_bytes())?;
    f.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("intro.md"));
        assert_eq!(p.to_string_lossy(), "intro.md.part");
        let p2 = temp_path(Path::new("/docs/Build workflows.md"));
        assert_eq!(p2.to_string_lossy(), "/docs/Build workflows.md.part");
    }

    #[test]
    fn rewrite_replaces_content_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "---\ntitle: x\n---\nold body that is longer").unwrap();

        rewrite(&path, "new body").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new body");
        assert!(!temp_path(&path).exists());
    }

    #[cfg(unix)]
    #[test]
    fn rewrite_keeps_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Private.md");
        fs::write(&path, "---\ntitle: Private\n---\nsecret").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

        rewrite(&path, "secret").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
        assert_eq!(fs::read_to_string(&path).unwrap(), "secret");
    }

    #[test]
    fn rewrite_blocked_by_directory_at_temp_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "original").unwrap();
        fs::create_dir(temp_path(&path)).unwrap();

        assert!(rewrite(&path, "new").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn rewrite_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone").join("doc.md");
        assert!(rewrite(&path, "body").is_err());
        assert!(!temp_path(&path).exists());
    }
}
