use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    pub check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Write `content` to `path` unless it is already there.
///
/// With `check`, nothing is written and a stale or missing file is an error.
pub fn apply_generated_file(
    path: &Path,
    content: &str,
    opts: WriteOptions,
) -> anyhow::Result<WriteOutcome> {
    let existing = std::fs::read_to_string(path).ok();
    let changed = existing.as_deref() != Some(content);

    if opts.check {
        if changed {
            anyhow::bail!("generated file is out of date: {}", path.display());
        }
        return Ok(WriteOutcome::Unchanged);
    }

    if !changed {
        return Ok(WriteOutcome::Unchanged);
    }

    write_atomic(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(WriteOutcome::Written)
}

fn write_atomic(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("failed to create directory {}: {e}", parent.display()))?;
    }

    let tmp = tmp_path(path);
    std::fs::write(&tmp, content)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", tmp.display()))?;
    std::fs::rename(&tmp, path).map_err(|e| {
        anyhow::anyhow!(
            "failed to rename {} -> {}: {e}",
            tmp.display(),
            path.display()
        )
    })?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => path.with_extension(format!("{ext}.tmp")),
        None => path.with_extension("tmp"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_into_new_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src/constants/model.constant.ts");

        let outcome = apply_generated_file(&path, "enum A {}\n", WriteOptions::default()).unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "enum A {}\n");
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn identical_content_is_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.constant.ts");
        std::fs::write(&path, "enum A {}\n").unwrap();

        let outcome = apply_generated_file(&path, "enum A {}\n", WriteOptions::default()).unwrap();
        assert_eq!(outcome, WriteOutcome::Unchanged);
    }

    #[test]
    fn check_fails_on_stale_file_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.constant.ts");
        std::fs::write(&path, "old\n").unwrap();

        let err = apply_generated_file(&path, "new\n", WriteOptions { check: true }).unwrap_err();
        assert!(err.to_string().contains("out of date"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old\n");
    }

    #[test]
    fn check_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.constant.ts");

        assert!(apply_generated_file(&path, "new\n", WriteOptions { check: true }).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn tmp_path_keeps_extension() {
        assert_eq!(
            tmp_path(Path::new("out/model.constant.ts")),
            PathBuf::from("out/model.constant.ts.tmp")
        );
        assert_eq!(tmp_path(Path::new("out/enums")), PathBuf::from("out/enums.tmp"));
    }
}
