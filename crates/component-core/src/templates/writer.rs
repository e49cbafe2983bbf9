//! Writing rendered files to disk

use crate::error::ScaffoldError;
use crate::templates::render::RenderedFile;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Overwrite files that already exist
    pub force: bool,

    /// Report what would be written without touching the filesystem
    pub dry_run: bool,
}

/// Write `files`, creating parent directories as needed
///
/// Every destination is checked before anything is written, so an existing
/// file leaves the tree untouched.
pub async fn write_files(files: &[RenderedFile], options: WriteOptions) -> Result<Vec<PathBuf>> {
    if !options.force {
        for file in files {
            let exists = fs::try_exists(&file.path)
                .await
                .with_context(|| format!("Failed to check file: {}", file.path.display()))?;
            if exists {
                return Err(ScaffoldError::FileExists {
                    path: file.path.clone(),
                }
                .into());
            }
        }
    }

    if options.dry_run {
        return Ok(files.iter().map(|f| f.path.clone()).collect());
    }

    let mut written = Vec::new();
    for file in files {
        if let Some(parent) = file.path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file.path, &file.contents)
            .await
            .with_context(|| format!("Failed to write file: {}", file.path.display()))?;

        written.push(file.path.clone());
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(root: &std::path::Path) -> Vec<RenderedFile> {
        vec![
            RenderedFile {
                path: root.join("src/my-widget/my-widget.component.ts"),
                contents: "export class MyWidgetComponent {}\n".to_string(),
            },
            RenderedFile {
                path: root.join("src/my-widget/my-widget.component.scss"),
                contents: String::new(),
            },
        ]
    }

    #[tokio::test]
    async fn test_writes_files_and_directories() {
        let temp = tempfile::tempdir().unwrap();
        let files = rendered(temp.path());

        let written = write_files(&files, WriteOptions::default()).await.unwrap();

        assert_eq!(written.len(), 2);
        let ts = std::fs::read_to_string(&files[0].path).unwrap();
        assert_eq!(ts, "export class MyWidgetComponent {}\n");
        assert_eq!(std::fs::read_to_string(&files[1].path).unwrap(), "");
    }

    #[tokio::test]
    async fn test_refuses_to_overwrite_without_force() {
        let temp = tempfile::tempdir().unwrap();
        let files = rendered(temp.path());
        std::fs::create_dir_all(files[1].path.parent().unwrap()).unwrap();
        std::fs::write(&files[1].path, "keep me").unwrap();

        let err = write_files(&files, WriteOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::FileExists { .. })
        ));
        assert!(!files[0].path.exists());
        assert_eq!(std::fs::read_to_string(&files[1].path).unwrap(), "keep me");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_existence_check_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let mut files = rendered(temp.path());
        // A regular file where a directory is expected gives ENOTDIR
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        files[1].path = blocker.join("my-widget.component.scss");

        let err = write_files(&files, WriteOptions::default())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to check file"));
        assert!(err.downcast_ref::<ScaffoldError>().is_none());
        assert!(!files[0].path.exists());
    }

    #[tokio::test]
    async fn test_force_overwrites() {
        let temp = tempfile::tempdir().unwrap();
        let files = rendered(temp.path());
        std::fs::create_dir_all(files[1].path.parent().unwrap()).unwrap();
        std::fs::write(&files[1].path, "old").unwrap();

        let options = WriteOptions {
            force: true,
            ..Default::default()
        };
        write_files(&files, options).await.unwrap();

        assert_eq!(std::fs::read_to_string(&files[1].path).unwrap(), "");
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let files = rendered(temp.path());

        let options = WriteOptions {
            dry_run: true,
            ..Default::default()
        };
        let planned = write_files(&files, options).await.unwrap();

        assert_eq!(planned.len(), 2);
        assert!(!temp.path().join("src").exists());
    }
}
