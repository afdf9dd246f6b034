use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::errors::JdxError;
use crate::jdx_client::JdxApi;
use crate::pipeline::{FileRun, RunOptions};
use crate::report;

const ACCEPTED_EXTENSIONS: &[&str] = &["txt", "doc", "docx"];

/// Counts for one pass over the input path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub fn is_supported_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ACCEPTED_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// A directory yields the regular files directly inside it, sorted by name;
/// a file yields itself.
pub fn collect_files(path: &Path) -> Result<Vec<PathBuf>, JdxError> {
    if path.is_dir() {
        let files = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1) // top level only
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {e}", path.display());
                    None
                }
            })
            .filter(|e| e.path().is_file())
            .map(|e| e.into_path())
            .collect();
        Ok(files)
    } else if path.is_file() {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(JdxError::InvalidPath(path.to_path_buf()))
    }
}

pub async fn run_pass<A: JdxApi + ?Sized>(
    api: &A,
    path: &Path,
    options: &RunOptions,
) -> Result<PassReport, JdxError> {
    let files = collect_files(path)?;
    let mut pass = PassReport::default();

    for file in &files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        println!("--File: {name}");

        if !is_supported_file(file) {
            println!("Unsupported file type for \"{name}\", skipping.");
            pass.skipped += 1;
        } else {
            let mut file_run = FileRun::new(api, file, options);
            match file_run.go().await {
                Ok(summary) => {
                    info!(
                        "{name}: pipeline {:?}, framework {:?}, {} user actions, generated={}, failed steps {:?}",
                        summary.pipeline_id,
                        summary.framework,
                        summary.actions_submitted,
                        summary.generated,
                        summary.failed_steps
                    );
                    pass.processed += 1;
                }
                Err(e) => {
                    println!("Stopped processing \"{name}\": {e}");
                    error!("{name}: {e}");
                    pass.failed += 1;
                }
            }
        }

        report::print_empty_lines(4);
    }

    Ok(pass)
}

/// Runs one pass, or passes forever when `loop_forever` is set. The input
/// path is re-scanned on every pass.
pub async fn run<A: JdxApi + ?Sized>(
    api: &A,
    path: &Path,
    options: &RunOptions,
    loop_forever: bool,
    pause: Duration,
) -> Result<(), JdxError> {
    let mut passes: u64 = 0;
    loop {
        let pass = run_pass(api, path, options).await?;
        passes += 1;
        info!(
            "Pass {passes} done: {} processed, {} skipped, {} failed",
            pass.processed, pass.skipped, pass.failed
        );

        if !loop_forever {
            return Ok(());
        }
        if pause.is_zero() {
            // A pass over an empty directory never awaits anything pending.
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(pause).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::tests::FakeJdx;
    use std::fs;

    #[test]
    fn test_is_supported_file() {
        assert!(is_supported_file(Path::new("jd.txt")));
        assert!(is_supported_file(Path::new("jd.doc")));
        assert!(is_supported_file(Path::new("jd.docx")));
        assert!(is_supported_file(Path::new("JD.DOCX")));
        assert!(!is_supported_file(Path::new("jd.pdf")));
        assert!(!is_supported_file(Path::new("README")));
    }

    #[test]
    fn test_collect_files_directory_is_flat_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.docx"), "a").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.txt"), "c").unwrap();

        let files = collect_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.docx", "b.txt"]);
    }

    #[test]
    fn test_collect_files_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("only.txt");
        fs::write(&file, "x").unwrap();
        assert_eq!(collect_files(&file).unwrap(), vec![file]);
    }

    #[test]
    fn test_collect_files_missing_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(
            collect_files(&missing),
            Err(JdxError::InvalidPath(p)) if p == missing
        ));
    }

    #[tokio::test]
    async fn test_run_pass_skips_unsupported_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("dev.txt"), "Wordpress developer").unwrap();
        fs::write(dir.path().join("notes.pdf"), "%PDF").unwrap();

        let api = FakeJdx::happy();
        let pass = run_pass(&api, dir.path(), &RunOptions::default())
            .await
            .unwrap();

        assert_eq!(
            pass,
            PassReport {
                processed: 1,
                skipped: 1,
                failed: 0
            }
        );
        assert_eq!(api.calls().iter().filter(|c| **c == "upload").count(), 1);
    }

    #[tokio::test]
    async fn test_run_pass_counts_aborted_files_and_moves_on() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();

        let api = FakeJdx {
            fail_upload: true,
            ..FakeJdx::happy()
        };
        let pass = run_pass(&api, dir.path(), &RunOptions::default())
            .await
            .unwrap();

        assert_eq!(pass.failed, 2);
        assert_eq!(api.calls().iter().filter(|c| **c == "upload").count(), 2);
    }

    #[tokio::test]
    async fn test_run_once_returns_after_single_pass() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let api = FakeJdx::happy();
        run(&api, dir.path(), &RunOptions::default(), false, Duration::ZERO)
            .await
            .unwrap();
        assert_eq!(api.calls().iter().filter(|c| **c == "generate").count(), 1);
    }

    #[tokio::test]
    async fn test_run_invalid_path_errors() {
        let api = FakeJdx::happy();
        let err = run(
            &api,
            Path::new("/no/such/jdx/input"),
            &RunOptions::default(),
            true,
            Duration::ZERO,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, JdxError::InvalidPath(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_loop_over_empty_directory_yields_to_other_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let api = FakeJdx::happy();
        let options = RunOptions::default();

        let stopped = tokio::time::timeout(Duration::from_secs(3), async {
            tokio::select! {
                result = run(&api, dir.path(), &options, true, Duration::ZERO) => {
                    panic!("loop mode returned: {result:?}")
                }
                _ = tokio::time::sleep(Duration::from_millis(50)) => {}
            }
        })
        .await;

        assert!(stopped.is_ok());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_loop_rescans_directory_every_pass() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        let late_file = dir.path().join("b.txt");

        let api = FakeJdx::happy();
        let options = RunOptions::default();

        let add_file_after_first_pass = async {
            loop {
                let uploaded = api.uploaded();
                if uploaded.iter().any(|p| p.ends_with("b.txt")) {
                    break;
                }
                if !uploaded.is_empty() && !late_file.exists() {
                    fs::write(&late_file, "b").unwrap();
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        };

        let finished = tokio::time::timeout(Duration::from_secs(5), async {
            tokio::select! {
                result = run(&api, dir.path(), &options, true, Duration::ZERO) => {
                    panic!("loop mode returned: {result:?}")
                }
                _ = add_file_after_first_pass => {}
            }
        })
        .await;

        assert!(finished.is_ok());
        let uploaded = api.uploaded();
        let first_file_passes = uploaded.iter().filter(|p| p.ends_with("a.txt")).count();
        assert!(first_file_passes >= 2);
    }
}
