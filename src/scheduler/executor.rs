//! Backup Executor Module
//!
//! Carries out a single backup: resolves the timestamped destination path
//! and copies the source file or directory tree there.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use walkdir::WalkDir;

use crate::scheduler::{ActivityRecord, BackupTask};

// == Run Backup ==
/// Executes one backup attempt for a due task.
///
/// The destination is `<destination>/<stamp>_<basename>` with the stamp
/// taken from the tick timestamp at second precision, so runs at distinct
/// seconds never collide. Whether the source exists, and whether it is a
/// file or a directory, is decided here and nowhere earlier.
///
/// Every error - missing source, permission denied, disk full - is folded
/// into a Failure record; nothing propagates, so one broken task cannot
/// disturb the rest of the tick. The missing-source check runs before any
/// directory is created, leaving the destination untouched on that path.
pub fn run_backup(task: &BackupTask, now: NaiveDateTime) -> ActivityRecord {
    match copy_source(task, now) {
        Ok(dest) => ActivityRecord::success(now, &task.source, &dest),
        Err(e) => ActivityRecord::failure(now, &task.source, &task.destination, e.to_string()),
    }
}

/// Resolves the timestamped destination and performs the copy, returning
/// the resolved path.
fn copy_source(task: &BackupTask, now: NaiveDateTime) -> io::Result<PathBuf> {
    let stamp = now.format("%Y%m%d_%H%M%S");
    let name = task
        .source
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "source not found"))?;
    let dest = task
        .destination
        .join(format!("{}_{}", stamp, name.to_string_lossy()));

    if task.source.is_file() {
        fs::create_dir_all(&task.destination)?;
        fs::copy(&task.source, &dest)?;
    } else if task.source.is_dir() {
        copy_tree(&task.source, &dest)?;
    } else {
        return Err(io::Error::new(io::ErrorKind::NotFound, "source not found"));
    }

    Ok(dest)
}

// == Copy Tree ==
/// Recursively mirrors `src` into `dest`.
///
/// Directories are recreated, files are byte-copied. Symlinked files are
/// copied through to their targets; a broken link surfaces as an error.
fn copy_tree(src: &Path, dest: &Path) -> io::Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(io::Error::from)?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let target = dest.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Frequency, Outcome};
    use chrono::NaiveDate;

    fn tick_at_101500() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    }

    fn task(source: &Path, destination: &Path) -> BackupTask {
        BackupTask::new(source, destination, Frequency::Minute)
    }

    #[test]
    fn test_file_backup_copies_bytes_under_timestamped_name() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.txt");
        let destination = dir.path().join("backups");
        fs::write(&source, b"important bytes").unwrap();

        let record = run_backup(&task(&source, &destination), tick_at_101500());

        assert!(record.is_success());
        let expected = destination.join("20240305_101500_a.txt");
        assert_eq!(record.destination, expected.display().to_string());
        assert_eq!(fs::read(&expected).unwrap(), b"important bytes");
    }

    #[test]
    fn test_file_backup_creates_destination_tree() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.txt");
        let destination = dir.path().join("deep/nested/backups");
        fs::write(&source, b"x").unwrap();

        let record = run_backup(&task(&source, &destination), tick_at_101500());

        assert!(record.is_success());
        assert!(destination.join("20240305_101500_a.txt").is_file());
    }

    #[test]
    fn test_directory_backup_mirrors_tree() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("project");
        let destination = dir.path().join("backups");
        fs::create_dir_all(source.join("sub/inner")).unwrap();
        fs::write(source.join("top.txt"), b"top").unwrap();
        fs::write(source.join("sub/mid.txt"), b"mid").unwrap();
        fs::write(source.join("sub/inner/leaf.txt"), b"leaf").unwrap();

        let record = run_backup(&task(&source, &destination), tick_at_101500());

        assert!(record.is_success());
        let copy = destination.join("20240305_101500_project");
        assert_eq!(fs::read(copy.join("top.txt")).unwrap(), b"top");
        assert_eq!(fs::read(copy.join("sub/mid.txt")).unwrap(), b"mid");
        assert_eq!(fs::read(copy.join("sub/inner/leaf.txt")).unwrap(), b"leaf");
    }

    #[test]
    fn test_directory_backup_includes_empty_directories() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("project");
        let destination = dir.path().join("backups");
        fs::create_dir_all(source.join("empty")).unwrap();

        let record = run_backup(&task(&source, &destination), tick_at_101500());

        assert!(record.is_success());
        assert!(destination.join("20240305_101500_project/empty").is_dir());
    }

    #[test]
    fn test_missing_source_fails_without_touching_destination() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("absent.txt");
        let destination = dir.path().join("backups");
        fs::create_dir_all(&destination).unwrap();

        let record = run_backup(&task(&source, &destination), tick_at_101500());

        assert_eq!(
            record.outcome,
            Outcome::Failure("source not found".to_string())
        );
        assert_eq!(record.destination, destination.display().to_string());
        // No partial artifact
        assert_eq!(fs::read_dir(&destination).unwrap().count(), 0);
    }

    #[test]
    fn test_distinct_seconds_yield_distinct_names() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.txt");
        let destination = dir.path().join("backups");
        fs::write(&source, b"x").unwrap();

        let later = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(10, 15, 1)
            .unwrap();
        let first = run_backup(&task(&source, &destination), tick_at_101500());
        let second = run_backup(&task(&source, &destination), later);

        assert!(first.is_success());
        assert!(second.is_success());
        assert_ne!(first.destination, second.destination);
        assert_eq!(fs::read_dir(&destination).unwrap().count(), 2);
    }

    #[test]
    fn test_same_second_collision_is_last_writer_wins() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.txt");
        let destination = dir.path().join("backups");
        fs::write(&source, b"first").unwrap();

        let now = tick_at_101500();
        run_backup(&task(&source, &destination), now);
        fs::write(&source, b"second").unwrap();
        let record = run_backup(&task(&source, &destination), now);

        assert!(record.is_success());
        let copy = destination.join("20240305_101500_a.txt");
        assert_eq!(fs::read(&copy).unwrap(), b"second");
        assert_eq!(fs::read_dir(&destination).unwrap().count(), 1);
    }
}
