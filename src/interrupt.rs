//! Process-wide interrupt handling
//!
//! A background thread waits for SIGINT/SIGTERM on a small tokio runtime. When
//! a signal arrives it removes the registered work area and exits with 130.
//! Prompts put the terminal in raw mode, so Ctrl-C inside a prompt surfaces as
//! an `inquire` interrupt instead and unwinds normally.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

static CLEANUP: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Exit status used after an interrupt
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Remember `path` for removal on interrupt
pub fn register_cleanup(path: &Path) {
    if let Ok(mut slot) = CLEANUP.lock() {
        *slot = Some(path.to_path_buf());
    }
}

/// Forget `path` if it is still registered
pub fn clear_cleanup(path: &Path) {
    if let Ok(mut slot) = CLEANUP.lock() {
        if slot.as_deref() == Some(path) {
            *slot = None;
        }
    }
}

/// Remove the registered work area, if any
pub fn run_cleanup() {
    let path = CLEANUP.lock().ok().and_then(|mut slot| slot.take());
    if let Some(path) = path {
        if let Err(e) = std::fs::remove_dir_all(&path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove work area");
        }
    }
}

/// Spawn the signal watcher. Call once, early in `main`.
pub fn install_handler() {
    let spawned = std::thread::Builder::new()
        .name("scriptdock-signals".to_string())
        .spawn(|| {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    tracing::warn!(error = %e, "signal handler unavailable");
                    return;
                }
            };

            runtime.block_on(async {
                if let Err(e) = wait_for_signal().await {
                    tracing::warn!(error = %e, "signal handler unavailable");
                    return;
                }
                tracing::debug!("interrupt received, cleaning up");
                run_cleanup();
                eprintln!("\nInterrupted.");
                std::process::exit(INTERRUPTED_EXIT_CODE);
            });
        });

    if let Err(e) = spawned {
        tracing::warn!(error = %e, "failed to spawn signal handler thread");
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    tokio::select! {
        _ = sigterm.recv() => {}
        _ = sigint.recv() => {}
    }
    Ok(())
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_run_cleanup_removes_registered_path() {
        let temp = TempDir::new().unwrap();
        let area = temp.path().join("work");
        std::fs::create_dir_all(area.join("scripts")).unwrap();

        register_cleanup(&area);
        run_cleanup();
        assert!(!area.exists());
    }

    #[test]
    #[serial]
    fn test_clear_cleanup_only_clears_matching_path() {
        let temp = TempDir::new().unwrap();
        let area = temp.path().join("work");
        std::fs::create_dir_all(&area).unwrap();

        register_cleanup(&area);
        clear_cleanup(Path::new("/some/other/path"));
        run_cleanup();
        assert!(!area.exists());

        std::fs::create_dir_all(&area).unwrap();
        register_cleanup(&area);
        clear_cleanup(&area);
        run_cleanup();
        assert!(area.exists());
    }
}
