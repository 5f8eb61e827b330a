//! Device input forwarding through the adb command-line tool.
//!
//! This crate defines the [`DeviceInput`] trait that control surfaces call,
//! and the [`AdbInput`] backend that executes each intent as one blocking
//! `adb shell input` invocation. Outcomes are reported as plain booleans:
//! a zero exit status is `true`; non-zero exit, a missing executable, and
//! spawn failure all collapse to `false`. Nothing is retried and no tool
//! output is inspected.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

pub mod action;
pub mod config;
#[cfg(feature = "mock")]
pub mod mock;

pub use action::InputAction;
pub use config::{InputConfig, Point};

/// Forwards input intents to a device and reports per-call success.
///
/// Implementations execute synchronously: each call blocks until the
/// underlying invocation finishes, so calls issued in sequence complete
/// strictly in order. Omitted parameters fall back to the configured
/// defaults independently of one another.
pub trait DeviceInput: Send + Sync {
    /// Touch the screen, defaulting to the configured tap point.
    fn tap(&self, x: Option<i32>, y: Option<i32>) -> bool;

    /// Drag between two points over a duration in milliseconds.
    fn swipe(
        &self,
        x1: Option<i32>,
        y1: Option<i32>,
        x2: Option<i32>,
        y2: Option<i32>,
        duration_ms: Option<u64>,
    ) -> bool;

    /// Press the BACK navigation key.
    fn back(&self) -> bool;

    /// Press the HOME navigation key.
    fn home(&self) -> bool;
}

const ADB: &str = "adb";

/// The adb-backed input adapter.
///
/// Construction always succeeds: the executable is resolved once, and if
/// it cannot be found on `PATH` the literal name is kept so the failure
/// surfaces as a `false` result at first use rather than earlier.
pub struct AdbInput {
    exec: PathBuf,
    config: InputConfig,
}

impl AdbInput {
    /// Build an adapter, resolving the adb executable once.
    ///
    /// An explicit `adb_path` in the configuration wins; otherwise `adb`
    /// is searched on `PATH`, degrading to the bare name if absent.
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        let exec = match &config.adb_path {
            Some(path) => PathBuf::from(path),
            None => resolve_executable(ADB).unwrap_or_else(|| PathBuf::from(ADB)),
        };
        Self { exec, config }
    }

    /// The resolved executable used for every invocation.
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.exec
    }

    #[must_use]
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Run one action to completion and map its exit status to a boolean.
    ///
    /// No timeout is enforced: a hung tool hangs the call.
    fn run(&self, action: &InputAction) -> bool {
        let result = Command::new(&self.exec)
            .args(action.shell_args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => {
                debug!(exec = %self.exec.display(), %action, code = ?status.code(), "input command finished");
                status.success()
            }
            Err(e) => {
                debug!(exec = %self.exec.display(), %action, error = %e, "input command failed to start");
                false
            }
        }
    }
}

impl Default for AdbInput {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl DeviceInput for AdbInput {
    fn tap(&self, x: Option<i32>, y: Option<i32>) -> bool {
        self.run(&self.config.tap_action(x, y))
    }

    fn swipe(
        &self,
        x1: Option<i32>,
        y1: Option<i32>,
        x2: Option<i32>,
        y2: Option<i32>,
        duration_ms: Option<u64>,
    ) -> bool {
        self.run(&self.config.swipe_action(x1, y1, x2, y2, duration_ms))
    }

    fn back(&self) -> bool {
        self.run(&InputAction::Back)
    }

    fn home(&self) -> bool {
        self.run(&InputAction::Home)
    }
}

/// First match of `name` on the process's `PATH`, if any.
fn resolve_executable(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
