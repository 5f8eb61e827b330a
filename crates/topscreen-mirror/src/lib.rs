//! Best-effort lifecycle for the scrcpy screen-mirroring helper.
//!
//! The helper is optional: callers treat a start failure as "continue
//! without mirroring". The helper's output is never read, no restart is
//! attempted, and stopping ignores every failure.

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub mod error;

pub use error::MirrorError;

const SCRCPY: &str = "scrcpy";

/// Mirror helper settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Whether to start the helper at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Explicit helper executable. `None` resolves `scrcpy` from `PATH`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Extra arguments passed to the helper.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            args: Vec::new(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// A spawned mirror helper process.
///
/// Dropping a still-running helper stops it, so an early exit never
/// leaks the child.
pub struct MirrorProcess {
    command: String,
    child: Child,
}

impl MirrorProcess {
    /// Resolve and start the helper.
    pub fn start(config: &MirrorConfig) -> Result<Self, MirrorError> {
        if !config.enabled {
            return Err(MirrorError::Disabled);
        }

        let exec = match &config.command {
            Some(cmd) => PathBuf::from(cmd),
            None => resolve_executable(SCRCPY)
                .ok_or_else(|| MirrorError::NotFound(SCRCPY.to_string()))?,
        };
        let command = exec.display().to_string();

        let child = Command::new(&exec)
            .args(&config.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| MirrorError::Spawn {
                command: command.clone(),
                source,
            })?;

        info!(command = %command, pid = child.id(), "started mirror helper");
        Ok(Self { command, child })
    }

    /// Whether the helper is still running.
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Stop the helper, ignoring every failure.
    pub fn stop(&mut self) {
        match self.child.try_wait() {
            Ok(Some(status)) => {
                debug!(command = %self.command, %status, "mirror helper already exited");
            }
            _ => {
                if let Err(e) = self.child.kill() {
                    warn!(command = %self.command, error = %e, "failed to kill mirror helper");
                }
                let _ = self.child.wait();
                info!(command = %self.command, "stopped mirror helper");
            }
        }
    }
}

impl Drop for MirrorProcess {
    fn drop(&mut self) {
        self.stop();
    }
}

/// First match of `name` on the process's `PATH`, if any.
fn resolve_executable(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
