/*!
 * Clipboard support for treecat
 *
 * Copies the aggregated output to the system clipboard by piping it
 * through whichever clipboard command the platform provides.
 */

use std::env;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the clipboard command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Candidate clipboard commands, tried in order of preference
#[derive(Debug, Clone, Copy)]
enum Provider {
    Tmux,
    Wayland,
    Xclip,
    Xsel,
    MacOs,
    Wsl,
    Termux,
}

impl Provider {
    fn command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Tmux => ("tmux", &["load-buffer", "-w", "-"]),
            Self::Wayland => ("wl-copy", &[]),
            Self::Xclip => ("xclip", &["-selection", "clipboard", "-in"]),
            Self::Xsel => ("xsel", &["-b", "-i"]),
            Self::MacOs => ("pbcopy", &[]),
            Self::Wsl => ("clip.exe", &[]),
            Self::Termux => ("termux-clipboard-set", &[]),
        }
    }
}

/// Copy text to the system clipboard.
///
/// Tries the available clipboard commands in preference order and
/// pipes the text through the first one that exists.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    for provider in candidate_providers() {
        let (cmd, args) = provider.command();
        if command_exists(cmd) {
            return pipe_through(cmd, args, text);
        }
    }
    Err(ClipboardError::NoClipboardFound)
}

/// Providers worth trying on the current platform
fn candidate_providers() -> Vec<Provider> {
    let mut providers = Vec::new();

    // tmux wins when a session is active, regardless of platform
    if env::var("TMUX").is_ok() {
        providers.push(Provider::Tmux);
    }

    if cfg!(target_os = "macos") {
        providers.push(Provider::MacOs);
    } else if cfg!(target_os = "android") {
        providers.push(Provider::Termux);
    } else {
        if env::var("WAYLAND_DISPLAY").is_ok() {
            providers.push(Provider::Wayland);
        }
        providers.push(Provider::Xclip);
        providers.push(Provider::Xsel);
        if env::var("WSL_DISTRO_NAME").is_ok() {
            providers.push(Provider::Wsl);
        }
    }

    providers
}

/// Check whether a command is reachable through PATH
fn command_exists(command: &str) -> bool {
    env::var("PATH")
        .map(|paths| {
            paths
                .split(':')
                .any(|path| Path::new(path).join(command).exists())
        })
        .unwrap_or(false)
}

/// Spawn `cmd` and write `text` to its stdin
fn pipe_through(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to spawn {}", cmd)))?;

    child
        .stdin
        .as_mut()
        .ok_or_else(|| ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd)))?
        .write_all(text.as_bytes())
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to write to {}", cmd)))?;

    let status = child
        .wait()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to wait for {}", cmd)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}
