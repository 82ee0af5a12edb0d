use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::runtime::Runtime;
use tokio::time::timeout;
use tracing::{debug, info, warn};

pub trait ClipboardSink {
    /// Returns whether any backend accepted `text`.
    fn copy(&self, text: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Command {
        program: &'static str,
        args: &'static [&'static str],
    },
    Native,
}

impl Backend {
    pub const WL_COPY: Backend = Backend::Command { program: "wl-copy", args: &[] };
    pub const XCLIP: Backend = Backend::Command {
        program: "xclip",
        args: &["-selection", "clipboard"],
    };
    pub const XSEL: Backend = Backend::Command {
        program: "xsel",
        args: &["--clipboard", "--input"],
    };

    pub const DEFAULT_ORDER: &'static [Backend] =
        &[Backend::WL_COPY, Backend::XCLIP, Backend::XSEL, Backend::Native];

    pub fn from_name(name: &str) -> Option<Backend> {
        match name {
            "wl-copy" => Some(Backend::WL_COPY),
            "xclip" => Some(Backend::XCLIP),
            "xsel" => Some(Backend::XSEL),
            "native" => Some(Backend::Native),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Backend::Command { program, .. } => program,
            Backend::Native => "native",
        }
    }
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("{0} is not installed")]
    Unavailable(&'static str),
    #[error("{0} timed out after {1:?}")]
    TimedOut(&'static str, Duration),
    #[error("{0} exited with {1}")]
    Failed(&'static str, ExitStatus),
    #[error("{0}: {1}")]
    Io(&'static str, #[source] std::io::Error),
    #[error("native clipboard: {0}")]
    Native(String),
}

/// Tries each backend in order, each bounded by `timeout`; first success wins.
pub struct SystemClipboard {
    backends: Vec<Backend>,
    timeout: Duration,
    runtime: Option<Runtime>,
}

impl SystemClipboard {
    pub fn new(backends: Vec<Backend>, timeout: Duration) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            backends,
            timeout,
            runtime: Some(runtime),
        })
    }

    pub fn try_backend(&self, backend: Backend, text: &str) -> Result<(), ClipboardError> {
        let Some(runtime) = self.runtime.as_ref() else {
            return Err(ClipboardError::Native("runtime shut down".to_string()));
        };
        runtime.block_on(async {
            match backend {
                Backend::Command { program, args } => {
                    run_with_input(program, args, text, self.timeout).await
                }
                Backend::Native => set_native(text.to_string(), self.timeout).await,
            }
        })
    }
}

impl Drop for SystemClipboard {
    // A timed-out native copy leaves its blocking task running; don't wait for it.
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&self, text: &str) -> bool {
        for backend in &self.backends {
            match self.try_backend(*backend, text) {
                Ok(()) => {
                    info!(backend = backend.name(), "copied to clipboard");
                    return true;
                }
                Err(err) => debug!(backend = backend.name(), %err, "clipboard backend failed"),
            }
        }
        warn!(tried = self.backends.len(), "no clipboard backend accepted the text");
        false
    }
}

async fn run_with_input(
    program: &'static str,
    args: &'static [&'static str],
    text: &str,
    limit: Duration,
) -> Result<(), ClipboardError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ClipboardError::Unavailable(program),
            _ => ClipboardError::Io(program, e),
        })?;

    let mut stdin = child.stdin.take();
    let exchange = async {
        if let Some(pipe) = stdin.as_mut() {
            match pipe.write_all(text.as_bytes()).await {
                Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e),
                _ => {}
            }
        }
        // closing stdin is what lets the tool finish
        drop(stdin);
        child.wait().await
    };

    match timeout(limit, exchange).await {
        Err(_) => Err(ClipboardError::TimedOut(program, limit)),
        Ok(Err(e)) => Err(ClipboardError::Io(program, e)),
        Ok(Ok(status)) if status.success() => Ok(()),
        Ok(Ok(status)) => Err(ClipboardError::Failed(program, status)),
    }
}

async fn set_native(text: String, limit: Duration) -> Result<(), ClipboardError> {
    let task = tokio::task::spawn_blocking(move || {
        arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text))
    });
    match timeout(limit, task).await {
        Err(_) => Err(ClipboardError::TimedOut("native", limit)),
        Ok(Err(join)) => Err(ClipboardError::Native(join.to_string())),
        Ok(Ok(Err(e))) => Err(ClipboardError::Native(e.to_string())),
        Ok(Ok(Ok(()))) => Ok(()),
    }
}
