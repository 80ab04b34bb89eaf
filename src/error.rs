use std::path::PathBuf;

/// Every error lx can produce. Displayed as user-facing messages; the first
/// one aborts the run.
#[derive(Debug)]
pub enum LxError {
    NotFound {
        path: PathBuf,
        suggestion: Option<String>,
    },
    PermissionDenied {
        path: PathBuf,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    Stdin {
        source: std::io::Error,
    },
    NoInput,
    Config {
        path: PathBuf,
        reason: String,
    },
}

impl std::fmt::Display for LxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path, suggestion } => {
                write!(f, "not found: {}", path.display())?;
                if let Some(s) = suggestion {
                    write!(f, " (did you mean: {s})")?;
                }
                Ok(())
            }
            Self::PermissionDenied { path } => {
                write!(f, "{} [permission denied]", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "read {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "write {}: {source}", path.display())
            }
            Self::Stdin { source } => write!(f, "read stdin: {source}"),
            Self::NoInput => write!(f, "provide one or more file paths via args or stdin"),
            Self::Config { path, reason } => {
                write!(f, "config {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for LxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } | Self::Write { source, .. } | Self::Stdin { source } => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl LxError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Write { .. } | Self::Stdin { .. } => 1,
            Self::NotFound { .. } | Self::Io { .. } => 2,
            Self::NoInput | Self::Config { .. } => 3,
            Self::PermissionDenied { .. } => 4,
        }
    }

    /// The reader on the other end of stdout went away (`lx big.log | head`).
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            Self::Write { source, .. } if source.kind() == std::io::ErrorKind::BrokenPipe
        )
    }
}
