use std::fs;
use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use memmap2::Mmap;

use crate::error::LxError;
use crate::types::Lang;

/// File bytes: memory-mapped for regular non-empty files, owned otherwise.
pub enum Contents {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for Contents {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Mapped(m) => &m[..],
            Self::Owned(v) => &v[..],
        }
    }
}

/// A file's bytes plus the metadata captured when it was opened.
pub struct RawFile {
    /// Path exactly as the user gave it, never canonicalized.
    pub path: String,
    pub contents: Contents,
    pub byte_size: u64,
    pub modified: SystemTime,
}

impl RawFile {
    pub fn load(path: &str) -> Result<Self, LxError> {
        let p = Path::new(path);
        let meta = match fs::metadata(p) {
            Ok(m) => m,
            Err(e) => return Err(stat_error(p, e)),
        };

        if meta.is_dir() {
            return Err(LxError::Io {
                path: p.to_path_buf(),
                source: io::Error::from(io::ErrorKind::IsADirectory),
            });
        }

        let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);

        // mmap on a 0-byte file fails on some platforms, and pipes or
        // /dev/stdin can't be mapped at all.
        let contents = if meta.is_file() && meta.len() > 0 {
            let file = fs::File::open(p).map_err(|e| stat_error(p, e))?;
            let mmap = unsafe { Mmap::map(&file) }.map_err(|e| io_error(p, e))?;
            Contents::Mapped(mmap)
        } else {
            Contents::Owned(fs::read(p).map_err(|e| stat_error(p, e))?)
        };

        // Size of what was actually read; differs from metadata for pipes.
        let byte_size = if meta.is_file() {
            meta.len()
        } else {
            contents.len() as u64
        };

        Ok(Self {
            path: path.to_string(),
            contents,
            byte_size,
            modified,
        })
    }

    /// Wrap bytes that did not come from disk.
    #[must_use]
    pub fn from_bytes(path: impl Into<String>, bytes: Vec<u8>, modified: SystemTime) -> Self {
        Self {
            path: path.into(),
            byte_size: bytes.len() as u64,
            contents: Contents::Owned(bytes),
            modified,
        }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.contents
    }
}

fn stat_error(path: &Path, e: io::Error) -> LxError {
    match e.kind() {
        io::ErrorKind::NotFound => LxError::NotFound {
            path: path.to_path_buf(),
            suggestion: suggest_similar(path),
        },
        io::ErrorKind::PermissionDenied => LxError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => io_error(path, e),
    }
}

fn io_error(path: &Path, source: io::Error) -> LxError {
    LxError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Detect the fence language from the lowercased extension.
pub fn detect_lang(path: &Path) -> Option<Lang> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let lang = match ext.as_str() {
        "go" => Lang::Go,
        "py" => Lang::Python,
        "js" => Lang::JavaScript,
        "jsx" => Lang::Jsx,
        "ts" => Lang::TypeScript,
        "tsx" => Lang::Tsx,
        "rs" => Lang::Rust,
        "java" => Lang::Java,
        "c" | "h" => Lang::C,
        "cc" | "cpp" | "cxx" | "hpp" | "hh" | "hxx" => Lang::Cpp,
        "sh" | "bash" => Lang::Bash,
        "zsh" => Lang::Zsh,
        "rb" => Lang::Ruby,
        "php" => Lang::Php,
        "html" | "htm" => Lang::Html,
        "css" => Lang::Css,
        "json" => Lang::Json,
        "yml" | "yaml" => Lang::Yaml,
        "toml" => Lang::Toml,
        "md" | "markdown" => Lang::Markdown,
        "txt" => Lang::Text,
        _ => return None,
    };
    Some(lang)
}

/// `{language}` value for a path: the fence tag, or empty when unknown.
pub fn language_tag(path: &str) -> &'static str {
    detect_lang(Path::new(path)).map_or("", Lang::tag)
}

/// Suggest a similar file name from the parent directory (edit distance).
fn suggest_similar(path: &Path) -> Option<String> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = path.file_name()?.to_str()?;
    let entries = fs::read_dir(parent).ok()?;

    let mut best: Option<(usize, String)> = None;
    for entry in entries.flatten() {
        let candidate = entry.file_name();
        let candidate = candidate.to_string_lossy();
        let dist = edit_distance(name, &candidate);
        if dist <= 3 {
            match &best {
                Some((d, _)) if dist < *d => best = Some((dist, candidate.into_owned())),
                None => best = Some((dist, candidate.into_owned())),
                _ => {}
            }
        }
    }
    best.map(|(_, name)| name)
}

/// Levenshtein distance. Only used on short file names.
fn edit_distance(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
