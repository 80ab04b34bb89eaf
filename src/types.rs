use serde::Serialize;

/// Languages lx knows a fence tag for. Anything else renders `{language}`
/// as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Go,
    Python,
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Rust,
    Java,
    C,
    Cpp,
    Bash,
    Zsh,
    Ruby,
    Php,
    Html,
    Css,
    Json,
    Yaml,
    Toml,
    Markdown,
    Text,
}

impl Lang {
    /// Markdown code-fence identifier.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Jsx => "jsx",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::Rust => "rust",
            Self::Java => "java",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Ruby => "ruby",
            Self::Php => "php",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Markdown => "markdown",
            Self::Text => "text",
        }
    }
}

/// One file in `--json` output.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub filename: String,
    pub row_count: usize,
    pub byte_size: u64,
    pub last_modified: String,
    pub language: String,
    /// The selected (and possibly numbered) rows, decoded lossily as UTF-8.
    pub content: String,
}
