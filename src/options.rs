use serde::Deserialize;

use crate::template::{DEFAULT_POSTFIX, DEFAULT_PREFIX};

/// Line terminator substituted for `{n}` in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Newline {
    Lf,
    #[value(name = "crlf")]
    CrLf,
}

impl Newline {
    /// The convention of the platform lx was built for.
    #[must_use]
    pub fn native() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Everything that shapes the output, fixed for the whole invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Leading rows to keep, 0 = unlimited.
    pub head: usize,
    /// Trailing rows to keep, 0 = unlimited.
    pub tail: usize,
    pub prefix: String,
    pub postfix: String,
    pub line_numbers: bool,
    pub newline: Newline,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            head: 0,
            tail: 0,
            prefix: DEFAULT_PREFIX.to_string(),
            postfix: DEFAULT_POSTFIX.to_string(),
            line_numbers: false,
            newline: Newline::native(),
        }
    }
}

/// A line-count flag together with whether the user actually passed it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limit {
    pub value: usize,
    pub explicit: bool,
}

impl Limit {
    #[must_use]
    pub fn set(value: usize) -> Self {
        Self {
            value,
            explicit: true,
        }
    }

    /// From a parsed flag. Negative counts mean "no limit".
    #[must_use]
    pub fn from_flag(flag: Option<i64>) -> Self {
        match flag {
            Some(v) => Self::set(usize::try_from(v.max(0)).unwrap_or(usize::MAX)),
            None => Self::default(),
        }
    }
}

/// Effective `(head, tail)` after reconciling `-n` with `--head`/`--tail`.
///
/// `-n N` splits N rows across both ends, the head taking the odd one. An
/// explicit `--head` or `--tail` claims its share first (capped at N) and the
/// other end gets the rest. When both sides are explicit, N is ignored.
#[must_use]
pub fn resolve(head: Limit, tail: Limit, both: Limit) -> (usize, usize) {
    if !both.explicit {
        return (head.value, tail.value);
    }
    let n = both.value;
    match (head.explicit, tail.explicit) {
        (false, false) => (n.div_ceil(2), n / 2),
        (true, false) => {
            let h = head.value.min(n);
            (h, n - h)
        }
        (false, true) => {
            let t = tail.value.min(n);
            (n - t, t)
        }
        (true, true) => (head.value, tail.value),
    }
}
