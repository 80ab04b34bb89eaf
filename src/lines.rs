/// Logical lines of a byte buffer. Each slice keeps its own `\n`; only the
/// last one may be unterminated. Concatenating the slices gives back the
/// original buffer byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lines<'a> {
    data: &'a [u8],
    lines: Vec<&'a [u8]>,
}

impl<'a> Lines<'a> {
    /// Split on every `\n`, keeping the terminator attached. A trailing empty
    /// fragment after a final newline is not a row.
    #[must_use]
    pub fn split(data: &'a [u8]) -> Self {
        let mut lines = Vec::with_capacity(count_lines(data));
        let mut start = 0;
        for pos in memchr::memchr_iter(b'\n', data) {
            lines.push(&data[start..=pos]);
            start = pos + 1;
        }
        if start < data.len() {
            lines.push(&data[start..]);
        }
        Self { data, lines }
    }

    /// The buffer these lines were split from.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    #[must_use]
    pub fn as_slice(&self) -> &[&'a [u8]] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Count logical rows without materializing them. Files without a trailing
/// newline still count their last row. Always equals `Lines::split(data).len()`.
#[must_use]
pub fn count_lines(data: &[u8]) -> usize {
    match data.last() {
        None => 0,
        Some(b'\n') => memchr::memchr_iter(b'\n', data).count(),
        Some(_) => memchr::memchr_iter(b'\n', data).count() + 1,
    }
}
