use std::borrow::Cow;

use crate::format;
use crate::lines::Lines;

/// What part of a file gets printed. Each variant carries the boundaries it
/// was cut at, so numbering reads them back instead of re-deriving them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// Untouched original bytes: no limits, or limits that cover the file.
    Full { lines: &'a Lines<'a> },
    /// First `lines.len()` rows.
    Head { lines: &'a [&'a [u8]], total: usize },
    /// Last `lines.len()` rows.
    Tail { lines: &'a [&'a [u8]], total: usize },
    /// `head` rows, an ellipsis marker, then `tail` rows.
    Elided {
        head: &'a [&'a [u8]],
        tail: &'a [&'a [u8]],
        total: usize,
    },
}

impl<'a> View<'a> {
    /// Pick the view for `head`/`tail` limits (0 = unlimited). Limits that
    /// would not remove anything return the full content, so a file is never
    /// decorated with a marker claiming 0 rows skipped.
    #[must_use]
    pub fn select(lines: &'a Lines<'a>, head: usize, tail: usize) -> Self {
        let total = lines.len();
        let all = lines.as_slice();

        if head == 0 && tail == 0 {
            return View::Full { lines };
        }
        if head >= total || tail >= total || (head > 0 && tail > 0 && head + tail >= total) {
            return View::Full { lines };
        }

        match (head, tail) {
            (h, 0) => View::Head {
                lines: &all[..h],
                total,
            },
            (0, t) => View::Tail {
                lines: &all[total - t..],
                total,
            },
            (h, t) => View::Elided {
                head: &all[..h],
                tail: &all[total - t..],
                total,
            },
        }
    }

    /// Row count of the original file, independent of how much is shown.
    #[must_use]
    pub fn total(&self) -> usize {
        match self {
            View::Full { lines } => lines.len(),
            View::Head { total, .. } | View::Tail { total, .. } | View::Elided { total, .. } => {
                *total
            }
        }
    }

    /// Rows dropped between head and tail. Zero for every other view.
    #[must_use]
    pub fn skipped(&self) -> usize {
        match self {
            View::Elided { head, tail, total } => total - head.len() - tail.len(),
            _ => 0,
        }
    }

    /// Original line number of the first row after the ellipsis (or of the
    /// first row of a tail-only view).
    fn tail_start(&self) -> usize {
        match self {
            View::Tail { lines, total } | View::Elided { tail: lines, total, .. } => {
                total - lines.len() + 1
            }
            _ => 1,
        }
    }

    /// Bytes to print. Full views without numbering borrow the input as-is.
    #[must_use]
    pub fn render(&self, numbered: bool) -> Cow<'a, [u8]> {
        if numbered {
            return Cow::Owned(self.numbered());
        }
        match self {
            View::Full { lines } => Cow::Borrowed(lines.data()),
            View::Head { lines, .. } | View::Tail { lines, .. } => Cow::Owned(lines.concat()),
            View::Elided { head, tail, .. } => {
                let mut out = Vec::new();
                for line in *head {
                    out.extend_from_slice(line);
                }
                out.extend_from_slice(format::ellipsis(self.skipped()).as_bytes());
                for line in *tail {
                    out.extend_from_slice(line);
                }
                Cow::Owned(out)
            }
        }
    }

    /// `N: ` prefixed rows, numbered by their position in the original file.
    /// The ellipsis marker is left unnumbered.
    fn numbered(&self) -> Vec<u8> {
        let mut out = Vec::new();
        match self {
            View::Full { lines } => format::number_lines(&mut out, lines.as_slice(), 1),
            View::Head { lines, .. } => format::number_lines(&mut out, lines, 1),
            View::Tail { lines, .. } => format::number_lines(&mut out, lines, self.tail_start()),
            View::Elided { head, tail, .. } => {
                format::number_lines(&mut out, head, 1);
                out.extend_from_slice(format::ellipsis(self.skipped()).as_bytes());
                format::number_lines(&mut out, tail, self.tail_start());
            }
        }
        out
    }

    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            View::Full { .. } => "full",
            View::Head { .. } => "head",
            View::Tail { .. } => "tail",
            View::Elided { .. } => "head+tail",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: &[u8] = b"a\nb\nc\nd\ne\n";

    fn shown(data: &[u8], head: usize, tail: usize, numbered: bool) -> String {
        let lines = Lines::split(data);
        let view = View::select(&lines, head, tail);
        String::from_utf8(view.render(numbered).into_owned()).unwrap()
    }

    #[test]
    fn no_limits_returns_original() {
        let lines = Lines::split(FIVE);
        let view = View::select(&lines, 0, 0);
        assert_eq!(view.kind(), "full");
        assert!(matches!(view.render(false), Cow::Borrowed(b) if b == FIVE));
    }

    #[test]
    fn head_only() {
        assert_eq!(shown(FIVE, 2, 0, false), "a\nb\n");
    }

    #[test]
    fn tail_only() {
        assert_eq!(shown(FIVE, 0, 2, false), "d\ne\n");
    }

    #[test]
    fn head_and_tail_insert_ellipsis() {
        assert_eq!(shown(FIVE, 1, 2, false), "a\n... (2 rows skipped)\nd\ne\n");
    }

    #[test]
    fn head_and_tail_numbered() {
        assert_eq!(
            shown(FIVE, 1, 2, true),
            "1: a\n... (2 rows skipped)\n4: d\n5: e\n"
        );
    }

    #[test]
    fn tail_numbering_starts_at_original_position() {
        assert_eq!(shown(FIVE, 0, 2, true), "4: d\n5: e\n");
    }

    #[test]
    fn head_numbering_starts_at_one() {
        assert_eq!(shown(FIVE, 3, 0, true), "1: a\n2: b\n3: c\n");
    }

    #[test]
    fn full_numbering_covers_every_row() {
        assert_eq!(shown(b"x\ny", 0, 0, true), "1: x\n2: y");
    }

    #[test]
    fn head_plus_tail_equal_to_total_is_full() {
        let lines = Lines::split(FIVE);
        let view = View::select(&lines, 3, 2);
        assert_eq!(view.kind(), "full");
        assert_eq!(view.skipped(), 0);
        assert_eq!(shown(FIVE, 3, 2, false), "a\nb\nc\nd\ne\n");
    }

    #[test]
    fn unterminated_last_row_in_tail() {
        assert_eq!(shown(b"a\nb\nc\nd", 1, 1, false), "a\n... (2 rows skipped)\nd");
        assert_eq!(shown(b"a\nb\nc\nd", 1, 1, true), "1: a\n... (2 rows skipped)\n4: d");
    }

    #[test]
    fn empty_input_is_full_regardless_of_limits() {
        for (h, t) in [(0, 0), (1, 0), (0, 1), (2, 3)] {
            let lines = Lines::split(b"");
            let view = View::select(&lines, h, t);
            assert_eq!(view.kind(), "full");
            assert_eq!(view.total(), 0);
            assert!(view.render(true).is_empty());
        }
    }

    #[test]
    fn total_is_original_count_for_every_view() {
        let lines = Lines::split(FIVE);
        for h in 0..7 {
            for t in 0..7 {
                assert_eq!(View::select(&lines, h, t).total(), 5, "head={h} tail={t}");
            }
        }
    }

    /// Any pair of limits that covers the file must leave it untouched.
    #[test]
    fn covering_limits_short_circuit() {
        let samples: &[&[u8]] = &[FIVE, b"a\nb\nc", b"only\n", b"x\n\n\ny\n"];
        for &data in samples {
            let lines = Lines::split(data);
            let total = lines.len();
            for h in 0..=total + 1 {
                for t in 0..=total + 1 {
                    let covers = h >= total || t >= total || (h > 0 && t > 0 && h + t >= total);
                    if !covers && !(h == 0 && t == 0) {
                        continue;
                    }
                    let view = View::select(&lines, h, t);
                    assert_eq!(view.render(false).as_ref(), data, "head={h} tail={t}");
                }
            }
        }
    }

    /// Stripping the `N: ` prefixes from a numbered view gives back the plain
    /// view, and the numbers match the rows' original positions.
    #[test]
    fn numbers_track_original_positions() {
        let data = b"r1\nr2\nr3\nr4\nr5\nr6\nr7\nr8\n";
        let lines = Lines::split(data);
        for h in 0..10 {
            for t in 0..10 {
                let view = View::select(&lines, h, t);
                let numbered = String::from_utf8(view.render(true).into_owned()).unwrap();
                for row in numbered.lines() {
                    if row.starts_with("... (") {
                        assert_eq!(view.kind(), "head+tail");
                        continue;
                    }
                    let (num, text) = row.split_once(": ").unwrap();
                    assert_eq!(format!("r{num}"), text, "head={h} tail={t}");
                }
            }
        }
    }
}
