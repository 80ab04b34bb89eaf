use std::borrow::Cow;

use crate::options::Newline;

pub const DEFAULT_PREFIX: &str = "{filename} ({row_count} rows){n}---{n}```{language}{n}";
pub const DEFAULT_POSTFIX: &str = "```{n}{n}";

/// Per-file values for the `{...}` placeholders.
#[derive(Debug, Clone, Copy)]
pub struct Substitutions<'a> {
    pub filename: &'a str,
    pub row_count: usize,
    pub byte_size: u64,
    pub last_modified: &'a str,
    pub language: &'a str,
    pub newline: Newline,
}

impl Substitutions<'_> {
    fn lookup(&self, token: &str) -> Option<Cow<'_, str>> {
        let value = match token {
            "filename" => Cow::Borrowed(self.filename),
            "row_count" => Cow::Owned(self.row_count.to_string()),
            "byte_size" => Cow::Owned(self.byte_size.to_string()),
            "last_modified" => Cow::Borrowed(self.last_modified),
            "language" => Cow::Borrowed(self.language),
            "n" => Cow::Borrowed(self.newline.as_str()),
            _ => return None,
        };
        Some(value)
    }
}

/// Replace known `{token}`s in one left-to-right pass. Substituted text is
/// never rescanned, so a filename like `{row_count}.txt` comes out literally.
/// Unknown tokens and stray braces are copied as-is.
pub fn render(template: &str, subs: &Substitutions<'_>) -> String {
    let mut out = String::with_capacity(template.len() + subs.filename.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];
        let hit = candidate
            .find('}')
            .and_then(|close| subs.lookup(&candidate[1..close]).map(|v| (close, v)));
        match hit {
            Some((close, value)) => {
                out.push_str(&value);
                rest = &candidate[close + 1..];
            }
            None => {
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subs(filename: &str) -> Substitutions<'_> {
        Substitutions {
            filename,
            row_count: 2,
            byte_size: 12,
            last_modified: "2024-05-01T09:30:00Z",
            language: "text",
            newline: Newline::Lf,
        }
    }

    #[test]
    fn literal_substitution() {
        let out = render("BEGIN {filename} {row_count}{n}", &subs("f.txt"));
        assert_eq!(out, "BEGIN f.txt 2\n");
    }

    #[test]
    fn every_token() {
        let out = render(
            "{filename}|{row_count}|{byte_size}|{last_modified}|{language}|{n}",
            &subs("a.txt"),
        );
        assert_eq!(out, "a.txt|2|12|2024-05-01T09:30:00Z|text|\n");
    }

    #[test]
    fn crlf_newline() {
        let s = Substitutions {
            newline: Newline::CrLf,
            ..subs("x")
        };
        assert_eq!(render("a{n}b{n}", &s), "a\r\nb\r\n");
    }

    #[test]
    fn default_templates() {
        let s = subs("src/main.rs");
        assert_eq!(
            render(DEFAULT_PREFIX, &s),
            "src/main.rs (2 rows)\n---\n```text\n"
        );
        assert_eq!(render(DEFAULT_POSTFIX, &s), "```\n\n");
    }

    #[test]
    fn unknown_tokens_left_verbatim() {
        let out = render("{nope} {filename} {} {", &subs("f"));
        assert_eq!(out, "{nope} f {} {");
    }

    #[test]
    fn nested_brace_before_token() {
        assert_eq!(render("{{filename}}", &subs("f")), "{f}");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let out = render("{filename} {row_count}", &subs("{row_count}.txt"));
        assert_eq!(out, "{row_count}.txt 2");
    }

    #[test]
    fn multibyte_text_around_tokens() {
        let out = render("→ {filename} ✓{n}", &subs("ファイル.md"));
        assert_eq!(out, "→ ファイル.md ✓\n");
    }

    #[test]
    fn empty_language() {
        let s = Substitutions {
            language: "",
            ..subs("Makefile")
        };
        assert_eq!(render("```{language}{n}", &s), "```\n");
    }
}
