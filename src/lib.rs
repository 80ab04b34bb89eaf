#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,   // Rust naming conventions
    clippy::missing_errors_doc,        // errors are the LxError variants, documented there
    clippy::missing_panics_doc,        // same
)]

pub mod config;
pub mod error;
pub(crate) mod format;
pub mod input;
pub mod lines;
pub mod options;
pub mod read;
pub mod template;
pub mod types;
pub mod view;

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use error::LxError;
use lines::Lines;
use options::RenderOptions;
use read::RawFile;
use template::Substitutions;
use types::FileReport;
use view::View;

/// Print every path in order: prefix, (numbered) view, postfix. Stops at the
/// first error; later paths are never opened.
pub fn run<W: Write>(
    paths: &[String],
    options: &RenderOptions,
    out: &mut W,
) -> Result<(), LxError> {
    for path in paths {
        let file = RawFile::load(path)?;
        write_file(&file, options, out)
            .and_then(|()| out.flush())
            .map_err(|source| LxError::Write {
                path: PathBuf::from(path),
                source,
            })?;
    }
    Ok(())
}

/// Write one file as three ordered writes: prefix, body, postfix.
pub fn write_file<W: Write>(
    file: &RawFile,
    options: &RenderOptions,
    out: &mut W,
) -> io::Result<()> {
    let lines = Lines::split(file.bytes());
    let view = View::select(&lines, options.head, options.tail);
    let last_modified = format::timestamp(file.modified);
    let subs = Substitutions {
        filename: &file.path,
        row_count: view.total(),
        byte_size: file.byte_size,
        last_modified: &last_modified,
        language: read::language_tag(&file.path),
        newline: options.newline,
    };

    debug!(
        path = %file.path,
        rows = view.total(),
        bytes = file.byte_size,
        view = view.kind(),
        skipped = view.skipped(),
        "render"
    );

    out.write_all(template::render(&options.prefix, &subs).as_bytes())?;
    out.write_all(&view.render(options.line_numbers))?;
    out.write_all(template::render(&options.postfix, &subs).as_bytes())?;
    Ok(())
}

/// Structured variant of `run` for `--json`: metadata plus the selected
/// rows, no templates. Same ordering and abort rules.
pub fn report(paths: &[String], options: &RenderOptions) -> Result<Vec<FileReport>, LxError> {
    paths
        .iter()
        .map(|path| -> Result<FileReport, LxError> {
            let file = RawFile::load(path)?;
            let lines = Lines::split(file.bytes());
            let view = View::select(&lines, options.head, options.tail);
            Ok(FileReport {
                filename: file.path.clone(),
                row_count: view.total(),
                byte_size: file.byte_size,
                last_modified: format::timestamp(file.modified),
                language: read::language_tag(&file.path).to_string(),
                content: String::from_utf8_lossy(&view.render(options.line_numbers)).into_owned(),
            })
        })
        .collect()
}
