use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lx::config::{self, Overrides};
use lx::error::LxError;
use lx::options::{Limit, Newline, resolve};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("LX_BUILD_COMMIT"), ")");

/// lx: print files with headers, delimiters, and optional head/tail slicing.
///
/// Template placeholders: {filename} {row_count} {byte_size} {last_modified}
/// {language} {n}
#[derive(Parser)]
#[command(name = "lx", version, long_version = LONG_VERSION, about, disable_help_flag = true)]
struct Cli {
    /// Files to print. Paths piped on stdin (one per line) are appended.
    files: Vec<String>,

    /// Print first N lines (0 = no limit).
    #[arg(short = 'h', long, value_name = "N", allow_negative_numbers = true)]
    head: Option<i64>,

    /// Print last N lines (0 = no limit).
    #[arg(short = 't', long, value_name = "N", allow_negative_numbers = true)]
    tail: Option<i64>,

    /// Print N lines split between head and tail; --head/--tail take their share first.
    #[arg(short = 'n', value_name = "N", allow_negative_numbers = true)]
    n: Option<i64>,

    /// Prefix each line with its line number in the original file.
    #[arg(short = 'l', long, overrides_with = "no_line_numbers")]
    line_numbers: bool,

    /// Turn off line numbers enabled by the config file.
    #[arg(long, overrides_with = "line_numbers")]
    no_line_numbers: bool,

    /// Template printed before each file.
    #[arg(long, value_name = "TEMPLATE")]
    prefix_delimiter: Option<String>,

    /// Template printed after each file.
    #[arg(long, value_name = "TEMPLATE")]
    postfix_delimiter: Option<String>,

    /// Line terminator used for {n} (default: the platform's).
    #[arg(long, value_enum)]
    newline: Option<Newline>,

    /// Config file (default: ./lx.toml, then the user config dir).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not read file paths from stdin.
    #[arg(long)]
    no_stdin: bool,

    /// Machine-readable JSON output.
    #[arg(long)]
    json: bool,

    /// Print shell completions for the given shell.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Print help.
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    // Shell completions
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "lx", &mut io::stdout());
        return;
    }

    if let Err(e) = run(cli) {
        if e.is_broken_pipe() {
            return;
        }
        eprintln!("lx: {e}");
        process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), LxError> {
    let mut files = cli.files;
    if !cli.no_stdin {
        files.extend(lx::input::stdin_paths()?);
    }
    if files.is_empty() {
        return Err(LxError::NoInput);
    }

    let (head, tail) = resolve(
        Limit::from_flag(cli.head),
        Limit::from_flag(cli.tail),
        Limit::from_flag(cli.n),
    );
    let file_config = config::load(cli.config.as_deref())?;
    let options = file_config.apply(
        Overrides {
            prefix: cli.prefix_delimiter,
            postfix: cli.postfix_delimiter,
            line_numbers: line_numbers_flag(cli.line_numbers, cli.no_line_numbers),
            newline: cli.newline,
        },
        head,
        tail,
    );
    debug!(
        head,
        tail,
        files = files.len(),
        line_numbers = options.line_numbers,
        "resolved options"
    );

    if cli.json {
        let reports = lx::report(&files, &options)?;
        let json = serde_json::to_string_pretty(&reports)
            .expect("FileReport is always serializable");
        return writeln!(io::stdout().lock(), "{json}").map_err(|source| LxError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        });
    }

    let mut out = BufWriter::new(io::stdout().lock());
    lx::run(&files, &options, &mut out)
}

/// `None` when neither `-l` nor `--no-line-numbers` was given, so the config
/// file decides.
fn line_numbers_flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Logs go to stderr, filtered by `LX_LOG` (e.g. `LX_LOG=debug`). Off by default.
fn init_logging() {
    let filter = EnvFilter::try_from_env("LX_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn attached_and_negative_values() {
        let cli = parse(&["lx", "-n4", "-h10", "-t-3", "f"]);
        assert_eq!(cli.n, Some(4));
        assert_eq!(cli.head, Some(10));
        assert_eq!(cli.tail, Some(-3));
        assert_eq!(cli.files, ["f"]);
    }

    #[test]
    fn short_h_is_head_not_help() {
        let cli = parse(&["lx", "-h", "5"]);
        assert_eq!(cli.head, Some(5));

        let cli = parse(&["lx", "-h-5", "f"]);
        assert_eq!(cli.head, Some(-5));
    }

    #[test]
    fn long_help_still_prints_help() {
        let err = Cli::try_parse_from(["lx", "--help"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn line_number_flags_last_one_wins() {
        let cli = parse(&["lx", "-l", "--no-line-numbers", "f"]);
        assert_eq!(line_numbers_flag(cli.line_numbers, cli.no_line_numbers), Some(false));

        let cli = parse(&["lx", "--no-line-numbers", "-l", "f"]);
        assert_eq!(line_numbers_flag(cli.line_numbers, cli.no_line_numbers), Some(true));

        let cli = parse(&["lx", "f"]);
        assert_eq!(line_numbers_flag(cli.line_numbers, cli.no_line_numbers), None);
    }
}
