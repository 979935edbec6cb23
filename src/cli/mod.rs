//! The `fnv` command-line tool.
//!
//! Hashes each argument string, each line of standard input, or all of
//! standard input, and prints one fixed-width hex digest per unit.
//!
//! This module requires the `cli` feature (enabled by default).

mod args;
mod output;

use std::ffi::OsString;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::process::ExitCode;

pub use args::{Args, Invocation, parse_args};
pub use output::DigestWriter;

use crate::error::FnvError;
use crate::hash::hash_one_shot;
use crate::lines::hash_lines;
use crate::reader::hash_reader;

fn init_logger() {
    use fern::{
        Dispatch,
        colors::{Color, ColoredLevelConfig},
    };
    let colors = ColoredLevelConfig::default()
        .info(Color::Green)
        .debug(Color::Cyan);
    let res = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {:>5}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                colors.color(record.level()),
                message
            ))
        })
        .level(log::LevelFilter::Trace)
        .chain(io::stderr())
        .apply();
    if let Err(e) = res {
        eprintln!("Cannot initialize logger: {}", e);
    }
    log::set_max_level(log::LevelFilter::Warn);
}

/// Hashes the input selected by `args` and writes the digests to `output`.
///
/// Strings take precedence over `input`; otherwise `input` is hashed line by
/// line, or as a whole when `args.hash_all_stdin` is set.
pub fn run_with<R: Read, W: Write>(args: &Args, input: R, output: W) -> Result<W, FnvError> {
    let config = args.config;
    let mut writer = DigestWriter::new(output, args.case, args.unbuffered);
    log::debug!("hashing with {}", config);

    if !args.strings.is_empty() {
        if args.hash_all_stdin {
            log::debug!("-a has no effect when strings are given");
        }
        for s in &args.strings {
            let digest = hash_one_shot(config.variant(), config.width(), s.as_encoded_bytes());
            writer.write_digest(digest)?;
        }
    } else if args.hash_all_stdin {
        writer.write_digest(hash_reader(input, config)?)?;
    } else {
        for line in hash_lines(input, config) {
            writer.write_digest(line?.digest)?;
        }
    }

    log::debug!("wrote {} hashes", writer.written());
    Ok(writer.finish()?)
}

/// Runs the tool on the arguments following the program name and returns
/// the process exit status.
pub fn main<I>(argv: I) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    init_logger();

    let mut args = match parse_args(argv) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            let res = args::print_help(&mut io::stdout().lock());
            return exit_status(res.map_err(FnvError::from));
        }
        Ok(Invocation::Version) => {
            let res = writeln!(io::stdout().lock(), "fnv {}", env!("CARGO_PKG_VERSION"));
            return exit_status(res.map_err(FnvError::from));
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", args::short_usage());
            return ExitCode::FAILURE;
        }
    };

    if args.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    args.unbuffered = flush_per_digest(&args, stdout.is_terminal());
    let res = run_with(&args, stdin.lock(), BufWriter::new(stdout.lock()));
    exit_status(res.map(drop))
}

/// Whether each digest is flushed on its own: on request, or when a person
/// is watching the output.
fn flush_per_digest(args: &Args, stdout_is_terminal: bool) -> bool {
    args.unbuffered || stdout_is_terminal
}

fn exit_status(res: Result<(), FnvError>) -> ExitCode {
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(FnvError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("output closed early");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_str(argv: &[&str], input: &[u8]) -> String {
        let args = match parse_args(argv.iter().copied()).unwrap() {
            Invocation::Run(args) => args,
            other => panic!("expected a run, got {:?}", other),
        };
        let out = run_with(&args, Cursor::new(input), Vec::new()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_hash_strings() {
        assert_eq!(
            run_str(&["a", "foobar"], b"ignored"),
            "af63dc4c8601ec8c\n85944171f73967e8\n"
        );
    }

    #[test]
    fn test_hash_empty_string_argument() {
        assert_eq!(run_str(&["-32", ""], b""), "811c9dc5\n");
    }

    #[test]
    fn test_strings_override_all_stdin() {
        assert_eq!(run_str(&["-a", "-1", "-32", "a"], b"xyz"), "050c5d7e\n");
    }

    #[test]
    fn test_hash_lines() {
        assert_eq!(
            run_str(&["-X"], b"a\nfoobar\n"),
            "AF63DC4C8601EC8C\n85944171F73967E8\n"
        );
    }

    #[test]
    fn test_hash_lines_keeps_unterminated_tail() {
        assert_eq!(run_str(&["-32"], b"a\nfoobar"), "e40c292c\nbf9cf968\n");
    }

    #[test]
    fn test_hash_all_stdin() {
        assert_eq!(
            run_str(&["-a"], b"line one\nline two\n"),
            "69e70ffc7ee5f13f\n"
        );
    }

    #[test]
    fn test_hash_all_empty_stdin() {
        assert_eq!(run_str(&["-a", "-1"], b""), "cbf29ce484222325\n");
    }

    #[test]
    fn test_empty_stdin_prints_nothing() {
        assert_eq!(run_str(&[], b""), "");
    }

    #[test]
    fn test_terminal_output_flushes_per_digest() {
        let args = Args::default();
        assert!(!flush_per_digest(&args, false));
        assert!(flush_per_digest(&args, true));

        let args = Args {
            unbuffered: true,
            ..Args::default()
        };
        assert!(flush_per_digest(&args, false));
    }

    #[test]
    fn test_broken_pipe_exits_with_failure() {
        let err = FnvError::Io(io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(exit_status(Err(err)), ExitCode::FAILURE);
        assert_eq!(exit_status(Ok(())), ExitCode::SUCCESS);
    }
}
