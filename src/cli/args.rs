//! Command-line arguments of the `fnv` tool.

use std::ffi::OsString;
use std::io::{self, Write};

use colored::Colorize;

use crate::config::{HashConfig, HexCase, Variant, Width};
use crate::error::FnvError;

/// Parsed options of a hashing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// Algorithm selection, FNV-1a/64-bit unless overridden.
    pub config: HashConfig,
    /// Hex letter case of the output.
    pub case: HexCase,
    /// Hash all of standard input as one unit instead of line by line.
    pub hash_all_stdin: bool,
    /// Flush standard output after every hash.
    pub unbuffered: bool,
    /// Log debug messages to standard error.
    pub verbose: bool,
    /// Strings to hash instead of standard input.
    pub strings: Vec<OsString>,
}

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Hash the input described by the arguments.
    Run(Args),
    /// Print the long help message.
    Help,
    /// Print the version.
    Version,
}

pub(crate) fn short_usage() -> String {
    format!(
        "{} fnv [-a] [-h] [-u] [-X] [-1] [-32] [STRINGS]",
        "Usage:".bold()
    )
}

pub(crate) fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    const KEY: usize = 18;

    writeln!(out, "{}", short_usage())?;
    writeln!(
        out,
        "\n{}",
        "Hash each string in STRINGS with the Fowler-Noll-Vo (FNV) hash algorithm \
         and print the results, one hash per line.\n\
         Without STRINGS, hash each line of standard input individually, \
         or all of standard input at once with -a."
            .yellow()
    )?;

    writeln!(out, "\n{}", "Options:".bold())?;
    writeln!(
        out,
        "    {:KEY$}  Hash all of standard input rather than each line\n    {:KEY$}  (ignored if STRINGS are given).",
        "-a, --all".green(),
        ""
    )?;
    writeln!(
        out,
        "    {:KEY$}  Flush standard output after every hash\n    {:KEY$}  (always on when standard output is a terminal).",
        "-u, --unbuffered".green(),
        ""
    )?;
    writeln!(
        out,
        "    {:KEY$}  Print hashes with uppercase hex letters.",
        "-X, --upper".green()
    )?;
    writeln!(
        out,
        "    {:KEY$}  Use FNV-1 rather than FNV-1a.",
        "-1, --fnv1".green()
    )?;
    writeln!(
        out,
        "    {:KEY$}  Compute 32-bit hashes instead of 64-bit ones.",
        "-32, --32".green()
    )?;
    writeln!(
        out,
        "    {:KEY$}  Compute 64-bit hashes (default).",
        "-64, --64".green()
    )?;

    writeln!(out, "\n{}", "Other parameters:".bold())?;
    writeln!(out, "    {:KEY$}  Log debug messages to stderr.", "-v, --verbose".green())?;
    writeln!(out, "    {:KEY$}  Show this help message.", "-h, --help".green())?;
    writeln!(out, "    {:KEY$}  Show version.", "-V, --version".green())?;
    writeln!(
        out,
        "\nOption parsing stops at the first STRING; use {} before strings that start with '-'.",
        "--".green()
    )?;
    out.flush()
}

/// Reads the digit attached to `-3` or `-6` and returns the width it spells.
fn parse_width_suffix(
    parser: &mut lexopt::Parser,
    lead: char,
    width: Width,
) -> Result<Width, lexopt::Error> {
    let expected = if width == Width::W32 { "2" } else { "4" };
    match parser.optional_value() {
        Some(value) if value == expected => Ok(width),
        Some(value) => Err(lexopt::Error::from(format!(
            "unknown option '-{}{}' (did you mean -{}{}?)",
            lead,
            value.to_string_lossy(),
            lead,
            expected
        ))),
        None => Err(lexopt::Error::from(format!(
            "unknown option '-{}' (did you mean -{}{}?)",
            lead, lead, expected
        ))),
    }
}

/// Parses the arguments following the program name.
///
/// Options are accepted until the first non-option argument; that argument
/// and everything after it are strings to hash.
pub fn parse_args<I>(argv: I) -> Result<Invocation, FnvError>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    use lexopt::prelude::*;
    let mut args = Args::default();
    let mut parser = lexopt::Parser::from_args(argv);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('a') | Long("all") => args.hash_all_stdin = true,
            Short('u') | Long("unbuffered") => args.unbuffered = true,
            Short('X') | Long("upper") => args.case = HexCase::Upper,
            Short('1') | Long("fnv1") => args.config = args.config.with_variant(Variant::Fnv1),
            Long("fnv1a") => args.config = args.config.with_variant(Variant::Fnv1a),
            Short('3') => {
                let width = parse_width_suffix(&mut parser, '3', Width::W32)?;
                args.config = args.config.with_width(width);
            }
            Short('6') => {
                let width = parse_width_suffix(&mut parser, '6', Width::W64)?;
                args.config = args.config.with_width(width);
            }
            Long("32") => args.config = args.config.with_width(Width::W32),
            Long("64") => args.config = args.config.with_width(Width::W64),
            Short('v') | Long("verbose") => args.verbose = true,

            Short('V') | Long("version") => return Ok(Invocation::Version),
            Short('h') | Long("help") => return Ok(Invocation::Help),
            Value(first) => {
                args.strings.push(first);
                args.strings.extend(parser.raw_args()?);
                break;
            }
            _ => Err(arg.unexpected())?,
        }
    }
    Ok(Invocation::Run(args))
}
