//! `fnv` - print FNV hashes of arguments or standard input.

use std::process::ExitCode;

fn main() -> ExitCode {
    fnvrs::cli::main(std::env::args_os().skip(1))
}
