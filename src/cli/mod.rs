// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On success returns the parsed `CliArgs`. On failure prints clap's
/// message and exits the process: usage errors (wrong argument count,
/// unknown flags) exit with code 1, while `--help` and `--version` exit
/// with code 0.
pub fn parse_args() -> CliArgs {
    match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}
