//! Output of `cargo run --example parse -- --input a.txt -v --help`:
//! ```text
//! usage: myapp --input VALUE [--output VALUE] [--verbose] [--help]
//! Copies a file somewhere else.
//! Required:
//!   --input, -i: file to read
//! Optional:
//!   --output, -o: file to write, stdout if absent
//!   --verbose, -v: print more
//!   --help, -h: prints this help message
//! ```
//!
//! Required options are checked before `--help` is looked at, so `--input` must
//! be given for help to show.
//!
//! Set `RUST_LOG=flagbind=trace` to see how each argument is matched.

use std::process::ExitCode;

use flagbind::Options;
use tracing_subscriber::EnvFilter;

#[derive(Options, Default, Debug)]
#[options(name = "myapp", about = "Copies a file somewhere else.")]
struct MyOptions {
    #[opt("--input", "-i", required, description = "file to read")]
    input: String,
    /// file to write, stdout if absent
    #[opt("--output", "-o")]
    output: Option<String>,
    #[opt("--verbose", "-v", description = "print more")]
    verbose: bool,
    #[opt("--help", "-h", description = "prints this help message")]
    help: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = match MyOptions::parse_env() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1));
        }
    };
    if options.help {
        match MyOptions::help() {
            Ok(help) => eprint!("{help}"),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }
    println!("Parsed arguments: {:?}", options);
    ExitCode::SUCCESS
}
