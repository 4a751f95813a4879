//! markdown2html CLI - convert one Markdown file to an HTML fragment

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use markdown2html::Error;

const USAGE: &str = "Usage: ./markdown2html README.md README.html";

#[derive(Parser, Debug)]
#[command(name = "markdown2html", version, about = "Convert a Markdown file to HTML")]
struct Cli {
    /// Markdown file to read
    input: PathBuf,

    /// HTML file to write (overwritten if it exists)
    output: PathBuf,

    /// Anything after the two paths is accepted and ignored
    #[arg(hide = true)]
    ignored: Vec<PathBuf>,
}

/// Flags clap answers itself; they never consume a path.
const BUILTIN_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// Drop every hyphen-prefixed argument except the builtin ones.
///
/// Flags are not part of the interface, so wherever they appear they are
/// ignored and the remaining arguments are read as paths.
fn retain_paths<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let program = args.next();

    program
        .into_iter()
        .chain(args.filter(|arg| {
            let is_flag = arg.as_encoded_bytes().starts_with(b"-");
            let is_builtin = arg.to_str().is_some_and(|s| BUILTIN_FLAGS.contains(&s));
            if is_flag && !is_builtin {
                log::debug!("ignoring flag {}", arg.to_string_lossy());
            }
            !is_flag || is_builtin
        }))
        .collect()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse_from(retain_paths(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            log::debug!("argument error: {err}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if !cli.ignored.is_empty() {
        log::debug!("ignoring extra arguments: {:?}", cli.ignored);
    }

    match markdown2html::convert_file(&cli.input, &cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ Error::MissingInput(_)) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            let err = anyhow::Error::from(err).context(format!(
                "converting {} to {}",
                cli.input.display(),
                cli.output.display()
            ));
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
