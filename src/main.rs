//! The `taoquiz` binary.

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::debug;

use taoquiz::options::{Parse, Render};
use taoquiz::{
    expand_defs, format_document, parse_quiz, process_questions, render_math, Options, Plugins,
};

const STDIO: &str = "-";

#[derive(Debug, Parser)]
#[command(about, author, version)]
#[command(
    after_help = "By default, taoquiz will attempt to read command-line options from a config file specified by --config-file.  This behaviour can be disabled by passing --config-file none."
)]
struct Cli {
    /// The quiz to convert; or '-' to read standard input
    #[arg(value_name = "INPUT")]
    input: String,

    /// Where to write the page; or '-' for standard output [default: INPUT
    /// with its extension replaced by .html, or standard output when reading
    /// standard input]
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// Path to config file containing command-line arguments, or 'none'
    #[arg(short, long, value_name = "PATH", default_value = get_default_config_path())]
    config_file: String,

    /// Process math even if the quiz doesn't set mathjax
    #[arg(long, conflicts_with = "no_math")]
    math: bool,

    /// Skip math processing even if the quiz sets mathjax
    #[arg(long)]
    no_math: bool,

    /// Inline this stylesheet instead of the bundled one
    #[arg(long, value_name = "FILE")]
    stylesheet: Option<PathBuf>,

    /// Class for the spans that keep math attached to adjacent text
    #[arg(long, value_name = "CLASS")]
    sticky_class: Option<String>,

    /// Don't repeat the quiz title as a heading on the page
    #[arg(long)]
    hide_heading: bool,

    /// Expand [defs] blocks before parsing
    #[arg(long)]
    expand_defs: bool,

    /// Only expand [defs] blocks, writing the resulting quiz source to standard output
    #[arg(long, conflicts_with_all = ["output", "math", "no_math", "stylesheet"])]
    defs_only: bool,

    /// Increase logging verbosity; repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> Result<Options, Box<dyn Error>> {
        let math = match (self.math, self.no_math) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        let stylesheet = match self.stylesheet {
            Some(ref path) => Some(fs::read_to_string(path)?),
            None => None,
        };

        Ok(Options {
            parse: Parse {
                math,
                expand_defs: self.expand_defs,
            },
            render: Render {
                stylesheet,
                sticky_class: self.sticky_class.clone(),
                hide_heading: self.hide_heading,
            },
        })
    }

    fn destination(&self) -> Destination {
        match self.output.as_deref() {
            Some(STDIO) => Destination::Stdout,
            Some(path) => Destination::File(PathBuf::from(path)),
            None if self.input == STDIO => Destination::Stdout,
            None => Destination::File(change_extension(Path::new(&self.input), "html")),
        }
    }
}

enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Prints a progress message where it won't end up inside the page.
    fn status(&self, message: &str) {
        match self {
            Destination::Stdout => eprintln!("{}", message),
            Destination::File(_) => println!("{}", message),
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("taoquiz: {}", err);
            eprintln!("Usage: taoquiz <INPUT> [OUTPUT]; see --help for options");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = parse_cli()?;
    init_logging(cli.verbose);
    debug!("arguments: {:?}", cli);

    let input = read_input(&cli.input)?;

    if cli.defs_only {
        io::stdout().write_all(expand_defs(&input)?.as_bytes())?;
        return Ok(());
    }

    let options = cli.options()?;
    let destination = cli.destination();

    let mut quiz = parse_quiz(&input, &options)?;
    process_questions(&mut quiz, &options);

    let mut page = format_document(&quiz, &options);
    if quiz.math_enabled(&options) {
        destination.status("Rendering math.");
        page = render_math(&page, &Plugins::default());
    }

    match destination {
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(page.as_bytes())?;
            lock.flush()?;
            destination.status("Wrote quiz to standard output.");
        }
        Destination::File(ref path) => {
            fs::write(path, page)?;
            destination.status(&format!("Wrote quiz to {}.", path.display()));
        }
    }

    Ok(())
}

/// Parses the command line, with any arguments from the config file placed
/// before the real ones.
fn parse_cli() -> Result<Cli, Box<dyn Error>> {
    let cli = Cli::parse();
    if cli.config_file == "none" {
        return Ok(cli);
    }

    let config_args = match fs::read_to_string(&cli.config_file) {
        Ok(config_args) => config_args,
        Err(_) => return Ok(cli),
    };

    let mut args = std::env::args_os().collect::<Vec<_>>();
    for s in shell_words::split(&config_args)?.into_iter().rev() {
        args.insert(1, s.into());
    }
    Ok(Cli::parse_from(args))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_input(input: &str) -> io::Result<String> {
    if input == STDIO {
        let mut s = String::with_capacity(4096);
        io::stdin().read_to_string(&mut s)?;
        Ok(s)
    } else {
        fs::read_to_string(input)
    }
}

fn change_extension(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn get_default_config_path() -> String {
    if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("taoquiz") {
        if let Some(path_str) = xdg_dirs.get_config_file("config").to_str() {
            return path_str.into();
        }
    }

    "none".into()
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn get_default_config_path() -> String {
    "none".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_replaces_extension() {
        assert_eq!(
            change_extension(Path::new("quizzes/week1.quiz"), "html"),
            PathBuf::from("quizzes/week1.html")
        );
        assert_eq!(
            change_extension(Path::new("week1"), "html"),
            PathBuf::from("week1.html")
        );
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
