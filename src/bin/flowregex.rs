//! A thin CLI over the [`flowregex::Matcher`] façade. Not part of the
//! matching core; just enough to run a pattern against a text by hand.

use std::process::ExitCode;

use clap::Parser;
use flowregex::{MatchMaskTable, Matcher};

/// Print the ascending set of end positions where PATTERN matches in TEXT.
#[derive(Parser)]
#[command(name = "flowregex", about = "Bit-parallel regex matcher")]
struct Cli {
    /// Emit per-transformer trace logging.
    #[arg(short = 'd', long)]
    debug: bool,

    /// Regex pattern to compile.
    pattern: String,

    /// Text to search.
    text: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.debug { log::LevelFilter::Trace } else { log::LevelFilter::Warn };
    env_logger::Builder::new().filter_level(level).init();

    let matcher = match Matcher::compile(&cli.pattern) {
        Ok(matcher) => matcher,
        Err(err) => {
            eprintln!("flowregex: {err}");
            return ExitCode::FAILURE;
        }
    };

    let text = cli.text.as_bytes();
    let alphabet: Vec<u8> = text.iter().copied().collect();
    let accel = MatchMaskTable::build(text, &alphabet);

    match matcher.find_ends_accelerated(text, Some(&accel)) {
        Ok(positions) => {
            let rendered: Vec<String> = positions.iter().map(usize::to_string).collect();
            println!("[{}]", rendered.join(", "));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("flowregex: {err}");
            ExitCode::FAILURE
        }
    }
}
