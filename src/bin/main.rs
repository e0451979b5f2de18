use clap::Parser;
use crossterm::style::Stylize;
use eyre::{Context, Result};
use limerick_core::core::detector::PoemAnalysis;
use limerick_core::{persistence, LimerickDetector};
use log::info;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Limerick detector. Given a poem, indicate whether that poem is a
/// limerick or not.
#[derive(Parser, Debug)]
#[command(name = "limerick")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Debug mode: print the per-line analysis report to stderr
    #[arg(long)]
    debug: bool,

    /// See --debug
    #[arg(long = "no-debug", overrides_with = "debug")]
    no_debug: bool,

    /// Input file (defaults to stdin)
    #[arg(short, long)]
    infile: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Pronunciation dictionary in CMUdict format
    #[arg(short, long, env = "LIMERICK_DICT", default_value = "cmudict.dict")]
    dict: PathBuf,
}

impl Cli {
    fn debug_enabled(&self) -> bool {
        self.debug && !self.no_debug
    }
}

fn setup_logging(debug: bool) {
    let default = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default);
    builder.parse_default_env();
    builder.init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => {
            fs::read_to_string(p).context(format!("failed to read input file {}", p.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn write_output(path: Option<&Path>, text: &str, verdict: bool) -> Result<()> {
    let body = format!("{}\n-----------\n{}\n", text.trim(), verdict);
    match path {
        Some(p) => {
            fs::write(p, body).context(format!("failed to write output file {}", p.display()))
        }
        None => {
            io::stdout()
                .write_all(body.as_bytes())
                .context("failed to write stdout")?;
            Ok(())
        }
    }
}

fn print_report(analysis: &PoemAnalysis) -> Result<()> {
    let verdict = if analysis.is_limerick {
        "limerick".green()
    } else {
        "not a limerick".red()
    };
    eprintln!("{} {}", "verdict:".bold(), verdict);
    let report = serde_json::to_string_pretty(analysis).context("failed to render report")?;
    eprintln!("{}", "analysis:".bold());
    eprintln!("{report}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug_enabled());

    let dictionary = persistence::load(&cli.dict).context(format!(
        "failed to load pronunciation dictionary {}",
        cli.dict.display()
    ))?;
    info!(
        "dictionary ready: {} words from {}",
        dictionary.len(),
        cli.dict.display()
    );

    let text = read_input(cli.infile.as_deref())?;
    let detector = LimerickDetector::new(dictionary);
    let analysis = detector.analyze(&text);

    write_output(cli.outfile.as_deref(), &text, analysis.is_limerick)?;
    if cli.debug_enabled() {
        print_report(&analysis)?;
    }
    Ok(())
}
