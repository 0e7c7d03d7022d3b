use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_LOG_PATH: &str = "pfirewall.log";
pub const DEFAULT_REPORT_PATH: &str = "report.txt";

const LOG_PROMPT: &str = "Enter path to firewall log file: ";
const REPORT_PROMPT: &str = "Enter path to save the output report (e.g., report.txt): ";

/// Summarise a Windows Defender Firewall log
#[derive(Parser, Debug, Default)]
#[command(name = "fwlog", version, about)]
pub struct Cli {
    /// Firewall log to analyse
    #[arg(short, long, env = "FWLOG_LOG_PATH", value_name = "LOG_FILE")]
    pub log: Option<PathBuf>,

    /// Where to save the text report
    #[arg(short, long, env = "FWLOG_REPORT_PATH", value_name = "REPORT_FILE")]
    pub output: Option<PathBuf>,

    /// Also write the summary as JSON
    #[arg(short, long, env = "FWLOG_JSON_PATH", value_name = "JSON_FILE")]
    pub json: Option<PathBuf>,

    /// Never prompt; fall back to defaults for missing paths
    #[arg(long)]
    pub no_prompt: bool,

    /// Don't print the report to stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_path: PathBuf,
    pub report_path: PathBuf,
    pub json_path: Option<PathBuf>,
    pub quiet: bool,
}

/// Loads `.env` (if any) and parses the command line.
pub fn load_cli() -> Cli {
    dotenv::dotenv().ok();
    Cli::parse()
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    output
        .write_all(question.as_bytes())
        .and_then(|_| output.flush())
        .map_err(Error::Prompt)?;
    let mut answer = String::new();
    input.read_line(&mut answer).map_err(Error::Prompt)?;
    Ok(answer.trim().to_string())
}

fn resolve_path<R: BufRead, W: Write>(
    given: Option<PathBuf>,
    interactive: Option<(&mut R, &mut W)>,
    question: &str,
    default: &str,
) -> Result<PathBuf> {
    if let Some(path) = given {
        return Ok(path);
    }
    let answer = match interactive {
        Some((input, output)) => prompt(input, output, question)?,
        None => String::new(),
    };
    if answer.is_empty() {
        Ok(PathBuf::from(default))
    } else {
        Ok(PathBuf::from(answer))
    }
}

impl Settings {
    /// Resolves paths: flag or environment first, then a prompt when `interactive`,
    /// then the defaults. An empty answer picks the default.
    pub fn resolve_with<R: BufRead, W: Write>(
        cli: Cli,
        interactive: bool,
        input: &mut R,
        output: &mut W,
    ) -> Result<Self> {
        let ask = interactive && !cli.no_prompt;

        let log_path = resolve_path(
            cli.log,
            ask.then_some((&mut *input, &mut *output)),
            LOG_PROMPT,
            DEFAULT_LOG_PATH,
        )?;
        let report_path = resolve_path(
            cli.output,
            ask.then_some((&mut *input, &mut *output)),
            REPORT_PROMPT,
            DEFAULT_REPORT_PATH,
        )?;

        let settings = Settings {
            log_path,
            report_path,
            json_path: cli.json,
            quiet: cli.quiet,
        };
        debug!(?settings, "resolved settings");
        Ok(settings)
    }

    /// Like `resolve_with`, prompting on the real terminal when stdin is one.
    pub fn resolve(cli: Cli) -> Result<Self> {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        Self::resolve_with(cli, interactive, &mut stdin.lock(), &mut io::stdout())
    }
}
