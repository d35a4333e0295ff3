//! calc - drive the calculator engine from the command line

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use libcalc::config::OutputFormat;
use libcalc::logging::LoggingConfig;
use libcalc::{parse_token, CalcError, CalculatorState, Config, Session};

#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(version, about = "Press calculator keys and print the display")]
#[command(long_about = r#"Press calculator keys and print the display.

Each argument is a button label or named key (C, CE, sqrt, x^y, Enter,
Escape, Backspace) or a run of single-key presses (12.5*4=). With no
arguments, keys are read from stdin one line at a time and the display is
printed after each line.

EXAMPLES:
    calc 5+3=
    calc 16 sqrt
    calc 2 x^y 10 =
    echo "15/3=" | calc
    calc --format json 5/0=

KEYS:
    0-9 .          digits and decimal point
    + - * / %      add, subtract, multiply, divide, percentage
    = Enter        calculate
    Escape C       clear everything
    CE             clear entry
    Backspace      delete last character
    √ sqrt  x² sq  x^y ^  x! fact  mod

EXIT CODES:
    0 - Success
    1 - The final display shows an error, or the config could not be loaded
    3 - Unknown key
"#)]
struct Cli {
    /// Keys to press, in order (reads stdin if none are given)
    keys: Vec<String>,

    /// Output format (text or json)
    #[arg(short, long, value_parser = ["text", "json"])]
    format: Option<String>,

    /// Print the display after every action
    #[arg(short, long)]
    trace: bool,

    /// Path to config file (overrides CALC_CONFIG)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            libcalc::logging::init_default();
            tracing::error!(error = %e, "failed to load config");
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    };
    LoggingConfig::from_section(&config.logging, cli.verbose).init();

    match run(&cli, &config) {
        Ok(state) if state.error.is_some() => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<CalcError>()
                .map(CalcError::exit_code)
                .unwrap_or(1);
            std::process::exit(code);
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> libcalc::Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn run(cli: &Cli, config: &Config) -> Result<CalculatorState> {
    let format = match cli.format.as_deref() {
        Some(flag) => flag.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
        None => config.output.format,
    };
    let trace = cli.trace || config.output.trace;

    let mut session = Session::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.keys.is_empty() {
        press_tokens(&mut session, cli.keys.iter().map(String::as_str), trace, format, &mut out)?;
        if !trace {
            render(session.state(), format, &mut out)?;
        }
        return Ok(session.state().clone());
    }

    tracing::debug!("reading keys from stdin");
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        press_tokens(&mut session, line.split_whitespace(), trace, format, &mut out)?;
        if !trace {
            render(session.state(), format, &mut out)?;
        }
    }
    Ok(session.state().clone())
}

fn press_tokens<'a, W: Write>(
    session: &mut Session,
    tokens: impl Iterator<Item = &'a str>,
    trace: bool,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    for token in tokens {
        for action in parse_token(token)? {
            let state = session.dispatch(action);
            if trace {
                render(state, format, out)?;
            }
        }
    }
    Ok(())
}

/// Print the readout, and the error as an alert on stderr
fn render<W: Write>(state: &CalculatorState, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", state.readout())?;
            if let Some(error) = &state.error {
                eprintln!("error: {}", error);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(state).context("Failed to serialize state")?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush()?;
    Ok(())
}
