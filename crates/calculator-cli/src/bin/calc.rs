/// Calculator CLI

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use calculator_cli::{CalcOptions, Session};

#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(about = "Accumulator calculator - press keys from the command line or stdin")]
#[command(version)]
struct Args {
    /// Keys to press, e.g. `3 + 4 x 5 =`; reads stdin when omitted
    #[arg(value_name = "KEYS", allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Program file to replay before pressing any key
    #[arg(short, long, value_name = "FILE")]
    restore: Option<PathBuf>,

    /// Program file to write when done
    #[arg(short, long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Print the program log as JSON when done
    #[arg(short, long)]
    program: bool,

    /// Show the expression description alongside the display
    #[arg(short, long)]
    verbose: bool,
}

fn print_status(session: &Session) {
    for line in session.status() {
        println!("{}", line);
    }
}

fn run_interactive(session: &mut Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_status(session);
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim() == "quit" {
            break;
        }
        if let Err(e) = session.press_all(line.split_whitespace()) {
            tracing::warn!("{}", e);
            eprintln!("{}", e);
        }
        print_status(session);
        stdout.flush()?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut options = CalcOptions::new()
        .print_program(args.program)
        .verbose(args.verbose);
    if let Some(path) = args.restore {
        options = options.restore(path);
    }
    if let Some(path) = args.save {
        options = options.save(path);
    }

    let mut session = Session::open(options).context("failed to start session")?;

    if args.keys.is_empty() {
        run_interactive(&mut session)?;
    } else {
        session
            .press_all(args.keys.iter().map(String::as_str))
            .context("failed to press keys")?;
        print_status(&session);
    }

    if let Some(json) = session.finish().context("failed to finish session")? {
        println!("{}", json);
    }
    Ok(())
}
