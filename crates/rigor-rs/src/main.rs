//! Run the staged prompt pipeline (Refine → Teach/Ask → Answer → Verify)
//! against the Groq API and print each stage's output.
//!
//! Reads the API key from the `GROQ_API_KEY` environment variable (a local
//! `.env` file works too).
//!
//! # Examples
//!
//! ```sh
//! # Interactive: prompts for the request and shot mode
//! rigor
//!
//! # One-shot invocation
//! rigor --request "Design a caching layer for an API" --mode zero
//!
//! # Pipe a request in, skip the verifier pass
//! cat request.txt | rigor --stdin --no-verify
//!
//! # Print the fill-in-the-blank request scaffold
//! rigor --show-template
//! ```

use std::io::{self, Read};
use std::process;

use clap::Parser;
use rigor_rs::prelude::*;
use rigor_rs::prompt::FILL_IN_THE_BLANK;
use rigor_rs::ui::{self, ConsoleSource, RequestSource};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Staged prompt pipeline for production-grade engineering answers.
///
/// Reads the API key from the GROQ_API_KEY environment variable.
#[derive(Parser)]
#[command(name = "rigor")]
struct Cli {
    /// Raw request to run the pipeline on. Without this (or --stdin),
    /// the request is prompted for interactively.
    #[arg(long)]
    request: Option<String>,

    /// Read the raw request from stdin.
    #[arg(long)]
    stdin: bool,

    /// Shot mode for the answer stage (zero, one, few).
    #[arg(long)]
    mode: Option<ShotMode>,

    /// Model to use for every stage.
    #[arg(long)]
    model: Option<String>,

    /// Skip the refine stage (answer the raw request as-is).
    #[arg(long)]
    no_refine: bool,

    /// Skip the advisory teach-and-ask stage.
    #[arg(long)]
    no_teach_ask: bool,

    /// Leave the comparison-table instruction out of the answer prompt.
    #[arg(long)]
    no_table: bool,

    /// Skip the verifier pass on the answer.
    #[arg(long)]
    no_verify: bool,

    /// Print the fill-in-the-blank request scaffold and exit.
    #[arg(long)]
    show_template: bool,
}

fn read_stdin_content() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim().to_string())
}

/// Resolve the raw request and shot mode from flags, stdin, or the
/// interactive console.
fn gather_input(cli: &Cli) -> io::Result<(String, ShotMode)> {
    if cli.request.is_none() && !cli.stdin {
        println!("\nGroq Prompt Runner (Refine → Teach/Ask → Answer → Verify)");
        println!("{}", "-".repeat(60));
        let mut source = ConsoleSource;
        let raw = source.raw_request()?;
        let mode = match cli.mode {
            Some(mode) => mode,
            None => source.shot_mode()?,
        };
        return Ok((raw, mode));
    }

    let stdin_text = if cli.stdin {
        Some(read_stdin_content()?)
    } else {
        None
    };
    let raw = match (&cli.request, stdin_text) {
        (Some(request), Some(piped)) => format!("{request}\n\n{piped}"),
        (Some(request), None) => request.clone(),
        (None, Some(piped)) => piped,
        (None, None) => unreachable!("guarded by the interactive branch"),
    };
    Ok((raw, cli.mode.unwrap_or_default()))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let cli = Cli::parse();

    if cli.show_template {
        println!("{FILL_IN_THE_BLANK}");
        return;
    }

    // Credential resolution is a startup precondition, reported apart
    // from any pipeline failure.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    let client = match GroqClient::new(config.api_key) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: failed to create API client: {e}");
            process::exit(1);
        }
    };

    let (raw_request, mode) = match gather_input(&cli) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: failed to read request: {e}");
            process::exit(1);
        }
    };

    let pipeline_config = PipelineConfig::default()
        .with_refine(!cli.no_refine)
        .with_teach_ask(!cli.no_teach_ask)
        .with_include_table(!cli.no_table)
        .with_verify(!cli.no_verify)
        .with_mode(mode)
        .with_model(cli.model.unwrap_or(config.model));

    match Pipeline::new(&client, pipeline_config).run(&raw_request).await {
        Ok(run) => {
            ui::print_report(&run);
            println!("Done.");
        }
        Err(failure) => {
            // Print whatever completed before the failing stage.
            ui::print_report(&failure.partial);
            eprintln!("Error: {failure}");
            process::exit(1);
        }
    }
}
