//! Minimal pipeline example — from zero to a staged answer.
//!
//! Runs the full four-stage pipeline on a fixed request and prints each
//! stage's output as a titled section.
//!
//! # Usage
//!
//! ```bash
//! GROQ_API_KEY=gsk-... cargo run --example run_pipeline
//! ```

use rigor_rs::prelude::*;
use rigor_rs::ui;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 1. Load the credential and build the client.
    let config = Config::from_env()?;
    let client = GroqClient::new(config.api_key)?;

    // 2. Configure the run (every stage defaults to enabled).
    let pipeline_config = PipelineConfig::default()
        .with_mode(ShotMode::Few)
        .with_model(config.model);

    // 3. Run the staged sequence.
    let run = Pipeline::new(&client, pipeline_config)
        .run("Design a caching layer for an API")
        .await
        .map_err(|failure| Error::Completion(failure.source))?;

    // 4. Print the report.
    ui::print_report(&run);
    Ok(())
}
