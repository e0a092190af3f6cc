//! Console input and report rendering.
//!
//! Interactive input is behind the [`RequestSource`] trait so the binary's
//! terminal prompts stay out of the core: the pipeline is driven by
//! whatever source the caller injects, and tests supply fixed strings
//! instead of a terminal.

use std::io::{self, BufRead, Write};

use crate::pipeline::PipelineRun;
use crate::prompt::ShotMode;

/// Fallback request offered when the user submits an empty line.
pub const EXAMPLE_REQUEST: &str = "Build a RAG chatbot for my college ERP. It should answer student questions and cite sources.";

const RULER_WIDTH: usize = 72;

// ── Request source ─────────────────────────────────────────────────

/// Where the raw request and shot mode come from.
///
/// The binary uses [`ConsoleSource`]; tests implement this with fixed
/// values so nothing drives a terminal.
pub trait RequestSource {
    /// The raw request text to run the pipeline on.
    fn raw_request(&mut self) -> io::Result<String>;
    /// The shot mode for the Answer stage.
    fn shot_mode(&mut self) -> io::Result<ShotMode>;
}

/// Interactive terminal prompts: paste a request (Enter for the built-in
/// example), then pick a mode by number.
pub struct ConsoleSource;

impl ConsoleSource {
    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl RequestSource for ConsoleSource {
    fn raw_request(&mut self) -> io::Result<String> {
        print!("Paste your request (or press Enter for example): ");
        io::stdout().flush()?;
        let line = self.read_line()?;
        if line.is_empty() {
            Ok(EXAMPLE_REQUEST.to_string())
        } else {
            Ok(line)
        }
    }

    fn shot_mode(&mut self) -> io::Result<ShotMode> {
        println!("\nChoose prompting mode:");
        println!("  1) zero-shot (fast)");
        println!("  2) one-shot (format imitation)");
        println!("  3) few-shot (strong steering)");
        print!("Enter 1/2/3 (default 3): ");
        io::stdout().flush()?;
        Ok(parse_menu_choice(&self.read_line()?))
    }
}

/// Map a menu answer to a shot mode. Unrecognized input falls back to
/// few-shot, matching the menu's stated default.
pub fn parse_menu_choice(choice: &str) -> ShotMode {
    match choice.trim() {
        "1" => ShotMode::Zero,
        "2" => ShotMode::One,
        "" | "3" => ShotMode::Few,
        other => ShotMode::from_input(other),
    }
}

// ── Report rendering ───────────────────────────────────────────────

/// Render one titled section under a 72-column ruler.
pub fn section(title: &str, content: &str) -> String {
    let ruler = "=".repeat(RULER_WIDTH);
    format!("\n{ruler}\n{title}\n{ruler}\n{}\n", content.trim())
}

/// Print every populated stage output as a titled section, in pipeline
/// order.
pub fn print_report(run: &PipelineRun) {
    for (title, content) in run.sections() {
        print!("{}", section(title, content));
    }
}
