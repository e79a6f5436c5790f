//! Progress reporting for game rounds

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use wordcraft_application::{GatewayError, RoundObserver};
use wordcraft_domain::{Concept, Discovery};

/// Spinner while the generator runs, colored line per discovery
pub struct RoundReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl RoundReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut guard| guard.take())
    }
}

impl Default for RoundReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// One-line description of a discovery
fn discovery_line(round: usize, discovery: &Discovery) -> String {
    match discovery {
        Discovery::New(concept) => format!(
            "{} {} {}",
            format!("[{}]", round).dimmed(),
            "+".green().bold(),
            concept.as_str().green().bold()
        ),
        Discovery::Known(concept) => format!(
            "{} {} {} (already known)",
            format!("[{}]", round).dimmed(),
            "=".yellow(),
            concept
        ),
    }
}

fn skipped_line(round: usize, error: &GatewayError) -> String {
    format!(
        "{} {} combination failed: {}",
        format!("[{}]", round).dimmed(),
        "x".red(),
        error
    )
}

impl RoundObserver for RoundReporter {
    fn on_combine_start(&self, first: &Concept, second: &Concept) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Combining {} + {}...", first, second));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_combine_end(&self, _success: bool) {
        if let Some(pb) = self.take_spinner() {
            pb.finish_and_clear();
        }
    }

    fn on_discovery(&self, round: usize, discovery: &Discovery) {
        println!("{}", discovery_line(round, discovery));
    }

    fn on_round_skipped(&self, round: usize, error: &GatewayError) {
        eprintln!("{}", skipped_line(round, error));
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl RoundObserver for SimpleProgress {
    fn on_combine_start(&self, first: &Concept, second: &Concept) {
        println!("{} Combining {} + {}", "->".cyan(), first, second);
    }

    fn on_discovery(&self, round: usize, discovery: &Discovery) {
        println!("{}", discovery_line(round, discovery));
    }

    fn on_round_skipped(&self, round: usize, error: &GatewayError) {
        eprintln!("{}", skipped_line(round, error));
    }
}
