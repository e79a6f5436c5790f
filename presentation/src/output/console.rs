//! Console output formatter for game summaries

use colored::Colorize;
use wordcraft_application::{GameEnd, GameSummary};
use wordcraft_domain::{ConfigIssue, Severity};

/// Formats game results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the end-of-game summary
    pub fn format_summary(summary: &GameSummary) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Wordcraft"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Game ended:".cyan().bold(),
            Self::end_reason(summary.end)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Rounds played:".cyan().bold(),
            summary.rounds_played
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Vocabulary size:".cyan().bold(),
            summary.vocabulary_size
        ));

        if summary.discovered.is_empty() {
            output.push_str(&format!("\n{}\n", "No new concepts discovered.".dimmed()));
        } else {
            output.push_str(&format!(
                "\n{} ({})\n",
                "Discovered:".green().bold(),
                summary.discovered.len()
            ));
            for concept in &summary.discovered {
                output.push_str(&format!("  * {}\n", concept));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format configuration issues, errors first
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        let mut sorted: Vec<&ConfigIssue> = issues.iter().collect();
        sorted.sort_by_key(|issue| !issue.is_error());

        sorted
            .into_iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
                Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn end_reason(end: GameEnd) -> &'static str {
        match end {
            GameEnd::Cancelled => "selection cancelled",
            GameEnd::RoundLimit => "round limit reached",
            GameEnd::Stopped => "interrupted",
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^40}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(40).cyan())
    }
}
