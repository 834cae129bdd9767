//! Console output formatter for decision records

use colored::Colorize;
use council_application::OngoingDecision;
use council_domain::{DecisionRecord, ValidatorId};
use serde::Serialize;

/// Formats committee output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a committee's decision record
    pub fn format_record(record: &DecisionRecord) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Committee {}", record.committee_id)));
        output.push('\n');

        output.push_str(&format!(
            "{} {} {}\n",
            "Proposal:".cyan().bold(),
            record.committee_type.label(),
            record.type_id
        ));
        output.push_str(&format!(
            "{} {}/{} {}\n",
            "Votes:".cyan().bold(),
            record.votes_cast,
            record.total_validators,
            record.vote_summary()
        ));

        output.push_str(&Self::section_header("Members"));
        let rows = record
            .validator_addresses
            .iter()
            .zip(&record.validator_votes)
            .zip(&record.validator_feedbacks);
        for ((address, vote), feedback) in rows {
            let vote = match vote {
                Some(true) => "approve".green().bold(),
                Some(false) => "reject".red().bold(),
                None => "pending".dimmed(),
            };
            match feedback.as_deref() {
                Some(text) if !text.is_empty() => {
                    output.push_str(&format!("  {}  {:<8} {}\n", address, vote, text))
                }
                _ => output.push_str(&format!("  {}  {}\n", address, vote)),
            }
        }

        output.push_str(&Self::section_header("Decision"));
        if record.is_completed {
            let verdict = if record.final_decision {
                "APPROVED".green().bold()
            } else {
                "REJECTED".red().bold()
            };
            output.push_str(&format!("{}\n", verdict));
            output.push_str(&format!(
                "{} {}\n",
                "Feedback:".cyan().bold(),
                record.concatenated_feedback
            ));
        } else {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "Voting in progress ({} remaining)",
                    record.total_validators - record.votes_cast
                )
                .yellow()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a member's open committees
    pub fn format_ongoing(user: &ValidatorId, entries: &[OngoingDecision]) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Ongoing decisions for".cyan().bold(),
            user.short()
        ));

        if entries.is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
            return output;
        }

        for entry in entries {
            let status = if entry.has_voted {
                "voted".green()
            } else {
                "awaiting vote".yellow()
            };
            let detail = match (&entry.proposal, &entry.error) {
                (Some(proposal), _) => proposal.summary(),
                (None, Some(error)) => format!("{}", error.red()),
                (None, None) => String::new(),
            };
            output.push_str(&format!(
                "  {} {} {} [{}/{}] {} {}\n",
                entry.committee_id.to_string().bold(),
                entry.type_label,
                entry.type_id,
                entry.votes_cast,
                entry.total_validators,
                status,
                detail
            ));
        }

        output
    }

    /// Format any serializable value as pretty JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
