pub mod chat;
pub mod compare;
pub mod config;
pub mod plans;
pub mod quiz;
pub mod recommend;
pub mod testimonials;

use std::io;

use serde::Serialize;
use subscripter_core::errors::{ApplicationError, DomainError};
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub fn io_failure(command: &str, error: io::Error) -> Self {
        Self::failure(command, "io", error.to_string(), 1)
    }

    pub fn text(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    /// Failure envelope for a rejected domain operation. Input errors exit
    /// with 2, anything else with 1.
    pub fn domain_failure(command: &str, error: DomainError) -> Self {
        let correlation_id = format!("cli-{}", Uuid::new_v4());
        let message = error.to_string();
        let error_class = match error {
            DomainError::IncompleteQuiz { .. } => "incomplete_quiz",
            other => ApplicationError::from(other)
                .into_interface(correlation_id.as_str())
                .error_class(),
        };
        let exit_code = if error_class == "internal" { 1 } else { 2 };

        warn!(
            event_name = "cli.command.rejected",
            command,
            error_class,
            correlation_id = %correlation_id,
            error = %message,
            "command rejected"
        );

        Self::failure(command, error_class, message, exit_code)
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            escape_json(&error.to_string())
        )
    })
}

/// Pretty JSON for a report, or a serialization failure envelope.
pub(crate) fn render_json<T: Serialize>(command: &str, report: &T) -> CommandResult {
    match serde_json::to_string_pretty(report) {
        Ok(output) => CommandResult::text(output),
        Err(error) => CommandResult::failure(command, "serialization", error.to_string(), 1),
    }
}

fn escape_json(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}
