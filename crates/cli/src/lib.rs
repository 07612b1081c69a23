pub mod commands;

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use subscripter_core::config::{AppConfig, ConfigError, LoadOptions, LogFormat};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(
    name = "subscripter",
    about = "Subscripter pricing page CLI",
    long_about = "Browse plans, compare features, take the plan quiz, and chat with the pricing assistant.",
    after_help = "Examples:\n  subscripter plans --yearly\n  subscripter compare --category security --differences\n  subscripter recommend \"Just me\" \"Basic needs\" \"Not important\""
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List plan cards with prices for the selected billing cycle")]
    Plans {
        #[arg(long, help = "Show yearly prices and savings")]
        yearly: bool,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Show the feature comparison table")]
    Compare {
        #[arg(long, help = "Only show one category: all|basic|analytics|security|support")]
        category: Option<String>,
        #[arg(long, help = "Hide features that are the same on every plan")]
        differences: bool,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Recommend a plan from three quiz answers")]
    Recommend {
        #[arg(help = "Team size, primary goal and support importance, in that order")]
        answers: Vec<String>,
    },
    #[command(about = "Take the plan quiz interactively")]
    Quiz,
    #[command(about = "Chat with the pricing assistant")]
    Chat {
        #[arg(long, help = "Seed the reply picker for reproducible conversations")]
        seed: Option<u64>,
    },
    #[command(about = "Show customer testimonials")]
    Testimonials,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let loaded = AppConfig::load(LoadOptions::default());
    if let Ok(config) = &loaded {
        init_logging(config);
    }

    let result = execute(cli.command, loaded);
    if !result.output.is_empty() {
        println!("{}", result.output);
    }
    ExitCode::from(result.exit_code)
}

/// `config` reports its own load failure; every other command needs a valid config.
fn execute(command: Command, loaded: Result<AppConfig, ConfigError>) -> commands::CommandResult {
    match (command, loaded) {
        (Command::Config, loaded) => commands::config::report(loaded),
        (_, Err(error)) => commands::CommandResult::failure(
            "config",
            "config_validation",
            error.to_string(),
            2,
        ),
        (Command::Plans { yearly, json }, Ok(config)) => {
            commands::plans::run(&config, yearly, json)
        }
        (Command::Compare { category, differences, json }, Ok(_)) => {
            commands::compare::run(category.as_deref(), differences, json)
        }
        (Command::Recommend { answers }, Ok(_)) => commands::recommend::run(&answers),
        (Command::Quiz, Ok(_)) => commands::quiz::run(),
        (Command::Chat { seed }, Ok(config)) => commands::chat::run(&config, seed),
        (Command::Testimonials, Ok(_)) => commands::testimonials::run(),
    }
}

/// Logs go to stderr so stdout stays parseable.
fn init_logging(config: &AppConfig) {
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(io::stderr);

    match config.logging.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use serde_json::Value;
    use subscripter_core::config::{AppConfig, ConfigError};

    use super::{execute, Cli};

    fn command(args: &[&str]) -> super::Command {
        let mut argv = vec!["subscripter"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("arguments should parse").command
    }

    fn invalid() -> Result<AppConfig, ConfigError> {
        Err(ConfigError::Validation("chat.reply_delay_ms must be in range 0..=60000".to_string()))
    }

    fn payload(output: &str) -> Value {
        serde_json::from_str(output).expect("command output should be valid json")
    }

    #[test]
    fn config_command_reports_invalid_config_with_exit_code_two() {
        let result = execute(command(&["config"]), invalid());
        assert_eq!(result.exit_code, 2);

        let payload = payload(&result.output);
        assert_eq!(payload["command"], "config");
        assert_eq!(payload["error_class"], "config_validation");
    }

    #[test]
    fn other_commands_refuse_to_run_on_invalid_config() {
        let result = execute(command(&["testimonials"]), invalid());
        assert_eq!(result.exit_code, 2);
        assert_eq!(payload(&result.output)["error_class"], "config_validation");
    }

    #[test]
    fn valid_config_reaches_the_command() {
        let answers = ["recommend", "Just me", "Basic needs", "Not important"];
        let result = execute(command(&answers), Ok(AppConfig::default()));
        assert_eq!(result.exit_code, 0);
        assert_eq!(payload(&result.output)["command"], "recommend");

        let config = execute(command(&["config"]), Ok(AppConfig::default()));
        assert_eq!(config.exit_code, 0);
        assert!(config.output.starts_with("effective config"));
    }
}
