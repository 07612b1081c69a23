use std::env;
use std::fs;
use std::path::Path;

use subscripter_core::config::{resolve_config_path, AppConfig, ConfigError, LoadOptions};
use toml::Value;

use super::CommandResult;

struct Field {
    key_path: &'static str,
    value: String,
    env_keys: &'static [&'static str],
}

pub fn run() -> CommandResult {
    report(AppConfig::load(LoadOptions::default()))
}

/// Renders an already loaded config. A load failure becomes a
/// `config_validation` envelope with exit code 2.
pub fn report(loaded: Result<AppConfig, ConfigError>) -> CommandResult {
    let config = match loaded {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure("config", "config_validation", error.to_string(), 2);
        }
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let fields = [
        Field {
            key_path: "chat.reply_delay_ms",
            value: config.chat.reply_delay_ms.to_string(),
            env_keys: &["SUBSCRIPTER_CHAT_REPLY_DELAY_MS"],
        },
        Field {
            key_path: "chat.greeting",
            value: config.chat.greeting.clone(),
            env_keys: &["SUBSCRIPTER_CHAT_GREETING"],
        },
        Field {
            key_path: "pricing.default_cycle",
            value: config.pricing.default_cycle.to_string(),
            env_keys: &["SUBSCRIPTER_PRICING_DEFAULT_CYCLE"],
        },
        Field {
            key_path: "logging.level",
            value: config.logging.level.clone(),
            env_keys: &["SUBSCRIPTER_LOGGING_LEVEL", "SUBSCRIPTER_LOG_LEVEL"],
        },
        Field {
            key_path: "logging.format",
            value: format!("{:?}", config.logging.format),
            env_keys: &["SUBSCRIPTER_LOGGING_FORMAT", "SUBSCRIPTER_LOG_FORMAT"],
        },
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in &fields {
        let source = field_source(
            field.key_path,
            field.env_keys,
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        );
        lines.push(render_line(field.key_path, &field.value, source));
    }

    CommandResult::text(lines.join("\n"))
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    let env_hit = env_keys
        .iter()
        .find(|key| env::var(key).map(|value| !value.trim().is_empty()).unwrap_or(false));
    if let Some(env_key) = env_hit {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
