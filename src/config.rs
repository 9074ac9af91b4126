// src/config.rs

use std::{env, str::FromStr};

use anyhow::anyhow;

/// Formato de saída da CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "compact" => Ok(OutputFormat::Compact),
            other => Err(anyhow!("SCHEMA_OUTPUT inválido: '{other}' (use pretty ou compact)")),
        }
    }
}

impl OutputFormat {
    pub fn render(self, value: &serde_json::Value) -> anyhow::Result<String> {
        let text = match self {
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
            OutputFormat::Compact => serde_json::to_string(value)?,
        };
        Ok(text)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_filter: String,
    pub output: OutputFormat,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        // .env é opcional
        dotenvy::dotenv().ok();

        let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let output = match env::var("SCHEMA_OUTPUT") {
            Ok(raw) => raw.parse()?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Self { log_filter, output })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("Compact".parse::<OutputFormat>().unwrap(), OutputFormat::Compact);
        assert_eq!(" pretty ".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn compact_output_is_single_line() {
        let value = json!({ "tabela": "c_lojas", "colunas": 9 });
        let text = OutputFormat::Compact.render(&value).unwrap();
        assert!(!text.contains('\n'));
        assert!(OutputFormat::Pretty.render(&value).unwrap().contains('\n'));
    }
}
