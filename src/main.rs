//src/main.rs

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use lojas_schema::{
    config::AppConfig,
    models::EnumName,
    schema::{self, functions, registry, TableName},
    services::{payload_service, Operation},
    AppError,
};

/// Inspeção do esquema tipado das lojas
#[derive(Parser, Debug)]
#[command(name = "lojas-schema")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lista as tabelas
    Tables,

    /// Colunas e relacionamentos de uma tabela
    Describe { table: String },

    /// Lista os enums e seus valores
    Enums,

    /// Valores de um enum
    Enum { name: String },

    /// Funções remotas
    Functions,

    /// Relacionamentos de saída e de entrada de uma tabela
    Relations { table: String },

    /// Valida um payload JSON; `-` lê da entrada padrão
    Validate {
        table: String,
        /// insert, update ou row
        operation: String,
        file: PathBuf,
    },

    /// Confere a coerência interna do registro
    Check,
}

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuração inválida: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // Logs vão para stderr; stdout fica só com o JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(output) => match config.output.render(&output) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Falha ao gerar a saída: {e:#}");
                ExitCode::FAILURE
            }
        },
        Err(e) => report(&config, e),
    }
}

fn run(command: Command) -> anyhow::Result<Value> {
    let output = match command {
        Command::Tables => {
            let names: Vec<&str> = TableName::ALL.iter().map(|t| t.as_str()).collect();
            json!(names)
        }

        Command::Describe { table } => serde_json::to_value(schema::table(&table)?)?,

        Command::Enums => {
            let enums: serde_json::Map<String, Value> = EnumName::ALL
                .iter()
                .map(|name| (name.as_str().to_string(), json!(name.values())))
                .collect();
            Value::Object(enums)
        }

        Command::Enum { name } => {
            let values = schema::enum_values(&name)?;
            let used_by: Vec<String> = registry::columns_using_enum(name.parse()?)
                .into_iter()
                .map(|(table, column)| format!("{table}.{column}"))
                .collect();
            json!({ "name": name, "values": values, "columns": used_by })
        }

        Command::Functions => serde_json::to_value(functions::FUNCTIONS)?,

        Command::Relations { table } => {
            let outbound = schema::relationships_of(&table)?;
            let inbound = schema::referenced_by(&table)?;
            json!({ "table": table, "references": outbound, "referencedBy": inbound })
        }

        Command::Validate { table, operation, file } => {
            let table: TableName = table.parse()?;
            let operation: Operation = operation.parse()?;
            let payload = read_payload(&file)?;

            let normalized = payload_service::normalize(table, operation, payload)?;
            tracing::info!("Payload de {} em '{}' válido", operation, table);
            normalized
        }

        Command::Check => {
            schema::check_integrity()?;
            json!({
                "ok": true,
                "tables": TableName::ALL.len(),
                "enums": EnumName::ALL.len(),
                "functions": functions::FUNCTIONS.len(),
            })
        }
    };

    Ok(output)
}

fn read_payload(file: &Path) -> anyhow::Result<Value> {
    let raw = if file.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Falha ao ler o payload da entrada padrão")?;
        buf
    } else {
        fs::read_to_string(file)
            .with_context(|| format!("Falha ao ler o payload de {}", file.display()))?
    };

    let payload = serde_json::from_str(&raw).map_err(AppError::from)?;
    Ok(payload)
}

// Erros de validação saem como JSON `campo -> mensagens`
fn error_body(e: &anyhow::Error) -> Option<Value> {
    match e.downcast_ref::<AppError>() {
        Some(app_err @ AppError::ValidationError(_)) => Some(json!({
            "error": app_err.to_string(),
            "details": app_err.details(),
        })),
        _ => None,
    }
}

fn report(config: &AppConfig, e: anyhow::Error) -> ExitCode {
    match error_body(&e) {
        Some(body) => {
            tracing::warn!("{e}");
            match config.output.render(&body) {
                Ok(text) => println!("{text}"),
                Err(render_err) => tracing::error!("Falha ao gerar a saída: {render_err:#}"),
            }
        }
        None => tracing::error!("{e:#}"),
    }
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn payload_file(body: &Value) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lojas-schema-{}.json", Uuid::new_v4()));
        fs::write(&path, body.to_string()).unwrap();
        path
    }

    fn validate(table: &str, operation: &str, body: Value) -> anyhow::Result<Value> {
        let file = payload_file(&body);
        let result = run(Command::Validate {
            table: table.to_string(),
            operation: operation.to_string(),
            file: file.clone(),
        });
        fs::remove_file(file).ok();
        result
    }

    #[test]
    fn cli_parses_validate_from_stdin() {
        let cli = Cli::try_parse_from(["lojas-schema", "validate", "c_clientes", "insert", "-"]).unwrap();
        match cli.command {
            Command::Validate { table, operation, file } => {
                assert_eq!(table, "c_clientes");
                assert_eq!(operation, "insert");
                assert_eq!(file, PathBuf::from("-"));
            }
            other => panic!("comando inesperado: {other:?}"),
        }
    }

    #[test]
    fn tables_and_check() {
        let tables = run(Command::Tables).unwrap();
        assert_eq!(tables.as_array().unwrap().len(), 21);

        let check = run(Command::Check).unwrap();
        assert_eq!(check["ok"], json!(true));
        assert_eq!(check["tables"], json!(21));
    }

    #[test]
    fn valid_payload_is_printed_normalized() {
        let out = validate("c_clientes", "insert", json!({ "nome": "Ana", "email": null })).unwrap();
        assert_eq!(out, json!({ "nome": "Ana", "email": null }));
    }

    #[test]
    fn invalid_payload_fails_with_field_details() {
        let err = validate("c_clientes", "insert", json!({ "cidade": "Curitiba", "nmoe": "Ana" }))
            .unwrap_err();

        let body = error_body(&err).unwrap();
        assert_eq!(body["details"]["nome"], json!(["required"]));
        assert_eq!(body["details"]["payload"], json!(["Coluna desconhecida."]));
    }

    #[test]
    fn unknown_names_have_no_field_details() {
        let err = run(Command::Describe { table: "nao_existe".into() }).unwrap_err();
        assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::UnknownTable(_))));
        assert!(error_body(&err).is_none());

        let err = validate("c_clientes", "delete", json!({})).unwrap_err();
        assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::UnknownOperation(_))));
    }
}
