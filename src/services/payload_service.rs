// src/services/payload_service.rs
//
// Validação local dos payloads antes de irem para o backend. O backend
// continua sendo a autoridade final; aqui só barramos o que já se sabe
// errado pela forma.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use crate::common::error::AppError;
use crate::schema::registry::TableName;
use crate::schema::types::{ColumnDef, ColumnKind, ColumnType, TableDef};

// Campo usado para erros que não pertencem a uma coluna
const PAYLOAD_FIELD: &str = "payload";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Update,
    // Linha vinda do backend
    Row,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Update => "update",
            Operation::Row => "row",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "insert" => Ok(Operation::Insert),
            "update" => Ok(Operation::Update),
            "row" => Ok(Operation::Row),
            _ => Err(AppError::UnknownOperation(s.to_string())),
        }
    }
}

// =========================================================================
//  API
// =========================================================================

pub fn validate_insert(table: TableName, payload: &Value) -> Result<(), AppError> {
    validate(table, Operation::Insert, payload)
}

pub fn validate_update(table: TableName, payload: &Value) -> Result<(), AppError> {
    validate(table, Operation::Update, payload)
}

pub fn validate_row(table: TableName, payload: &Value) -> Result<(), AppError> {
    validate(table, Operation::Row, payload)
}

/// Valida e devolve o payload na forma canônica da struct tipada.
pub fn normalize(table: TableName, operation: Operation, payload: Value) -> Result<Value, AppError> {
    validate(table, operation, &payload)?;

    match operation {
        Operation::Insert => table.decode_insert(payload),
        Operation::Update => table.decode_update(payload),
        Operation::Row => table.decode_row(payload),
    }
}

pub fn normalize_insert(table: TableName, payload: Value) -> Result<Value, AppError> {
    normalize(table, Operation::Insert, payload)
}

pub fn normalize_update(table: TableName, payload: Value) -> Result<Value, AppError> {
    normalize(table, Operation::Update, payload)
}

pub fn validate(table: TableName, operation: Operation, payload: &Value) -> Result<(), AppError> {
    let def = table.definition();

    let obj = payload.as_object().ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.add(PAYLOAD_FIELD, error_with("not_an_object", "O payload deve ser um objeto JSON."));
        AppError::ValidationError(errors)
    })?;

    let errors = collect_errors(def, operation, obj);

    if errors.is_empty() {
        tracing::debug!("Payload de {} em '{}' válido", operation, def.name);
        return Ok(());
    }

    tracing::debug!(
        "Payload de {} em '{}' rejeitado: {} campo(s) com erro",
        operation,
        def.name,
        errors.field_errors().len()
    );
    Err(AppError::ValidationError(errors))
}

// =========================================================================
//  MOTOR DE VALIDAÇÃO
// =========================================================================

fn collect_errors(def: &TableDef, operation: Operation, obj: &Map<String, Value>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    // A. Colunas que não existem na tabela
    for key in obj.keys() {
        if def.column(key).is_none() {
            let mut err = error_with("unknown_column", "Coluna desconhecida.");
            err.add_param("column".into(), key);
            errors.add(PAYLOAD_FIELD, err);
        }
    }

    for column in def.columns {
        match obj.get(column.name) {
            // B. Ausência
            None => {
                if let Some(code) = missing_code(column.kind, operation) {
                    errors.add(column.name, ValidationError::new(code));
                }
            }

            // C. Null explícito
            Some(Value::Null) => {
                if !column.kind.is_nullable() {
                    let code = match (operation, column.kind) {
                        (Operation::Insert, ColumnKind::Required) => "required",
                        _ => "not_nullable",
                    };
                    errors.add(column.name, ValidationError::new(code));
                }
            }

            // D. Tipo
            Some(value) => {
                if let Some(err) = check_type(column, value) {
                    errors.add(column.name, err);
                }
            }
        }
    }

    errors
}

fn missing_code(kind: ColumnKind, operation: Operation) -> Option<&'static str> {
    match operation {
        Operation::Insert if !kind.optional_on_insert() => Some("required"),
        // Na linha do backend toda coluna vem, mesmo nula
        Operation::Row => Some("missing_column"),
        _ => None,
    }
}

fn check_type(column: &ColumnDef, value: &Value) -> Option<ValidationError> {
    let code = match column.column_type {
        ColumnType::Uuid => {
            let ok = value.as_str().is_some_and(|s| Uuid::parse_str(s).is_ok());
            (!ok).then_some("invalid_uuid")
        }
        ColumnType::Text => (!value.is_string()).then_some("invalid_text"),
        // numeric precisa caber num Decimal
        ColumnType::Numeric => {
            let ok = value.as_f64().is_some_and(|n| Decimal::try_from(n).is_ok());
            (!ok).then_some("invalid_number")
        }
        ColumnType::Float8 => (!value.is_number()).then_some("invalid_number"),
        ColumnType::Int4 => {
            let ok = value.as_i64().is_some_and(|n| i32::try_from(n).is_ok());
            (!ok).then_some("invalid_integer")
        }
        ColumnType::Int8 => (!value.is_i64()).then_some("invalid_integer"),
        ColumnType::Bool => (!value.is_boolean()).then_some("invalid_boolean"),
        ColumnType::Timestamptz => {
            let ok = value
                .as_str()
                .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok());
            (!ok).then_some("invalid_timestamp")
        }
        // Validação REAL de data, espera YYYY-MM-DD
        ColumnType::Date => {
            let ok = value
                .as_str()
                .is_some_and(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok());
            (!ok).then_some("invalid_date")
        }
        ColumnType::Jsonb => None,
        ColumnType::Enum(name) => {
            let ok = value.as_str().is_some_and(|s| name.contains(s));
            if !ok {
                let mut err = ValidationError::new("invalid_enum");
                err.add_param("enum".into(), &name.as_str());
                err.add_param("allowed".into(), &name.values());
                return Some(err);
            }
            None
        }
    };

    code.map(ValidationError::new)
}

fn error_with(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}
