// src/schema/types.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::models::enums::EnumName;

// --- Optionalidade da coluna ---

/// Como uma coluna se comporta em cada operação.
///
/// A regra de derivação é fixa:
/// - `Required`: obrigatória no Insert, opcional no Update;
/// - `Defaulted`: não-nula, mas o banco tem default, então é opcional no Insert;
/// - `Nullable`: pode ser nula, opcional no Insert e no Update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Required,
    Defaulted,
    Nullable,
}

impl ColumnKind {
    pub fn is_nullable(self) -> bool {
        matches!(self, ColumnKind::Nullable)
    }

    pub fn optional_on_insert(self) -> bool {
        !matches!(self, ColumnKind::Required)
    }

    // No Update tudo é opcional, sempre.
    pub fn optional_on_update(self) -> bool {
        true
    }
}

// --- Tipo da coluna no Postgres ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "enum", rename_all = "lowercase")]
pub enum ColumnType {
    Uuid,
    Text,
    Numeric,
    Int4,
    Int8,
    Float8,
    Bool,
    Timestamptz,
    Date,
    Jsonb,
    Enum(EnumName),
}

impl ColumnType {
    pub fn sql_name(self) -> &'static str {
        match self {
            ColumnType::Uuid => "uuid",
            ColumnType::Text => "text",
            ColumnType::Numeric => "numeric",
            ColumnType::Int4 => "int4",
            ColumnType::Int8 => "int8",
            ColumnType::Float8 => "float8",
            ColumnType::Bool => "bool",
            ColumnType::Timestamptz => "timestamptz",
            ColumnType::Date => "date",
            ColumnType::Jsonb => "jsonb",
            ColumnType::Enum(name) => name.as_str(),
        }
    }
}

/// Liga um tipo Rust ao tipo da coluna que ele representa.
pub trait SqlType {
    const COLUMN_TYPE: ColumnType;
}

impl SqlType for Uuid {
    const COLUMN_TYPE: ColumnType = ColumnType::Uuid;
}

impl SqlType for String {
    const COLUMN_TYPE: ColumnType = ColumnType::Text;
}

impl SqlType for Decimal {
    const COLUMN_TYPE: ColumnType = ColumnType::Numeric;
}

impl SqlType for i32 {
    const COLUMN_TYPE: ColumnType = ColumnType::Int4;
}

impl SqlType for i64 {
    const COLUMN_TYPE: ColumnType = ColumnType::Int8;
}

impl SqlType for f64 {
    const COLUMN_TYPE: ColumnType = ColumnType::Float8;
}

impl SqlType for bool {
    const COLUMN_TYPE: ColumnType = ColumnType::Bool;
}

impl SqlType for DateTime<Utc> {
    const COLUMN_TYPE: ColumnType = ColumnType::Timestamptz;
}

impl SqlType for NaiveDate {
    const COLUMN_TYPE: ColumnType = ColumnType::Date;
}

impl SqlType for Value {
    const COLUMN_TYPE: ColumnType = ColumnType::Jsonb;
}

// --- Descritores estáticos ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub column_type: ColumnType,
    pub rust_type: &'static str,
}

/// Chave estrangeira: (colunas locais) -> (tabela, colunas referenciadas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub foreign_key_name: &'static str,
    pub columns: &'static [&'static str],
    pub is_one_to_one: bool,
    pub referenced_relation: &'static str,
    pub referenced_columns: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
    pub relationships: &'static [Relationship],
}

impl TableDef {
    pub fn column(&self, name: &str) -> Option<&'static ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Colunas que o Insert exige.
    pub fn required_on_insert(&self) -> impl Iterator<Item = &'static ColumnDef> {
        self.columns.iter().filter(|c| !c.kind.optional_on_insert())
    }

    pub fn nullable_columns(&self) -> impl Iterator<Item = &'static ColumnDef> {
        self.columns.iter().filter(|c| c.kind.is_nullable())
    }

    /// Relacionamentos que apontam para `table`.
    pub fn references_to<'a>(&self, table: &'a str) -> impl Iterator<Item = &'static Relationship> + 'a {
        self.relationships
            .iter()
            .filter(move |r| r.referenced_relation == table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_rule_per_kind() {
        assert!(!ColumnKind::Required.optional_on_insert());
        assert!(ColumnKind::Defaulted.optional_on_insert());
        assert!(ColumnKind::Nullable.optional_on_insert());

        assert!(ColumnKind::Required.optional_on_update());
        assert!(ColumnKind::Nullable.is_nullable());
        assert!(!ColumnKind::Defaulted.is_nullable());
    }

    #[test]
    fn column_type_serializes_with_enum_name() {
        let json = serde_json::to_value(ColumnType::Enum(EnumName::PerfilUsuario)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "enum", "enum": "perfil_usuario" }));

        let json = serde_json::to_value(ColumnType::Timestamptz).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "timestamptz" }));
    }

    #[test]
    fn sql_names() {
        assert_eq!(<Decimal as SqlType>::COLUMN_TYPE.sql_name(), "numeric");
        assert_eq!(<NaiveDate as SqlType>::COLUMN_TYPE.sql_name(), "date");
        assert_eq!(ColumnType::Enum(EnumName::TipoVenda).sql_name(), "tipo_venda");
    }
}
