// src/schema.rs

pub mod functions;
pub(crate) mod macros;
pub mod registry;
pub mod shape;
pub mod types;

pub use functions::{RemoteFunction, UserHasAccessToLoja, UserHasAccessToLojaArgs};
pub use registry::{
    check_integrity, enum_values, enum_values_of, referenced_by, relationships_of, table, tables,
    TableName,
};
pub use shape::{InsertOf, RowOf, Table, UpdateOf};
pub use types::{ColumnDef, ColumnKind, ColumnType, Relationship, TableDef};
