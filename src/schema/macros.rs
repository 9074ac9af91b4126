// src/schema/macros.rs
//
// Geradores das tabelas. Uma única lista de colunas por tabela produz a
// Row, o Insert, o Update e o descritor estático, sempre pela mesma regra
// (ver `ColumnKind`). Ninguém escreve Insert/Update à mão.

macro_rules! table {
    (
        $(#[$attr:meta])*
        $name:ident {
            $( $col:ident : $kind:ident $ty:ty ),+ $(,)?
        }
        relationships {
            $( $fk:literal : $fcol:ident -> $rtab:ident . $rcol:ident $( [$card:ident] )? ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        pub mod $name {
            #[allow(unused_imports)]
            use super::*;
            use serde::{Deserialize, Serialize};
            use $crate::schema::types::{ColumnDef, Relationship, SqlType, TableDef};

            /// Linha como armazenada no banco.
            #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
            pub struct Row {
                $( pub $col: crate::schema::macros::row_type!($kind $ty), )+
            }

            $crate::schema::macros::insert_struct! { @munch [] [] [] $( $col $kind $ty, )+ }

            $crate::schema::macros::update_struct! { @munch [] $( $col $kind $ty, )+ }

            pub static COLUMNS: &[ColumnDef] = &[
                $(
                    ColumnDef {
                        name: stringify!($col),
                        kind: $crate::schema::macros::column_kind!($kind),
                        column_type: <$ty as SqlType>::COLUMN_TYPE,
                        rust_type: stringify!($ty),
                    },
                )+
            ];

            pub static RELATIONSHIPS: &[Relationship] = &[
                $(
                    Relationship {
                        foreign_key_name: $fk,
                        columns: &[stringify!($fcol)],
                        is_one_to_one: $crate::schema::macros::one_to_one!($($card)?),
                        referenced_relation: stringify!($rtab),
                        referenced_columns: &[stringify!($rcol)],
                    },
                )*
            ];

            pub static DEFINITION: TableDef = TableDef {
                name: stringify!($name),
                columns: COLUMNS,
                relationships: RELATIONSHIPS,
            };

            /// Marcador da tabela para `RowOf`/`InsertOf`/`UpdateOf`.
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct Table;

            impl $crate::schema::shape::Table for Table {
                const NAME: &'static str = stringify!($name);

                type Row = Row;
                type Insert = Insert;
                type Update = Update;

                fn definition() -> &'static TableDef {
                    &DEFINITION
                }
            }
        }
    };
}

macro_rules! row_type {
    (required $ty:ty) => { $ty };
    (defaulted $ty:ty) => { $ty };
    (nullable $ty:ty) => { Option<$ty> };
}

macro_rules! column_kind {
    (required) => { $crate::schema::types::ColumnKind::Required };
    (defaulted) => { $crate::schema::types::ColumnKind::Defaulted };
    (nullable) => { $crate::schema::types::ColumnKind::Nullable };
}

macro_rules! one_to_one {
    () => { false };
    (one_to_one) => { true };
}

// Acumula campos, parâmetros do construtor mínimo e inicializadores.
macro_rules! insert_struct {
    (@munch [$($fields:tt)*] [$($params:tt)*] [$($inits:tt)*]) => {
        /// Payload de inserção: colunas com default ou anuláveis são opcionais.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct Insert {
            $($fields)*
        }

        impl Insert {
            /// Payload mínimo: só as colunas obrigatórias, o resto ausente.
            #[allow(clippy::too_many_arguments, clippy::new_without_default)]
            pub fn new($($params)*) -> Self {
                Self { $($inits)* }
            }
        }
    };
    (@munch [$($fields:tt)*] [$($params:tt)*] [$($inits:tt)*] $col:ident required $ty:ty, $($rest:tt)*) => {
        $crate::schema::macros::insert_struct! { @munch
            [$($fields)* pub $col: $ty,]
            [$($params)* $col: $ty,]
            [$($inits)* $col,]
            $($rest)*
        }
    };
    (@munch [$($fields:tt)*] [$($params:tt)*] [$($inits:tt)*] $col:ident defaulted $ty:ty, $($rest:tt)*) => {
        $crate::schema::macros::insert_struct! { @munch
            [$($fields)*
                #[serde(
                    default,
                    skip_serializing_if = "Option::is_none",
                    deserialize_with = "crate::schema::shape::present_not_null"
                )]
                pub $col: Option<$ty>,
            ]
            [$($params)*]
            [$($inits)* $col: None,]
            $($rest)*
        }
    };
    (@munch [$($fields:tt)*] [$($params:tt)*] [$($inits:tt)*] $col:ident nullable $ty:ty, $($rest:tt)*) => {
        $crate::schema::macros::insert_struct! { @munch
            [$($fields)*
                #[serde(
                    default,
                    skip_serializing_if = "Option::is_none",
                    deserialize_with = "crate::schema::shape::double_option"
                )]
                pub $col: Option<Option<$ty>>,
            ]
            [$($params)*]
            [$($inits)* $col: None,]
            $($rest)*
        }
    };
}

macro_rules! update_struct {
    (@munch [$($fields:tt)*]) => {
        /// Payload de atualização parcial: toda coluna é opcional.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct Update {
            $($fields)*
        }
    };
    (@munch [$($fields:tt)*] $col:ident nullable $ty:ty, $($rest:tt)*) => {
        $crate::schema::macros::update_struct! { @munch
            [$($fields)*
                #[serde(
                    default,
                    skip_serializing_if = "Option::is_none",
                    deserialize_with = "crate::schema::shape::double_option"
                )]
                pub $col: Option<Option<$ty>>,
            ]
            $($rest)*
        }
    };
    // required e defaulted têm a mesma forma no Update: opcionais, nunca null
    (@munch [$($fields:tt)*] $col:ident $kind:ident $ty:ty, $($rest:tt)*) => {
        $crate::schema::macros::update_struct! { @munch
            [$($fields)*
                #[serde(
                    default,
                    skip_serializing_if = "Option::is_none",
                    deserialize_with = "crate::schema::shape::present_not_null"
                )]
                pub $col: Option<$ty>,
            ]
            $($rest)*
        }
    };
}

pub(crate) use column_kind;
pub(crate) use insert_struct;
pub(crate) use one_to_one;
pub(crate) use row_type;
pub(crate) use table;
pub(crate) use update_struct;
