// src/schema/shape.rs

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use super::types::TableDef;

/// Uma tabela do esquema, vista em tempo de compilação.
///
/// Cada módulo gerado por `table!` expõe um marcador `Table` que implementa
/// este trait. Tabela que não existe não tem marcador e não compila.
pub trait Table {
    const NAME: &'static str;

    type Row: Serialize + DeserializeOwned;
    type Insert: Serialize + DeserializeOwned;
    type Update: Serialize + DeserializeOwned + Default;

    fn definition() -> &'static TableDef;
}

pub type RowOf<T> = <T as Table>::Row;
pub type InsertOf<T> = <T as Table>::Insert;
pub type UpdateOf<T> = <T as Table>::Update;

// Colunas anuláveis no Insert/Update viram `Option<Option<T>>`:
// ausente = None, null explícito = Some(None), valor = Some(Some(v)).
// Com `#[serde(default)]` o campo ausente nunca chega aqui.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// Colunas não anuláveis opcionais no Insert/Update: ausente = None,
// valor = Some(v), null explícito é erro.
pub(crate) fn present_not_null<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(serde::de::Error::custom("coluna não anulável recebeu null")),
    }
}

/// Decodifica no tipo da operação e codifica de volta: o payload canônico.
pub fn roundtrip<T>(payload: serde_json::Value) -> Result<serde_json::Value, serde_json::Error>
where
    T: Serialize + DeserializeOwned,
{
    let typed: T = serde_json::from_value(payload)?;
    serde_json::to_value(typed)
}
