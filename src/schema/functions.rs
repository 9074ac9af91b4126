// src/schema/functions.rs
//
// Funções remotas expostas pelo banco (RPC). Aqui só a assinatura: quem
// chama é o cliente do backend.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use super::types::ColumnType;
use crate::common::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArgDef {
    pub name: &'static str,
    pub arg_type: ColumnType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunctionDef {
    pub name: &'static str,
    pub args: &'static [ArgDef],
    pub returns: ColumnType,
}

/// Assinatura tipada de uma função remota.
pub trait RemoteFunction {
    const NAME: &'static str;

    type Args: Serialize;
    type Returns: DeserializeOwned;

    fn definition() -> &'static FunctionDef;

    /// Decodifica a resposta da chamada.
    fn decode_returns(value: serde_json::Value) -> Result<Self::Returns, AppError> {
        Ok(serde_json::from_value(value)?)
    }
}

// --- user_has_access_to_loja ---

pub static USER_HAS_ACCESS_TO_LOJA: FunctionDef = FunctionDef {
    name: "user_has_access_to_loja",
    args: &[ArgDef {
        name: "target_loja_id",
        arg_type: ColumnType::Uuid,
    }],
    returns: ColumnType::Bool,
};

/// Checagem de acesso por loja usada pelas políticas de RLS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserHasAccessToLoja;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHasAccessToLojaArgs {
    pub target_loja_id: Uuid,
}

impl RemoteFunction for UserHasAccessToLoja {
    const NAME: &'static str = "user_has_access_to_loja";

    type Args = UserHasAccessToLojaArgs;
    type Returns = bool;

    fn definition() -> &'static FunctionDef {
        &USER_HAS_ACCESS_TO_LOJA
    }
}

pub static FUNCTIONS: &[&FunctionDef] = &[&USER_HAS_ACCESS_TO_LOJA];

pub fn function(name: &str) -> Result<&'static FunctionDef, AppError> {
    FUNCTIONS
        .iter()
        .copied()
        .find(|f| f.name == name)
        .ok_or_else(|| AppError::UnknownFunction(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn args_serialize_with_wire_name() {
        let loja = Uuid::parse_str("3f0e1f8c-1d7b-4b8e-9a5e-2c4d6e8f0a1b").unwrap();
        let args = UserHasAccessToLojaArgs { target_loja_id: loja };

        assert_eq!(
            serde_json::to_value(args).unwrap(),
            json!({ "target_loja_id": "3f0e1f8c-1d7b-4b8e-9a5e-2c4d6e8f0a1b" })
        );
    }

    #[test]
    fn returns_boolean() {
        assert!(UserHasAccessToLoja::decode_returns(json!(true)).unwrap());
        assert!(UserHasAccessToLoja::decode_returns(json!("true")).is_err());
    }

    #[test]
    fn lookup_by_name() {
        let def = function("user_has_access_to_loja").unwrap();
        assert_eq!(def.args.len(), 1);
        assert_eq!(def.args[0].name, "target_loja_id");
        assert_eq!(def.returns, ColumnType::Bool);
        assert_eq!(UserHasAccessToLoja::definition().name, UserHasAccessToLoja::NAME);

        assert!(matches!(function("apaga_tudo"), Err(AppError::UnknownFunction(_))));
    }
}
