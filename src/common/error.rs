// src/common/error.rs

use std::collections::BTreeMap;

use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Tudo aqui é erro de forma/nome: erros de armazenamento são do backend.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Tabela desconhecida: '{0}'")]
    UnknownTable(String),

    #[error("Enum desconhecido: '{0}'")]
    UnknownEnum(String),

    #[error("Função remota desconhecida: '{0}'")]
    UnknownFunction(String),

    #[error("Operação desconhecida: '{0}' (use insert, update ou row)")]
    UnknownOperation(String),

    #[error("Valor '{value}' não pertence ao enum {enum_name}")]
    InvalidEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Falha ao decodificar o payload na struct tipada
    #[error("Payload inválido: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Esquema inconsistente: {0}")]
    SchemaIntegrity(String),
}

impl AppError {
    /// Achata os erros de validação em `campo -> [códigos]`.
    ///
    /// Mesmo formato do corpo de erro da API: para cada campo,
    /// a mensagem quando existe, senão o código.
    pub fn details(&self) -> BTreeMap<String, Vec<String>> {
        let mut details = BTreeMap::new();

        if let AppError::ValidationError(errors) = self {
            for (field, field_errors) in errors.field_errors() {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| match &e.message {
                        Some(m) => m.to_string(),
                        None => e.code.to_string(),
                    })
                    .collect();
                details.insert(field.to_string(), messages);
            }
        }

        details
    }

    /// Códigos de erro por campo, sem as mensagens.
    pub fn codes(&self) -> BTreeMap<String, Vec<String>> {
        let mut codes = BTreeMap::new();

        if let AppError::ValidationError(errors) = self {
            for (field, field_errors) in errors.field_errors() {
                let list = field_errors.iter().map(|e| e.code.to_string()).collect();
                codes.insert(field.to_string(), list);
            }
        }

        codes
    }
}
