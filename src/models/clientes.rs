// src/models/clientes.rs
//
// Payloads de entrada para clientes, validados antes de virar Insert/Update.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::enums::TipoVenda;
use super::vendas::c_clientes;
use crate::common::error::AppError;

// Validação básica de email
fn validar_email(email: &str) -> Result<(), ValidationError> {
    if email.contains('@') {
        return Ok(());
    }
    let mut err = ValidationError::new("invalid_email");
    err.message = Some("Email deve conter @".into());
    Err(err)
}

/// Remove a formatação do CPF/CNPJ, deixando só os dígitos.
pub fn normalizar_cpf_cnpj(cpf_cnpj: &str) -> String {
    cpf_cnpj.chars().filter(|c| c.is_ascii_digit()).collect()
}

// CPF/CNPJ sem nenhum dígito vira ausente
fn cpf_cnpj_normalizado(cpf_cnpj: Option<String>) -> Option<String> {
    cpf_cnpj
        .map(|v| normalizar_cpf_cnpj(&v))
        .filter(|v| !v.is_empty())
}

// Dados para cadastro de um novo cliente
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NovoCliente {
    #[validate(length(min = 2, max = 255, message = "O nome deve ter entre 2 e 255 caracteres."))]
    pub nome: String,

    #[validate(length(max = 20, message = "CPF/CNPJ com no máximo 20 caracteres."))]
    pub cpf_cnpj: Option<String>,

    #[validate(length(max = 20, message = "Telefone com no máximo 20 caracteres."))]
    pub telefone: Option<String>,

    #[validate(
        length(max = 255, message = "Email com no máximo 255 caracteres."),
        custom(function = "validar_email")
    )]
    pub email: Option<String>,

    #[validate(length(max = 500, message = "Endereço com no máximo 500 caracteres."))]
    pub endereco: Option<String>,

    #[validate(length(max = 100, message = "Cidade com no máximo 100 caracteres."))]
    pub cidade: Option<String>,

    #[validate(length(max = 10, message = "CEP com no máximo 10 caracteres."))]
    pub cep: Option<String>,

    // Ausente ou null: a venda é NORMAL
    pub tipo_venda: Option<TipoVenda>,

    #[validate(length(max = 1000, message = "Observação com no máximo 1000 caracteres."))]
    pub observacao: Option<String>,
}

impl NovoCliente {
    /// Valida e monta o Insert de `c_clientes` para a loja informada.
    pub fn into_insert(self, loja_id: Uuid) -> Result<c_clientes::Insert, AppError> {
        self.validate()?;

        tracing::debug!("Preparando cliente '{}' para a loja {}", self.nome, loja_id);

        let mut insert = c_clientes::Insert::new(self.nome);
        insert.cpf_cnpj = cpf_cnpj_normalizado(self.cpf_cnpj).map(Some);
        insert.telefone = self.telefone.map(Some);
        insert.email = self.email.map(Some);
        insert.endereco = self.endereco.map(Some);
        insert.cidade = self.cidade.map(Some);
        insert.cep = self.cep.map(Some);
        insert.observacao = self.observacao.map(Some);
        insert.tipo_venda = Some(Some(self.tipo_venda.unwrap_or(TipoVenda::Normal)));
        insert.loja_id = Some(Some(loja_id));

        Ok(insert)
    }
}

// Dados para atualização: só o que vier preenchido é alterado
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AlteracaoCliente {
    #[validate(length(min = 2, max = 255, message = "O nome deve ter entre 2 e 255 caracteres."))]
    pub nome: Option<String>,

    #[validate(length(max = 20, message = "CPF/CNPJ com no máximo 20 caracteres."))]
    pub cpf_cnpj: Option<String>,

    #[validate(length(max = 20, message = "Telefone com no máximo 20 caracteres."))]
    pub telefone: Option<String>,

    #[validate(
        length(max = 255, message = "Email com no máximo 255 caracteres."),
        custom(function = "validar_email")
    )]
    pub email: Option<String>,

    #[validate(length(max = 500, message = "Endereço com no máximo 500 caracteres."))]
    pub endereco: Option<String>,

    #[validate(length(max = 100, message = "Cidade com no máximo 100 caracteres."))]
    pub cidade: Option<String>,

    #[validate(length(max = 10, message = "CEP com no máximo 10 caracteres."))]
    pub cep: Option<String>,

    pub tipo_venda: Option<TipoVenda>,

    #[validate(length(max = 1000, message = "Observação com no máximo 1000 caracteres."))]
    pub observacao: Option<String>,
}

impl AlteracaoCliente {
    pub fn into_update(self) -> Result<c_clientes::Update, AppError> {
        self.validate()?;

        Ok(c_clientes::Update {
            nome: self.nome,
            cpf_cnpj: cpf_cnpj_normalizado(self.cpf_cnpj).map(Some),
            telefone: self.telefone.map(Some),
            email: self.email.map(Some),
            endereco: self.endereco.map(Some),
            cidade: self.cidade.map(Some),
            cep: self.cep.map(Some),
            tipo_venda: self.tipo_venda.map(Some),
            observacao: self.observacao.map(Some),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn novo(nome: &str) -> NovoCliente {
        serde_json::from_value(json!({ "nome": nome })).unwrap()
    }

    #[test]
    fn tipo_venda_defaults_to_normal() {
        let insert = novo("Carlos Lima").into_insert(Uuid::nil()).unwrap();
        assert_eq!(insert.tipo_venda, Some(Some(TipoVenda::Normal)));

        let explicito: NovoCliente =
            serde_json::from_value(json!({ "nome": "Carlos Lima", "tipo_venda": null })).unwrap();
        assert_eq!(explicito.tipo_venda, None);
        let insert = explicito.into_insert(Uuid::nil()).unwrap();
        assert_eq!(insert.tipo_venda, Some(Some(TipoVenda::Normal)));

        let futura: NovoCliente =
            serde_json::from_value(json!({ "nome": "Carlos Lima", "tipo_venda": "FUTURA" })).unwrap();
        let insert = futura.into_insert(Uuid::nil()).unwrap();
        assert_eq!(insert.tipo_venda, Some(Some(TipoVenda::Futura)));
    }

    #[test]
    fn into_insert_normalizes_document_and_sets_loja() {
        let mut cliente = novo("Carlos Lima");
        cliente.cpf_cnpj = Some("123.456.789-09".to_string());
        let loja = Uuid::new_v4();

        let insert = cliente.into_insert(loja).unwrap();

        assert_eq!(insert.cpf_cnpj, Some(Some("12345678909".to_string())));
        assert_eq!(insert.loja_id, Some(Some(loja)));
        assert_eq!(insert.tipo_venda, Some(Some(TipoVenda::Normal)));
        assert_eq!(insert.email, None);
    }

    #[test]
    fn document_without_digits_is_dropped() {
        let mut cliente = novo("Carlos Lima");
        cliente.cpf_cnpj = Some("---".to_string());

        let insert = cliente.into_insert(Uuid::nil()).unwrap();
        assert_eq!(insert.cpf_cnpj, None);
    }

    #[test]
    fn short_name_and_bad_email_are_reported_together() {
        let mut cliente = novo("A");
        cliente.email = Some("sem-arroba.com".to_string());

        let err = cliente.into_insert(Uuid::nil()).unwrap_err();
        let details = err.details();

        assert_eq!(details["nome"], vec!["O nome deve ter entre 2 e 255 caracteres.".to_string()]);
        assert_eq!(details["email"], vec!["Email deve conter @".to_string()]);
    }

    #[test]
    fn update_only_touches_given_fields() {
        let alteracao = AlteracaoCliente {
            telefone: Some("(41) 99999-0000".to_string()),
            ..Default::default()
        };

        let update = alteracao.into_update().unwrap();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "telefone": "(41) 99999-0000" })
        );
    }
}
