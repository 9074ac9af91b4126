// src/models/lojas.rs
//
// Loja e tudo que a loja configura.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::enums::FormatoNumeracao;
use crate::schema::macros::table;

table! {
    /// Loja. Pertence a uma empresa.
    c_lojas {
        ativo: nullable bool,
        created_at: nullable DateTime<Utc>,
        email: nullable String,
        empresa_id: nullable Uuid,
        endereco: nullable String,
        id: defaulted Uuid,
        nome: required String,
        telefone: nullable String,
        updated_at: nullable DateTime<Utc>,
    }
    relationships {
        "c_lojas_empresa_id_fkey": empresa_id -> cad_empresas.id,
    }
}

table! {
    /// Configuração da loja (uma por loja).
    ///
    /// Limites de desconto, comissões mínimas e a numeração de orçamentos e
    /// contratos. Quem aplica essas regras é o backend.
    config_loja {
        comissao_minima_gerente: nullable Decimal,
        comissao_minima_vendedor: nullable Decimal,
        created_at: nullable DateTime<Utc>,
        deflator_custo_fabrica: defaulted Decimal,
        formato_numeracao: nullable FormatoNumeracao,
        id: defaulted Uuid,
        limite_desconto_gerente: defaulted Decimal,
        limite_desconto_vendedor: defaulted Decimal,
        loja_id: nullable Uuid,
        numero_inicial_contrato: nullable i32,
        numero_inicial_orcamento: nullable i32,
        permitir_desconto_negativo: nullable bool,
        prefixo_numeracao: nullable String,
        proximo_numero_contrato: nullable i32,
        proximo_numero_orcamento: nullable i32,
        updated_at: nullable DateTime<Utc>,
        updated_by: nullable Uuid,
        valor_frete_percentual: defaulted Decimal,
        valor_medidor_padrao: defaulted Decimal,
    }
    relationships {
        "config_loja_loja_id_fkey": loja_id -> c_lojas.id [one_to_one],
    }
}

table! {
    /// Faixas progressivas de comissão.
    config_regras_comissao_faixa {
        ativo: nullable bool,
        created_at: nullable DateTime<Utc>,
        id: defaulted Uuid,
        loja_id: nullable Uuid,
        ordem: required i32,
        percentual: required Decimal,
        tipo_comissao: nullable String,
        valor_maximo: nullable Decimal,
        valor_minimo: required Decimal,
    }
    relationships {
        "config_regras_comissao_faixa_loja_id_fkey": loja_id -> c_lojas.id,
    }
}

table! {
    config_status_orcamento {
        bloqueia_edicao: nullable bool,
        created_at: nullable DateTime<Utc>,
        id: defaulted Uuid,
        is_default: nullable bool,
        is_final: nullable bool,
        loja_id: nullable Uuid,
        nome_status: required String,
        ordem: required i32,
        updated_at: nullable DateTime<Utc>,
    }
    relationships {
        "config_status_orcamento_loja_id_fkey": loja_id -> c_lojas.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::shape::Table;
    use crate::schema::types::ColumnKind;
    use serde_json::json;

    #[test]
    fn config_loja_is_one_to_one_with_loja() {
        let rel = &config_loja::Table::definition().relationships[0];
        assert!(rel.is_one_to_one);
        assert_eq!(rel.foreign_key_name, "config_loja_loja_id_fkey");
        assert_eq!(rel.referenced_relation, "c_lojas");
        assert_eq!(rel.columns, &["loja_id"]);
    }

    #[test]
    fn config_loja_defaults_are_optional_but_not_nullable() {
        let def = config_loja::Table::definition();
        let deflator = def.column("deflator_custo_fabrica").unwrap();
        assert_eq!(deflator.kind, ColumnKind::Defaulted);

        // Nada é obrigatório no insert da configuração
        assert_eq!(def.required_on_insert().count(), 0);
        let insert = config_loja::Insert::new();
        assert_eq!(serde_json::to_value(&insert).unwrap(), json!({}));

        // Na Row o default já foi aplicado: o valor nunca é nulo
        let row: config_loja::Row = serde_json::from_value(json!({
            "deflator_custo_fabrica": 0.28,
            "id": "5b8a3c2e-9f1d-4e7a-8b6c-1d2e3f4a5b6c",
            "limite_desconto_gerente": 15,
            "limite_desconto_vendedor": 7,
            "valor_frete_percentual": 2.5,
            "valor_medidor_padrao": 150,
            "formato_numeracao": "ANO_SEQUENCIAL",
            "proximo_numero_orcamento": 42
        }))
        .unwrap();
        assert_eq!(row.formato_numeracao, Some(FormatoNumeracao::AnoSequencial));
        assert_eq!(row.proximo_numero_orcamento, Some(42));
        assert_eq!(row.limite_desconto_gerente, Decimal::from(15));
    }

    #[test]
    fn status_insert_needs_name_and_order() {
        let insert = config_status_orcamento::Insert::new("Em negociação".to_string(), 1);
        assert_eq!(
            serde_json::to_value(&insert).unwrap(),
            json!({ "nome_status": "Em negociação", "ordem": 1 })
        );
    }
}
