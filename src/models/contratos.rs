// src/models/contratos.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::enums::StatusPagamento;
use crate::schema::macros::table;

table! {
    /// Contrato fechado a partir de um orçamento.
    c_contratos {
        assinado: nullable bool,
        condicoes: nullable String,
        created_at: nullable DateTime<Utc>,
        data_assinatura: nullable DateTime<Utc>,
        empresa_id: nullable Uuid,
        hash_assinatura: nullable String,
        id: defaulted Uuid,
        numero_contrato: required String,
        observacoes: nullable String,
        orcamento_id: nullable Uuid,
        updated_at: nullable DateTime<Utc>,
        valor_total: required Decimal,
    }
    relationships {
        "c_contratos_empresa_id_fkey": empresa_id -> cad_empresas.id,
        "c_contratos_orcamento_id_fkey": orcamento_id -> c_orcamentos.id,
    }
}

table! {
    /// Parcelas do contrato. Vencimento e pagamento são datas simples (Dia/Mês/Ano).
    c_parcelas_contrato {
        contrato_id: nullable Uuid,
        created_at: nullable DateTime<Utc>,
        data_pagamento: nullable NaiveDate,
        data_vencimento: required NaiveDate,
        id: defaulted Uuid,
        numero_parcela: required i32,
        status_pagamento: nullable StatusPagamento,
        updated_at: nullable DateTime<Utc>,
        valor_parcela: required Decimal,
    }
    relationships {
        "c_parcelas_contrato_contrato_id_fkey": contrato_id -> c_contratos.id,
    }
}
