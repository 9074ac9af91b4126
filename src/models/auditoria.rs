// src/models/auditoria.rs
//
// Trilhas de auditoria e logs de processamento.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::schema::macros::table;

table! {
    /// Antes/depois de cada alteração, gravado pelo backend.
    auditoria_alteracoes {
        acao: nullable String,
        created_at: nullable DateTime<Utc>,
        dados_antes: nullable Value,
        dados_depois: nullable Value,
        id: defaulted Uuid,
        ip_address: nullable String,
        registro_id: required Uuid,
        tabela: required String,
        user_agent: nullable String,
        usuario_id: required Uuid,
    }
    relationships {}
}

table! {
    config_historico_configuracoes {
        alterado_por: required Uuid,
        campo_alterado: required String,
        data_alteracao: nullable DateTime<Utc>,
        id: defaulted Uuid,
        loja_id: nullable Uuid,
        motivo_alteracao: nullable String,
        tabela_alterada: required String,
        valor_anterior: nullable String,
        valor_novo: nullable String,
    }
    relationships {
        "config_historico_configuracoes_loja_id_fkey": loja_id -> c_lojas.id,
    }
}

table! {
    /// Uma linha por arquivo XML importado.
    xml_processing_logs {
        ambientes_criados: nullable i32,
        colecoes_encontradas: nullable String,
        created_at: nullable DateTime<Utc>,
        created_by: nullable Uuid,
        dados_cliente: nullable Value,
        error_details: nullable Value,
        file_size: nullable i64,
        filename: required String,
        id: defaulted Uuid,
        loja_id: nullable Uuid,
        processing_time: nullable f64,
        status: required String,
        valor_total: nullable Decimal,
    }
    relationships {
        "xml_processing_logs_loja_id_fkey": loja_id -> c_lojas.id,
    }
}
