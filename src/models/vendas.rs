// src/models/vendas.rs
//
// Clientes, ambientes e orçamentos.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value; // jsonb
use uuid::Uuid;

use super::enums::{AcaoAprovacao, TipoVenda};
use crate::schema::macros::table;

table! {
    /// Clientes da loja.
    c_clientes {
        cep: nullable String,
        cidade: nullable String,
        cpf_cnpj: nullable String,
        created_at: nullable DateTime<Utc>,
        email: nullable String,
        endereco: nullable String,
        id: defaulted Uuid,
        loja_id: nullable Uuid,
        nome: required String,
        observacao: nullable String,
        telefone: nullable String,
        tipo_venda: nullable TipoVenda,
        updated_at: nullable DateTime<Utc>,
    }
    relationships {
        "c_clientes_loja_id_fkey": loja_id -> c_lojas.id,
    }
}

table! {
    /// Ambientes (cozinha, dormitório...) importados do XML do projeto.
    c_ambientes {
        created_at: nullable DateTime<Utc>,
        descricao_completa: nullable String,
        detalhes_xml: nullable Value,
        id: defaulted Uuid,
        linha_produto: nullable String,
        loja_id: nullable Uuid,
        nome_ambiente: required String,
        nome_cliente: nullable String,
        valor_total: required Decimal,
    }
    relationships {
        "c_ambientes_loja_id_fkey": loja_id -> c_lojas.id,
    }
}

table! {
    c_orcamentos {
        aprovador_id: nullable Uuid,
        cliente_id: nullable Uuid,
        comissao_gerente: required Decimal,
        comissao_vendedor: required Decimal,
        config_snapshot: nullable Value,
        created_at: nullable DateTime<Utc>,
        created_by: nullable Uuid,
        custo_fabrica: required Decimal,
        custo_frete: required Decimal,
        custo_medidor: required Decimal,
        custo_montador: required Decimal,
        data_aprovacao: nullable DateTime<Utc>,
        desconto_percentual: required Decimal,
        id: defaulted Uuid,
        loja_id: nullable Uuid,
        margem_lucro: required Decimal,
        medidor_selecionado_id: nullable Uuid,
        montador_selecionado_id: nullable Uuid,
        necessita_aprovacao: nullable bool,
        numero: required String,
        observacoes: nullable String,
        plano_pagamento: nullable Value,
        status_id: nullable Uuid,
        transportadora_selecionada_id: nullable Uuid,
        updated_at: nullable DateTime<Utc>,
        valor_ambientes: required Decimal,
        valor_final: required Decimal,
        vendedor_id: nullable Uuid,
    }
    relationships {
        "c_orcamentos_aprovador_id_fkey": aprovador_id -> cad_equipe.id,
        "c_orcamentos_cliente_id_fkey": cliente_id -> c_clientes.id,
        "c_orcamentos_loja_id_fkey": loja_id -> c_lojas.id,
        "c_orcamentos_medidor_selecionado_id_fkey": medidor_selecionado_id -> cad_equipe.id,
        "c_orcamentos_montador_selecionado_id_fkey": montador_selecionado_id -> cad_montadores.id,
        "c_orcamentos_status_id_fkey": status_id -> config_status_orcamento.id,
        "c_orcamentos_transportadora_selecionada_id_fkey": transportadora_selecionada_id -> cad_transportadoras.id,
        "c_orcamentos_vendedor_id_fkey": vendedor_id -> cad_equipe.id,
    }
}

table! {
    /// Quais ambientes entram em cada orçamento.
    c_orcamento_ambientes {
        ambiente_id: nullable Uuid,
        created_at: nullable DateTime<Utc>,
        id: defaulted Uuid,
        incluido: nullable bool,
        orcamento_id: nullable Uuid,
    }
    relationships {
        "c_orcamento_ambientes_ambiente_id_fkey": ambiente_id -> c_ambientes.id,
        "c_orcamento_ambientes_orcamento_id_fkey": orcamento_id -> c_orcamentos.id,
    }
}

table! {
    c_orcamento_custos_adicionais {
        created_at: nullable DateTime<Utc>,
        descricao_custo: required String,
        id: defaulted Uuid,
        orcamento_id: nullable Uuid,
        valor_custo: required Decimal,
    }
    relationships {
        "c_orcamento_custos_adicionais_orcamento_id_fkey": orcamento_id -> c_orcamentos.id,
    }
}

table! {
    /// Histórico de solicitações e decisões de aprovação de desconto.
    c_aprovacao_historico {
        acao: required AcaoAprovacao,
        aprovador_id: required Uuid,
        created_at: nullable DateTime<Utc>,
        id: defaulted Uuid,
        margem_resultante: nullable Decimal,
        nivel_aprovacao: nullable String,
        observacao: nullable String,
        orcamento_id: nullable Uuid,
        valor_desconto: nullable Decimal,
    }
    relationships {
        "c_aprovacao_historico_orcamento_id_fkey": orcamento_id -> c_orcamentos.id,
    }
}
