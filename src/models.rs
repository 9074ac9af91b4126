// src/models.rs

pub mod auditoria;
pub mod cadastros;
pub mod clientes;
pub mod contratos;
pub mod enums;
pub mod lojas;
pub mod vendas;

pub use auditoria::{auditoria_alteracoes, config_historico_configuracoes, xml_processing_logs};
pub use cadastros::{bancos, cad_empresas, cad_equipe, cad_montadores, cad_setores, cad_transportadoras};
pub use contratos::{c_contratos, c_parcelas_contrato};
pub use lojas::{c_lojas, config_loja, config_regras_comissao_faixa, config_status_orcamento};
pub use vendas::{
    c_ambientes, c_aprovacao_historico, c_clientes, c_orcamento_ambientes,
    c_orcamento_custos_adicionais, c_orcamentos,
};

pub use clientes::{AlteracaoCliente, NovoCliente};
pub use enums::{
    AcaoAprovacao, CategoriaMontador, DbEnum, EnumName, FormatoNumeracao, PerfilUsuario,
    StatusPagamento, TipoVenda,
};

use crate::schema::shape::{InsertOf, RowOf, UpdateOf};

// --- Atalhos para as linhas mais usadas ---
pub type Orcamento = RowOf<c_orcamentos::Table>;
pub type Cliente = RowOf<c_clientes::Table>;
pub type Ambiente = RowOf<c_ambientes::Table>;
pub type Contrato = RowOf<c_contratos::Table>;
pub type Equipe = RowOf<cad_equipe::Table>;
pub type Loja = RowOf<c_lojas::Table>;
pub type ConfigLoja = RowOf<config_loja::Table>;
pub type StatusOrcamento = RowOf<config_status_orcamento::Table>;

// --- Inserção ---
pub type OrcamentoInsert = InsertOf<c_orcamentos::Table>;
pub type ClienteInsert = InsertOf<c_clientes::Table>;
pub type AmbienteInsert = InsertOf<c_ambientes::Table>;
pub type ContratoInsert = InsertOf<c_contratos::Table>;
pub type EquipeInsert = InsertOf<cad_equipe::Table>;

// --- Atualização ---
pub type OrcamentoUpdate = UpdateOf<c_orcamentos::Table>;
pub type ClienteUpdate = UpdateOf<c_clientes::Table>;
pub type AmbienteUpdate = UpdateOf<c_ambientes::Table>;
pub type ContratoUpdate = UpdateOf<c_contratos::Table>;
pub type EquipeUpdate = UpdateOf<cad_equipe::Table>;
