// src/schema/registry.rs
//
// O registro em tempo de execução: nome -> descritor. Tudo aqui é estático,
// montado em tempo de compilação e nunca alterado.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::shape::roundtrip;
use super::types::{ColumnType, Relationship, TableDef};
use crate::common::error::AppError;
use crate::models::{self, DbEnum, EnumName};

macro_rules! registry {
    ($( $variant:ident => $module:ident ),+ $(,)?) => {
        /// Conjunto fechado das tabelas do esquema `public`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TableName {
            $( $variant, )+
        }

        pub static TABLES: &[&TableDef] = &[ $( &models::$module::DEFINITION, )+ ];

        impl TableName {
            pub const ALL: &'static [TableName] = &[ $( TableName::$variant, )+ ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( TableName::$variant => stringify!($module), )+
                }
            }

            pub fn definition(self) -> &'static TableDef {
                match self {
                    $( TableName::$variant => &models::$module::DEFINITION, )+
                }
            }

            /// Decodifica o payload no Insert tipado da tabela e devolve a forma canônica.
            pub fn decode_insert(self, payload: Value) -> Result<Value, AppError> {
                let canonical = match self {
                    $( TableName::$variant => roundtrip::<models::$module::Insert>(payload)?, )+
                };
                Ok(canonical)
            }

            pub fn decode_update(self, payload: Value) -> Result<Value, AppError> {
                let canonical = match self {
                    $( TableName::$variant => roundtrip::<models::$module::Update>(payload)?, )+
                };
                Ok(canonical)
            }

            pub fn decode_row(self, payload: Value) -> Result<Value, AppError> {
                let canonical = match self {
                    $( TableName::$variant => roundtrip::<models::$module::Row>(payload)?, )+
                };
                Ok(canonical)
            }
        }

        impl FromStr for TableName {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( stringify!($module) => Ok(TableName::$variant), )+
                    _ => Err(AppError::UnknownTable(s.to_string())),
                }
            }
        }
    };
}

registry! {
    AuditoriaAlteracoes => auditoria_alteracoes,
    Bancos => bancos,
    CAmbientes => c_ambientes,
    CAprovacaoHistorico => c_aprovacao_historico,
    CClientes => c_clientes,
    CContratos => c_contratos,
    CLojas => c_lojas,
    COrcamentoAmbientes => c_orcamento_ambientes,
    COrcamentoCustosAdicionais => c_orcamento_custos_adicionais,
    COrcamentos => c_orcamentos,
    CParcelasContrato => c_parcelas_contrato,
    CadEmpresas => cad_empresas,
    CadEquipe => cad_equipe,
    CadMontadores => cad_montadores,
    CadSetores => cad_setores,
    CadTransportadoras => cad_transportadoras,
    ConfigHistoricoConfiguracoes => config_historico_configuracoes,
    ConfigLoja => config_loja,
    ConfigRegrasComissaoFaixa => config_regras_comissao_faixa,
    ConfigStatusOrcamento => config_status_orcamento,
    XmlProcessingLogs => xml_processing_logs,
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TableName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// =========================================================================
//  CONSULTAS POR NOME
// =========================================================================

pub fn tables() -> &'static [&'static TableDef] {
    TABLES
}

/// Descritor da tabela; nome desconhecido é erro, nunca forma vazia.
pub fn table(name: &str) -> Result<&'static TableDef, AppError> {
    Ok(name.parse::<TableName>()?.definition())
}

/// Valores permitidos do enum, na ordem declarada.
pub fn enum_values(name: &str) -> Result<&'static [&'static str], AppError> {
    Ok(name.parse::<EnumName>()?.values())
}

pub fn enum_values_of<E: DbEnum>() -> &'static [&'static str] {
    E::VALUES
}

pub fn relationships_of(name: &str) -> Result<&'static [Relationship], AppError> {
    Ok(table(name)?.relationships)
}

/// Quem aponta para esta tabela (o que ela "possui").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InboundRelationship {
    pub table: &'static str,
    pub relationship: &'static Relationship,
}

pub fn referenced_by(name: &str) -> Result<Vec<InboundRelationship>, AppError> {
    let target = table(name)?;

    let inbound = TABLES
        .iter()
        .flat_map(|def| {
            def.references_to(target.name).map(move |relationship| InboundRelationship {
                table: def.name,
                relationship,
            })
        })
        .collect();

    Ok(inbound)
}

// =========================================================================
//  AUTOVERIFICAÇÃO
// =========================================================================

/// Confere se o registro é coerente consigo mesmo.
pub fn check_integrity() -> Result<(), AppError> {
    let mut problems: Vec<String> = Vec::new();

    let mut seen = HashSet::new();
    for def in TABLES {
        if !seen.insert(def.name) {
            problems.push(format!("tabela '{}' declarada duas vezes", def.name));
        }

        let mut columns = HashSet::new();
        for column in def.columns {
            if !columns.insert(column.name) {
                problems.push(format!("{}.{} declarada duas vezes", def.name, column.name));
            }
        }

        for rel in def.relationships {
            for col in rel.columns {
                if def.column(col).is_none() {
                    problems.push(format!(
                        "{}: coluna local '{}' não existe",
                        rel.foreign_key_name, col
                    ));
                }
            }

            match table(rel.referenced_relation) {
                Ok(target) => {
                    for col in rel.referenced_columns {
                        if target.column(col).is_none() {
                            problems.push(format!(
                                "{}: coluna '{}.{}' não existe",
                                rel.foreign_key_name, target.name, col
                            ));
                        }
                    }
                }
                Err(_) => problems.push(format!(
                    "{}: tabela referenciada '{}' não existe",
                    rel.foreign_key_name, rel.referenced_relation
                )),
            }
        }
    }

    for name in EnumName::ALL {
        let values = name.values();
        let distinct: HashSet<_> = values.iter().collect();
        if values.is_empty() || distinct.len() != values.len() {
            problems.push(format!("enum '{}' vazio ou com valores repetidos", name));
        }
    }

    if problems.is_empty() {
        tracing::debug!("Registro íntegro: {} tabelas, {} enums", TABLES.len(), EnumName::ALL.len());
        return Ok(());
    }

    for problem in &problems {
        tracing::warn!("Esquema inconsistente: {}", problem);
    }
    Err(AppError::SchemaIntegrity(problems.join("; ")))
}

/// Colunas de um enum, em todas as tabelas.
pub fn columns_using_enum(name: EnumName) -> Vec<(&'static str, &'static str)> {
    TABLES
        .iter()
        .flat_map(move |def| {
            def.columns
                .iter()
                .filter(move |c| c.column_type == ColumnType::Enum(name))
                .map(move |c| (def.name, c.name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_name_round_trips() {
        assert_eq!(TableName::ALL.len(), TABLES.len());
        for name in TableName::ALL {
            assert_eq!(name.as_str().parse::<TableName>().unwrap(), *name);
            assert_eq!(name.definition().name, name.as_str());
        }
    }

    #[test]
    fn unknown_table_is_an_error_not_an_empty_shape() {
        let err = table("nao_existe").unwrap_err();
        assert!(matches!(err, AppError::UnknownTable(ref n) if n == "nao_existe"));
    }

    #[test]
    fn table_names_are_case_sensitive() {
        assert!("C_CLIENTES".parse::<TableName>().is_err());
    }

    #[test]
    fn enum_lookup_by_name() {
        assert_eq!(
            enum_values("perfil_usuario").unwrap(),
            &["VENDEDOR", "GERENTE", "MEDIDOR", "ADMIN_MASTER"]
        );
        assert_eq!(enum_values_of::<models::TipoVenda>(), &["NORMAL", "FUTURA"]);
        assert!(matches!(enum_values("perfil"), Err(AppError::UnknownEnum(_))));
    }

    #[test]
    fn integrity_holds() {
        check_integrity().unwrap();
    }

    #[test]
    fn enum_columns_are_found() {
        let cols = columns_using_enum(EnumName::TipoVenda);
        assert_eq!(cols, vec![("c_clientes", "tipo_venda")]);
    }
}
