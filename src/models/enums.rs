// src/models/enums.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::AppError;
use crate::schema::types::{ColumnType, SqlType};

/// Enum fechado do Postgres.
///
/// `VALUES` segue a ordem de declaração do `CREATE TYPE`, sem repetições.
pub trait DbEnum: Sized + Copy + 'static {
    const NAME: &'static str;
    const VALUES: &'static [&'static str];

    fn as_str(&self) -> &'static str;
}

// Gera os enums do banco e, junto, o `EnumName` que indexa todos eles.
// O literal de cada variante é o contrato com o banco e com o JSON.
macro_rules! db_enums {
    (
        $(
            $(#[$attr:meta])*
            $ty:ident => $name:literal {
                $( $variant:ident => $value:literal ),+ $(,)?
            }
        )+
    ) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
            #[sqlx(type_name = $name)]
            pub enum $ty {
                $(
                    #[serde(rename = $value)]
                    #[sqlx(rename = $value)]
                    $variant,
                )+
            }

            impl DbEnum for $ty {
                const NAME: &'static str = $name;
                const VALUES: &'static [&'static str] = &[$($value),+];

                fn as_str(&self) -> &'static str {
                    match self {
                        $( $ty::$variant => $value, )+
                    }
                }
            }

            impl SqlType for $ty {
                const COLUMN_TYPE: ColumnType = ColumnType::Enum(EnumName::$ty);
            }

            impl FromStr for $ty {
                type Err = AppError;

                // Comparação exata, sensível a maiúsculas.
                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    match s {
                        $( $value => Ok($ty::$variant), )+
                        _ => Err(AppError::InvalidEnumValue {
                            enum_name: $name,
                            value: s.to_string(),
                        }),
                    }
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+

        /// Nome de cada enum do esquema.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum EnumName {
            $(
                #[serde(rename = $name)]
                $ty,
            )+
        }

        impl EnumName {
            pub const ALL: &'static [EnumName] = &[$(EnumName::$ty),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( EnumName::$ty => $name, )+
                }
            }

            pub fn values(self) -> &'static [&'static str] {
                match self {
                    $( EnumName::$ty => <$ty as DbEnum>::VALUES, )+
                }
            }
        }

        impl FromStr for EnumName {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok(EnumName::$ty), )+
                    _ => Err(AppError::UnknownEnum(s.to_string())),
                }
            }
        }
    };
}

db_enums! {
    /// Ação registrada no histórico de aprovação de um orçamento.
    AcaoAprovacao => "acao_aprovacao" {
        Solicitado => "SOLICITADO",
        Aprovado => "APROVADO",
        Rejeitado => "REJEITADO",
        Cancelado => "CANCELADO",
    }

    CategoriaMontador => "categoria_montador" {
        Marceneiro => "MARCENEIRO",
        MontadorMoveis => "MONTADOR_MOVEIS",
        Eletricista => "ELETRICISTA",
        InstaladorGeral => "INSTALADOR_GERAL",
    }

    /// Formato da numeração de orçamentos e contratos da loja.
    FormatoNumeracao => "formato_numeracao" {
        Sequencial => "SEQUENCIAL",
        AnoSequencial => "ANO_SEQUENCIAL",
        Personalizado => "PERSONALIZADO",
    }

    /// Perfil de acesso de quem está na equipe da loja.
    PerfilUsuario => "perfil_usuario" {
        Vendedor => "VENDEDOR",
        Gerente => "GERENTE",
        Medidor => "MEDIDOR",
        AdminMaster => "ADMIN_MASTER",
    }

    StatusPagamento => "status_pagamento" {
        Pendente => "PENDENTE",
        Pago => "PAGO",
        Atrasado => "ATRASADO",
        Cancelado => "CANCELADO",
    }

    TipoVenda => "tipo_venda" {
        Normal => "NORMAL",
        Futura => "FUTURA",
    }
}

impl EnumName {
    // Pertinência por igualdade exata de string.
    pub fn contains(self, value: &str) -> bool {
        self.values().contains(&value)
    }
}

impl fmt::Display for EnumName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
