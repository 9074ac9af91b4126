// src/models/cadastros.rs
//
// Cadastros de apoio: empresas, equipe, montadores, setores, transportadoras
// e bancos.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::enums::{CategoriaMontador, PerfilUsuario};
use crate::schema::macros::table;

table! {
    bancos {
        ativo: nullable bool,
        codigo: nullable String,
        criado_em: nullable DateTime<Utc>,
        descricao: nullable String,
        id: defaulted Uuid,
        nome: required String,
    }
    relationships {}
}

table! {
    /// Empresa dona de uma ou mais lojas.
    cad_empresas {
        cnpj: nullable String,
        created_at: nullable DateTime<Utc>,
        id: defaulted Uuid,
        nome: required String,
        updated_at: nullable DateTime<Utc>,
    }
    relationships {}
}

table! {
    /// Equipe da loja: vendedores, gerentes, medidores e administradores.
    cad_equipe {
        ativo: nullable bool,
        comissao_percentual_gerente: nullable Decimal,
        comissao_percentual_vendedor: nullable Decimal,
        created_at: nullable DateTime<Utc>,
        email: nullable String,
        id: defaulted Uuid,
        limite_desconto: nullable Decimal,
        loja_id: nullable Uuid,
        nome: required String,
        perfil: required PerfilUsuario,
        setor_id: nullable Uuid,
        tem_minimo_garantido: nullable bool,
        updated_at: nullable DateTime<Utc>,
        valor_medicao: nullable Decimal,
        valor_minimo_garantido: nullable Decimal,
    }
    relationships {
        "cad_equipe_loja_id_fkey": loja_id -> c_lojas.id,
        "cad_equipe_setor_id_fkey": setor_id -> cad_setores.id,
    }
}

table! {
    cad_montadores {
        ativo: nullable bool,
        categoria: nullable CategoriaMontador,
        created_at: nullable DateTime<Utc>,
        id: defaulted Uuid,
        loja_id: nullable Uuid,
        nome: required String,
        valor: required Decimal,
    }
    relationships {
        "cad_montadores_loja_id_fkey": loja_id -> c_lojas.id,
    }
}

table! {
    cad_setores {
        id: defaulted Uuid,
        loja_id: nullable Uuid,
        nome: required String,
    }
    relationships {
        "cad_setores_loja_id_fkey": loja_id -> c_lojas.id,
    }
}

table! {
    cad_transportadoras {
        ativo: nullable bool,
        created_at: nullable DateTime<Utc>,
        id: defaulted Uuid,
        loja_id: nullable Uuid,
        nome: required String,
        valor_fixo: required Decimal,
    }
    relationships {
        "cad_transportadoras_loja_id_fkey": loja_id -> c_lojas.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equipe_insert_needs_nome_and_perfil() {
        let insert = cad_equipe::Insert::new("Ana".to_string(), PerfilUsuario::Gerente);
        assert_eq!(
            serde_json::to_value(&insert).unwrap(),
            json!({ "nome": "Ana", "perfil": "GERENTE" })
        );

        let bad = serde_json::from_value::<cad_equipe::Insert>(json!({
            "nome": "Ana",
            "perfil": "gerente",
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn montador_update_can_clear_categoria() {
        let update: cad_montadores::Update = serde_json::from_value(json!({
            "categoria": null,
            "valor": 350.0,
        }))
        .unwrap();

        assert_eq!(update.categoria, Some(None));
        assert_eq!(update.valor, Some(Decimal::from(350)));
        assert_eq!(update.nome, None);
    }

    #[test]
    fn setor_row_keeps_nullable_loja() {
        let row: cad_setores::Row = serde_json::from_value(json!({
            "id": "9c1b2d3e-4f5a-4b6c-8d7e-0f1a2b3c4d5e",
            "loja_id": null,
            "nome": "Projetos",
        }))
        .unwrap();

        assert_eq!(row.loja_id, None);
        assert_eq!(row.nome, "Projetos");
    }
}
