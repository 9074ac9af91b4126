use serde_json::json;
use uuid::Uuid;

use lojas_schema::models::{c_clientes, NovoCliente};
use lojas_schema::schema::TableName;
use lojas_schema::services::payload_service::{
    normalize_insert, normalize_update, validate_insert, validate_update,
};
use lojas_schema::services::Operation;
use lojas_schema::AppError;

fn orcamento_minimo() -> serde_json::Value {
    json!({
        "numero": "ORC-2024-0001",
        "comissao_gerente": 1.5,
        "comissao_vendedor": 3,
        "custo_fabrica": 12000,
        "custo_frete": 350,
        "custo_medidor": 120,
        "custo_montador": 900,
        "desconto_percentual": 5,
        "margem_lucro": 32.5,
        "valor_ambientes": 18000,
        "valor_final": 17100,
    })
}

#[test]
fn orcamento_with_required_columns_is_accepted() {
    let table: TableName = "c_orcamentos".parse().unwrap();
    validate_insert(table, &orcamento_minimo()).unwrap();
}

#[test]
fn orcamento_without_numero_is_rejected() {
    let mut payload = orcamento_minimo();
    payload.as_object_mut().unwrap().remove("numero");

    let err = validate_insert(TableName::COrcamentos, &payload).unwrap_err();
    let codes = err.codes();

    assert_eq!(codes.len(), 1);
    assert_eq!(codes["numero"], vec!["required"]);
}

#[test]
fn typed_insert_passes_dynamic_validation() {
    let cliente: NovoCliente = serde_json::from_value(json!({
        "nome": "Ana Paula",
        "cpf_cnpj": "012.345.678-90",
        "tipo_venda": "FUTURA",
    }))
    .unwrap();

    let insert: c_clientes::Insert = cliente.into_insert(Uuid::new_v4()).unwrap();
    let payload = serde_json::to_value(&insert).unwrap();

    let normalized = normalize_insert(TableName::CClientes, payload.clone()).unwrap();
    assert_eq!(normalized, payload);
    assert_eq!(normalized["cpf_cnpj"], json!("01234567890"));
}

#[test]
fn clearing_a_nullable_column_survives_normalization() {
    let out = normalize_update(
        TableName::CClientes,
        json!({ "email": null, "cidade": "Joinville" }),
    )
    .unwrap();

    assert_eq!(out, json!({ "email": null, "cidade": "Joinville" }));
}

#[test]
fn enum_outside_the_closed_set_is_rejected() {
    let err = validate_update(TableName::CadEquipe, &json!({ "perfil": "ESTAGIARIO" })).unwrap_err();
    assert_eq!(err.codes()["perfil"], vec!["invalid_enum"]);

    let err = validate_update(TableName::CClientes, &json!({ "tipo_venda": "normal" })).unwrap_err();
    assert_eq!(err.codes()["tipo_venda"], vec!["invalid_enum"]);
}

#[test]
fn unknown_column_is_reported_on_the_payload() {
    let err = validate_update(TableName::CLojas, &json!({ "cnpj": "00.000.000/0001-00" })).unwrap_err();

    assert!(matches!(err, AppError::ValidationError(_)));
    assert_eq!(err.codes()["payload"], vec!["unknown_column"]);
    assert_eq!(err.details()["payload"], vec!["Coluna desconhecida."]);
}

#[test]
fn operation_names() {
    assert_eq!("insert".parse::<Operation>().unwrap(), Operation::Insert);
    assert_eq!(Operation::Row.to_string(), "row");
}
