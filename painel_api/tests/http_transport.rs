//! Testes de integração do transporte HTTP contra um servidor httpmock

use httpmock::prelude::*;
use painel_api::response::{EmptyReason, INVALID_JSON_MESSAGE};
use painel_api::types::{CreateCompanyPayload, StatusPagamento};
use painel_api::{ClientError, HttpConfig, Normalized, PainelClient, TransportError};
use serde_json::json;

fn client_for(server: &MockServer) -> PainelClient {
    PainelClient::http(HttpConfig::new(server.url("/api/v1/")).with_cookie("sessao=abc123")).unwrap()
}

#[tokio::test]
async fn test_get_with_query_and_cookie() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/csv/agendamentos/status_pagamento")
                .query_param("status_pagamento", "pago")
                .header("cookie", "sessao=abc123");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"id":3,"nome":"Ana","telefone":"5511","documento":"1","data_contrato":"2025-02-01","tipo_contrato":"Mensal","valor_mensalidade":"80.00","statusPagamento":"pago"}]"#);
        })
        .await;

    let client = client_for(&server);
    let agendamentos = client.agendamentos_por_status(StatusPagamento::Pago).await.unwrap();

    mock.assert_async().await;
    assert_eq!(agendamentos.len(), 1);
    assert_eq!(agendamentos[0].nome.as_deref(), Some("Ana"));
    assert_eq!(agendamentos[0].status(), Some(StatusPagamento::Pago));
}

#[tokio::test]
async fn test_query_values_are_encoded() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/csv/agendamentos/documento")
                .query_param("documento", "123.456/78 9");
            then.status(200).header("content-type", "application/json").body("[]");
        })
        .await;

    let agendamentos = client_for(&server).agendamentos_por_documento("123.456/78 9").await.unwrap();

    mock.assert_async().await;
    assert!(agendamentos.is_empty());
}

#[tokio::test]
async fn test_post_json_sets_content_type() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/companies/create")
                .header("content-type", "application/json")
                .json_body(json!({
                    "nome": "Acme",
                    "cnpj": null,
                    "cpf": "12345678900",
                    "emailResponsavel": "a@acme.com",
                    "estadoPagamento": 0,
                    "planoContratado": "BASIC"
                }));
            then.status(201)
                .header("content-type", "application/json")
                .body(r#"{"id":"c9","nome":"Acme","cnpj":null,"cpf":"12345678900","nomeResponsavel":null,"emailResponsavel":"a@acme.com","estadoPagamento":0,"planoContratado":"BASIC"}"#);
        })
        .await;

    let payload = CreateCompanyPayload {
        nome: "Acme".into(),
        cnpj: Some("  ".into()),
        cpf: Some("12345678900".into()),
        nome_responsavel: None,
        email_responsavel: "a@acme.com".into(),
        estado_pagamento: 0,
        plano_contratado: "BASIC".into(),
    }
    .normalized();

    let company = client_for(&server).criar_empresa(&payload).await.unwrap();

    mock.assert_async().await;
    assert_eq!(company.id.as_deref(), Some("c9"));
}

#[tokio::test]
async fn test_multipart_upload() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/csv/upload")
                .header_exists("content-type")
                .body_contains("filename=\"agenda.csv\"")
                .body_contains("nome_cliente,telefone");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"message":"Arquivo processado","linhas":2}"#);
        })
        .await;

    let outcome = client_for(&server)
        .upload_csv("agenda.csv", b"nome_cliente,telefone\nAna,5511\n".to_vec())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(outcome, Normalized::Structured(json!({ "message": "Arquivo processado", "linhas": 2 })));
}

#[tokio::test]
async fn test_delete_no_content() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path_contains("/api/v1/instances/delete/loja");
            then.status(204);
        })
        .await;

    let outcome = client_for(&server).remover_instancia("loja centro").await.unwrap();

    mock.assert_async().await;
    assert_eq!(outcome, Normalized::Empty(EmptyReason::NoContent));
}

#[tokio::test]
async fn test_error_status_with_json_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/users/create");
            then.status(409)
                .header("content-type", "application/json")
                .body(r#"{"message":"Username já cadastrado","code":"DUPLICATE"}"#);
        })
        .await;

    let payload = serde_json::from_value(json!({
        "nome": "Ana", "username": "ana", "empresa": "Acme", "nascimento": "1990-01-01",
        "email": "ana@acme.com", "telefone": "5511", "senha": "x", "tipo": "0",
        "cpf": "1", "ativo": true, "modos": ["CHAT"]
    }))
    .unwrap();

    let err = client_for(&server).criar_usuario(&payload).await.unwrap_err();
    let api = err.to_api_error();
    assert_eq!(api.message, "Username já cadastrado");
    assert_eq!(api.status, Some(409));
    assert_eq!(api.details, Some(json!({ "message": "Username já cadastrado", "code": "DUPLICATE" })));
}

#[tokio::test]
async fn test_error_status_with_html_body_uses_reason_phrase() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/companies");
            then.status(502).header("content-type", "text/html").body("<html>bad gateway</html>");
        })
        .await;

    let err = client_for(&server).empresas().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.to_api_error().message, "Bad Gateway");
}

#[tokio::test]
async fn test_invalid_json_success_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/instances/conection");
            then.status(200).header("content-type", "application/json").body("{");
        })
        .await;

    let err = client_for(&server).conexoes_instancias().await.unwrap_err();
    match err {
        ClientError::Api(api) => {
            assert_eq!(api.message, INVALID_JSON_MESSAGE);
            assert_eq!(api.status, None);
        }
        other => panic!("erro inesperado: {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // porta reservada sem servidor escutando
    let client = PainelClient::http(HttpConfig::new("http://127.0.0.1:9/api/v1").with_timeouts(2, 1)).unwrap();

    let err = client.agendamentos().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(TransportError::Http(_))));
}
