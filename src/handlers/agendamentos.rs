use super::{required, validation};
use crate::utils::logging::{log_api_error, log_info};
use crate::utils::AppResult;
use chrono::NaiveDate;
use painel_api::types::{ResumoPagamentos, StatusPagamento};
use painel_api::{PainelClient, Transport};
use serde_json::{json, Value};
use std::path::Path;

/// Critério de busca de agendamentos
#[derive(Debug, Clone, PartialEq)]
pub enum BuscaAgendamentos {
    Todos,
    Telefone(Option<String>),
    Status(Option<String>),
    Documento(Option<String>),
}

fn parse_date(value: &str, field: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| validation(field, &format!("Data inválida: {} (use AAAA-MM-DD).", value)))
}

/// Estimativa de valores no período
pub async fn estimativa<T: Transport>(
    client: &PainelClient<T>,
    data_inicial: Option<&str>,
    data_final: Option<&str>,
) -> AppResult<Value> {
    const MSG: &str = "Por favor, selecione as datas inicial e final.";
    let inicial = parse_date(required(data_inicial, "dataInicial", MSG)?, "dataInicial")?;
    let final_ = parse_date(required(data_final, "dataFinal", MSG)?, "dataFinal")?;

    if inicial > final_ {
        return Err(validation(
            "dataInicial",
            "A data inicial deve ser anterior ou igual à data final.",
        ));
    }

    let estimativa = client.estimativa_valor(inicial, final_).await.map_err(|e| {
        log_api_error("estimativa_valor", e.status(), &e.to_string());
        e
    })?;

    log_info("Estimativa carregada com sucesso!");

    Ok(json!({
        "dataInicial": inicial.to_string(),
        "dataFinal": final_.to_string(),
        "estimativa": estimativa,
        "total": estimativa.total(),
    }))
}

/// Busca agendamentos pelo critério informado
pub async fn buscar<T: Transport>(client: &PainelClient<T>, busca: BuscaAgendamentos) -> AppResult<Value> {
    const MSG_TERMO: &str = "Por favor, insira um termo de busca.";

    let (agendamentos, descricao) = match &busca {
        BuscaAgendamentos::Todos => (client.agendamentos().await?, "Todos os agendamentos carregados.".to_string()),
        BuscaAgendamentos::Telefone(termo) => {
            let telefone = required(termo.as_deref(), "telefone", MSG_TERMO)?;
            (
                client.agendamentos_por_telefone(telefone).await?,
                format!("Agendamentos para o telefone {} carregados.", telefone),
            )
        }
        BuscaAgendamentos::Status(status) => {
            let status = required(status.as_deref(), "status_pagamento", "Por favor, selecione um status.")?;
            let status: StatusPagamento = status.parse().map_err(|msg: String| validation("status_pagamento", &msg))?;
            (
                client.agendamentos_por_status(status).await?,
                format!("Agendamentos com status {} carregados.", status),
            )
        }
        BuscaAgendamentos::Documento(termo) => {
            let documento = required(termo.as_deref(), "documento", MSG_TERMO)?;
            (
                client.agendamentos_por_documento(documento).await?,
                format!("Agendamentos para o documento {} carregados.", documento),
            )
        }
    };

    log_info(&descricao);

    Ok(serde_json::to_value(agendamentos)?)
}

/// Estatísticas de pagamento com total e percentuais
pub async fn estatisticas<T: Transport>(client: &PainelClient<T>) -> AppResult<Value> {
    let itens = client.estatisticas_pagamentos_por_status().await?;
    let resumo = ResumoPagamentos::from_estatisticas(&itens);

    log_info("Estatísticas carregadas com sucesso!");

    Ok(json!({
        "itens": itens,
        "total": resumo.total,
        "percentuais": resumo.itens,
    }))
}

/// Envia um arquivo CSV de agendamentos
pub async fn upload_csv<T: Transport>(client: &PainelClient<T>, path: Option<&Path>) -> AppResult<Value> {
    const MSG: &str = "Por favor, selecione um arquivo CSV para upload.";

    let path = match path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(validation("file", MSG)),
    };

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(validation("file", "Somente arquivos .csv"));
    }

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload.csv")
        .to_string();
    let bytes = tokio::fs::read(path).await?;

    let outcome = client.upload_csv(&file_name, bytes).await?;
    let message = format!("Arquivo \"{}\" enviado com sucesso!", file_name);
    log_info(&message);

    Ok(json!({
        "message": message,
        "resposta": outcome.into_value(),
    }))
}
