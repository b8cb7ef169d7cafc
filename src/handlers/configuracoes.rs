use super::{required, validation};
use crate::utils::logging::log_info;
use crate::utils::AppResult;
use painel_api::types::{CreateCompanyPayload, CreateUserPayload};
use painel_api::{PainelClient, Transport};
use serde_json::{json, Value};

pub async fn listar_empresas<T: Transport>(client: &PainelClient<T>) -> AppResult<Value> {
    Ok(serde_json::to_value(client.empresas().await?)?)
}

pub async fn criar_empresa<T: Transport>(client: &PainelClient<T>, payload: CreateCompanyPayload) -> AppResult<Value> {
    required(Some(payload.nome.as_str()), "nome", "Por favor, informe o nome da empresa.")?;
    required(
        Some(payload.email_responsavel.as_str()),
        "emailResponsavel",
        "Por favor, informe o e-mail do responsável.",
    )?;

    let payload = payload.normalized();
    let empresa = client.criar_empresa(&payload).await?;

    let message = format!("Empresa \"{}\" criada com sucesso!", payload.nome);
    log_info(&message);

    Ok(json!({ "message": message, "empresa": empresa }))
}

pub async fn listar_usuarios<T: Transport>(client: &PainelClient<T>) -> AppResult<Value> {
    Ok(serde_json::to_value(client.usuarios().await?)?)
}

pub async fn criar_usuario<T: Transport>(client: &PainelClient<T>, payload: CreateUserPayload) -> AppResult<Value> {
    if payload.empresa.trim().is_empty() {
        return Err(validation("empresa", "Por favor, selecione uma empresa."));
    }

    let payload = payload.dedup_modos();
    let usuario = client.criar_usuario(&payload).await?;

    let message = format!("Usuário \"{}\" criado com sucesso!", payload.nome);
    log_info(&message);

    Ok(json!({ "message": message, "usuario": usuario }))
}
