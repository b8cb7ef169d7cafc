use super::instancias::resolver_instancia;
use super::required;
use crate::utils::logging::log_info;
use crate::utils::AppResult;
use painel_api::types::SendTextMessagePayload;
use painel_api::{PainelClient, Transport};
use serde_json::{json, Value};

/// Envia uma mensagem de texto
///
/// Sem instância explícita, usa a primeira instância com conexão aberta.
pub async fn enviar<T: Transport>(
    client: &PainelClient<T>,
    instance_name: Option<&str>,
    number: Option<&str>,
    text: Option<&str>,
) -> AppResult<Value> {
    let number = required(number, "number", "Por favor, insira o número do destinatário.")?;
    let text = required(text, "text", "Por favor, insira o texto da mensagem.")?;

    let payload = SendTextMessagePayload::new(number, text);

    let instance = resolver_instancia(client, instance_name).await?;
    let response = client.enviar_texto(&instance, &payload).await?;

    let message = response
        .message
        .unwrap_or_else(|| "Mensagem enviada com sucesso!".to_string());
    log_info(&format!("{} (instância: {})", message, instance));

    Ok(json!({
        "instancia": instance,
        "message": message,
        "resposta": response.body,
    }))
}
