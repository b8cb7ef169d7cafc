use super::{required, validation};
use crate::utils::logging::{log_info, log_warning};
use crate::utils::AppResult;
use painel_api::types::{CreateInstancePayload, WebhookConfig};
use painel_api::{PainelClient, Transport};
use serde_json::{json, Value};

/// Dados do formulário de criação de instância
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NovaInstancia {
    pub instance_name: Option<String>,
    pub number: Option<String>,
    pub integration: Option<String>,
    pub chain: Option<String>,
    pub qrcode: Option<bool>,
    pub webhook_url: Option<String>,
    pub webhook_enabled: Option<bool>,
    /// Eventos separados por vírgula
    pub webhook_events: Option<String>,
}

impl NovaInstancia {
    pub fn into_payload(self) -> AppResult<CreateInstancePayload> {
        let name = required(
            self.instance_name.as_deref(),
            "instanceName",
            "Por favor, informe o nome da instância.",
        )?;

        let mut payload = CreateInstancePayload::new(name);
        if let Some(number) = self.number {
            payload.number = number.trim().to_string();
        }
        if let Some(integration) = self.integration.filter(|v| !v.trim().is_empty()) {
            payload.integration = integration;
        }
        if let Some(chain) = self.chain.filter(|v| !v.trim().is_empty()) {
            payload.chain = chain;
        }
        if let Some(qrcode) = self.qrcode {
            payload.qrcode = qrcode;
        }
        if let Some(url) = self.webhook_url.filter(|v| !v.trim().is_empty()) {
            payload.webhook.url = url;
        }
        if let Some(enabled) = self.webhook_enabled {
            payload.webhook.enabled = enabled;
        }
        payload.webhook.events = self
            .webhook_events
            .as_deref()
            .map(WebhookConfig::parse_events)
            .unwrap_or_default();

        Ok(payload)
    }
}

pub async fn listar<T: Transport>(client: &PainelClient<T>) -> AppResult<Value> {
    let instancias = client.conexoes_instancias().await?;
    log_info(&format!("{} instâncias encontradas", instancias.len()));
    Ok(serde_json::to_value(instancias)?)
}

pub async fn abertas<T: Transport>(client: &PainelClient<T>) -> AppResult<Value> {
    let instancias = client.instancias_abertas().await?;
    if instancias.is_empty() {
        log_warning("Nenhuma instância 'open' encontrada. Por favor, verifique suas conexões.");
    }
    Ok(serde_json::to_value(instancias)?)
}

pub async fn criar<T: Transport>(client: &PainelClient<T>, form: NovaInstancia) -> AppResult<Value> {
    let payload = form.into_payload()?;

    let outcome = client.criar_instancia(&payload).await?;
    let message = format!("Instância \"{}\" criada com sucesso!", payload.instance_name);
    log_info(&message);

    Ok(json!({
        "message": message,
        "resposta": outcome.into_value(),
    }))
}

pub async fn remover<T: Transport>(client: &PainelClient<T>, instance_name: Option<&str>) -> AppResult<Value> {
    let name = required(instance_name, "instanceName", "Por favor, informe o nome da instância.")?;

    let outcome = client.remover_instancia(name).await?;
    let message = format!("Instância \"{}\" removida com sucesso!", name);
    log_info(&message);

    Ok(json!({
        "message": message,
        "resposta": outcome.into_value(),
    }))
}

/// Escolhe a instância de envio: a informada ou a primeira com conexão aberta
pub async fn resolver_instancia<T: Transport>(
    client: &PainelClient<T>,
    instance_name: Option<&str>,
) -> AppResult<String> {
    if let Some(name) = instance_name.map(str::trim).filter(|n| !n.is_empty()) {
        return Ok(name.to_string());
    }

    client
        .instancias_abertas()
        .await?
        .into_iter()
        .next()
        .map(|instancia| instancia.name)
        .ok_or_else(|| {
            validation(
                "instancia",
                "Nenhuma instância 'open' encontrada. Por favor, verifique suas conexões.",
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults() {
        let payload = NovaInstancia {
            instance_name: Some(" loja ".into()),
            webhook_events: Some("A, B,,".into()),
            ..Default::default()
        }
        .into_payload()
        .unwrap();

        assert_eq!(payload.instance_name, "loja");
        assert_eq!(payload.integration, "WHATSAPP-BAILEYS");
        assert_eq!(payload.chain, "bailes");
        assert!(payload.qrcode);
        assert_eq!(payload.webhook.events, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_form_requires_name() {
        let err = NovaInstancia::default().into_payload().unwrap_err();
        assert_eq!(err.to_string(), "Por favor, informe o nome da instância.");
    }
}
