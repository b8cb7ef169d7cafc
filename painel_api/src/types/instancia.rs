use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status de conexão que indica instância pronta para envio
pub const CONNECTION_OPEN: &str = "open";

/// Configuração de webhook de uma nova instância
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub enabled: bool,
    pub url: String,
    pub events: Vec<String>,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "http://host.docker.internal:3000/webhook".to_string(),
            events: Vec::new(),
        }
    }
}

impl WebhookConfig {
    /// Lê eventos separados por vírgula, descartando entradas vazias
    pub fn parse_events(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|event| !event.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Payload de criação de instância do gateway de mensagens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstancePayload {
    pub instance_name: String,
    pub qrcode: bool,
    pub number: String,
    pub integration: String,
    pub webhook: WebhookConfig,
    pub chain: String,
}

impl CreateInstancePayload {
    /// Payload com os valores padrão do formulário de criação
    pub fn new(instance_name: impl Into<String>) -> Self {
        Self {
            instance_name: instance_name.into(),
            qrcode: true,
            number: String::new(),
            integration: "WHATSAPP-BAILEYS".to_string(),
            webhook: WebhookConfig::default(),
            chain: "bailes".to_string(),
        }
    }
}

/// Conexão de instância como listada pela API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedInstanceConnection {
    pub id: String,
    pub name: String,
    pub connection_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_jid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl FetchedInstanceConnection {
    pub fn is_open(&self) -> bool {
        self.connection_status == CONNECTION_OPEN
    }
}

/// Mantém apenas as instâncias com conexão aberta
pub fn open_instances(instances: Vec<FetchedInstanceConnection>) -> Vec<FetchedInstanceConnection> {
    instances.into_iter().filter(FetchedInstanceConnection::is_open).collect()
}
