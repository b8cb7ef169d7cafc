use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mensagem de texto a ser enviada por uma instância
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendTextMessagePayload {
    pub number: String,
    pub text: String,
}

impl SendTextMessagePayload {
    /// O destinatário segue como informado (número, JID ou grupo `@g.us`), só sem espaços nas pontas
    pub fn new(number: &str, text: impl Into<String>) -> Self {
        Self {
            number: number.trim().to_string(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageKey {
    pub remote_jid: String,
    pub from_me: bool,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTextMessageResponseData {
    pub key: MessageKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_name: Option<String>,
    pub message: Map<String, Value>,
    #[serde(default)]
    pub context_info: Option<Value>,
    pub message_type: String,
    pub message_timestamp: i64,
    pub instance_id: String,
    pub source: String,
}

impl SendTextMessageResponseData {
    /// Texto da conversa, quando a mensagem é do tipo `conversation`
    pub fn conversation(&self) -> Option<&str> {
        self.message.get("conversation").and_then(Value::as_str)
    }
}

/// Resposta do envio de mensagem
///
/// O gateway não devolve sempre o mesmo formato. `message` e `data` são
/// extraídos quando reconhecidos; o corpo recebido fica em `body`.
#[derive(Debug, Clone, PartialEq)]
pub struct SendTextMessageResponse {
    pub message: Option<String>,
    pub data: Option<SendTextMessageResponseData>,
    pub body: Value,
}

impl From<Value> for SendTextMessageResponse {
    fn from(body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        let data = body.get("data").cloned().and_then(|data| serde_json::from_value(data).ok());

        Self { message, data, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_keeps_recipient_as_given() {
        let payload = SendTextMessagePayload::new("  +55 (11) 99999-0000 ", "Olá!");
        assert_eq!(payload.number, "+55 (11) 99999-0000");
        assert_eq!(payload.text, "Olá!");

        let grupo = SendTextMessagePayload::new("120363025246125486@g.us", "Oi, grupo");
        assert_eq!(grupo.number, "120363025246125486@g.us");
    }

    #[test]
    fn test_response_parsing() {
        let body = json!({
            "message": "Mensagem enviada",
            "data": {
                "key": { "remoteJid": "5511999990000@s.whatsapp.net", "fromMe": true, "id": "BAE5" },
                "pushName": "Loja",
                "message": { "conversation": "Olá!" },
                "contextInfo": null,
                "messageType": "conversation",
                "messageTimestamp": 1717000000,
                "instanceId": "inst-1",
                "source": "unknown"
            }
        });
        let response = SendTextMessageResponse::from(body.clone());

        assert_eq!(response.message.as_deref(), Some("Mensagem enviada"));
        let data = response.data.unwrap();
        assert!(data.key.from_me);
        assert_eq!(data.conversation(), Some("Olá!"));
        assert_eq!(data.context_info, None);
        assert_eq!(response.body, body);
    }

    #[test]
    fn test_response_with_unknown_shape_is_kept() {
        let body = json!({
            "key": { "remoteJid": "5511@s.whatsapp.net", "fromMe": true, "id": "K9" },
            "message": { "conversation": "Oi" },
            "messageTimestamp": "1717000000",
            "status": "PENDING"
        });
        let response = SendTextMessageResponse::from(body.clone());

        assert_eq!(response.message, None);
        assert_eq!(response.data, None);
        assert_eq!(response.body, body);

        let texto = SendTextMessageResponse::from(json!({ "data": "queued" }));
        assert_eq!(texto.data, None);
    }
}
