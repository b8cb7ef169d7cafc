//! Normalização de respostas HTTP
//!
//! Toda resposta concluída vira exatamente um de dois formatos:
//! [`Normalized`] (sucesso) ou [`ApiError`] (falha). O chamador nunca recebe
//! primitivas do transporte.
//!
//! Regras:
//!
//! 1. Status fora de 2xx → [`ApiError`] com a melhor mensagem disponível
//!    (`message` do corpo JSON, senão o texto do status, senão `API Error: {status}`).
//! 2. `Content-Type` JSON → corpo vazio vira [`Normalized::Empty`]; corpo
//!    inválido vira [`ApiError`] com [`INVALID_JSON_MESSAGE`].
//! 3. 204 → [`Normalized::Empty`] com [`EmptyReason::NoContent`].
//! 4. Demais casos → [`Normalized::RawText`].

use crate::error::{ApiError, ClientError};
use crate::transport::RawResponse;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

/// Mensagem fixa para corpo declarado como JSON que não pôde ser interpretado
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON response from server.";

/// Mensagem associada a respostas 204
pub const NO_CONTENT_MESSAGE: &str = "Operation successful (204 No Content).";

/// Por que uma resposta bem-sucedida não trouxe dados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// `Content-Type` JSON com corpo de tamanho zero
    ZeroLengthBody,
    /// Status 204 (operação concluída sem conteúdo)
    NoContent,
}

/// Resultado bem-sucedido de uma resposta normalizada
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// Corpo JSON interpretado (objeto, array ou escalar)
    Structured(Value),
    /// Placeholder vazio
    Empty(EmptyReason),
    /// Corpo não-JSON mantido como texto
    RawText(String),
}

impl Normalized {
    pub fn is_empty(&self) -> bool {
        matches!(self, Normalized::Empty(_))
    }

    /// Mensagem de sucesso, quando a resposta é um 204
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Normalized::Empty(EmptyReason::NoContent) => Some(NO_CONTENT_MESSAGE),
            _ => None,
        }
    }

    /// Projeção JSON no formato que os chamadores do painel consomem
    ///
    /// - `Structured(v)` → `v`
    /// - `Empty(ZeroLengthBody)` → `{}`
    /// - `Empty(NoContent)` → `{"success": true, "message": ...}`
    /// - `RawText(t)` → `{"data": t}`
    pub fn into_value(self) -> Value {
        match self {
            Normalized::Structured(value) => value,
            Normalized::Empty(EmptyReason::ZeroLengthBody) => Value::Object(Map::new()),
            Normalized::Empty(EmptyReason::NoContent) => json!({
                "success": true,
                "message": NO_CONTENT_MESSAGE,
            }),
            Normalized::RawText(text) => json!({ "data": text }),
        }
    }

    /// Decodifica a projeção JSON no tipo esperado pelo endpoint
    ///
    /// Um corpo vazio projetado como `{}` não é aceito como lista: o erro é
    /// sinalizado em vez de entregar um objeto a quem espera um array.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        let expected = std::any::type_name::<T>();
        let was_empty = self.is_empty();

        serde_json::from_value(self.into_value()).map_err(|source| {
            if was_empty {
                tracing::warn!(
                    "Resposta vazia não corresponde ao tipo esperado {}: {}",
                    expected,
                    source
                );
            }
            ClientError::Decode { expected, source }
        })
    }
}

fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// Converte uma resposta concluída em sucesso normalizado ou erro da API
pub fn normalize(response: RawResponse) -> Result<Normalized, ApiError> {
    let status = response.status;

    if !(200..300).contains(&status) {
        return Err(failure(response));
    }

    if is_json_content_type(response.content_type.as_deref()) {
        let text = response.text();

        if text.is_empty() {
            let reason = if status == 204 {
                EmptyReason::NoContent
            } else {
                EmptyReason::ZeroLengthBody
            };
            return Ok(Normalized::Empty(reason));
        }

        return match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(Normalized::Structured(value)),
            Err(e) => {
                tracing::error!("Failed to parse JSON response: {} ({})", text, e);
                let error = ApiError::new(INVALID_JSON_MESSAGE);
                tracing::error!("API Error: {:?}", error);
                Err(error)
            }
        };
    }

    if status == 204 {
        return Ok(Normalized::Empty(EmptyReason::NoContent));
    }

    Ok(Normalized::RawText(response.text()))
}

/// Texto de `message` no corpo de erro: string, ou lista de strings unidas por vírgula
fn error_message(message: &Value) -> Option<String> {
    let text = match message {
        Value::String(text) => text.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn failure(response: RawResponse) -> ApiError {
    let status = response.status;
    let fallback = format!("API Error: {}", status);

    let error = match serde_json::from_slice::<Value>(&response.body) {
        Ok(details) => {
            let message = details.get("message").and_then(error_message).unwrap_or(fallback);

            ApiError::new(message).with_status(status).with_details(details)
        }
        Err(_) => {
            let message = if response.status_text.is_empty() {
                fallback
            } else {
                response.status_text.clone()
            };

            ApiError::new(message)
                .with_status(status)
                .with_details(json!({ "message": response.status_text }))
        }
    };

    tracing::error!("API Error: {:?}", error);
    error
}
