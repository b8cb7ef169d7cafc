//! Tipos de erro para o crate painel_api

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Erro normalizado da API
///
/// É o registro `{message, status?, details?}` entregue aos chamadores quando
/// o servidor responde com status de falha ou com um corpo JSON inválido.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{message}")]
pub struct ApiError {
    /// Mensagem legível para o operador
    pub message: String,

    /// Status HTTP da resposta (ausente para corpo JSON inválido)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Corpo devolvido pelo servidor (JSON quando possível)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            details: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Falhas de rede (conexão recusada, timeout, leitura do corpo)
///
/// Não passam pela normalização: chegam ao chamador como o transporte as produziu.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Erro do cliente HTTP
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Erro de transportes alternativos (ex.: transportes de teste)
    #[error("Transport failure: {0}")]
    Other(String),
}

/// Erros do cliente do painel
#[derive(Debug, Error)]
pub enum ClientError {
    /// Falha de rede
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Resposta normalizada como erro
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Falha ao serializar o corpo da requisição
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Resposta bem-sucedida cujo formato não corresponde ao tipo esperado
    #[error("Unexpected response shape for {expected}: {source}")]
    Decode {
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Erro de configuração do cliente
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Status HTTP associado, quando o erro veio do servidor
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api(err) => err.status,
            _ => None,
        }
    }

    /// Registro `{message, status?, details?}` para apresentação ao operador
    pub fn to_api_error(&self) -> ApiError {
        match self {
            ClientError::Api(err) => err.clone(),
            other => ApiError::new(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(TransportError::Http(err))
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_serialization_skips_absent_fields() {
        let err = ApiError::new("Invalid JSON response from server.");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({ "message": "Invalid JSON response from server." })
        );

        let err = ApiError::new("Not Found")
            .with_status(404)
            .with_details(json!({ "message": "Not Found" }));
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({ "message": "Not Found", "status": 404, "details": { "message": "Not Found" } })
        );
    }

    #[test]
    fn test_client_error_exposes_api_status() {
        let err: ClientError = ApiError::new("boom").with_status(500).into();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_api_error().message, "boom");

        let err: ClientError = TransportError::Other("connection refused".into()).into();
        assert_eq!(err.status(), None);
        assert_eq!(err.to_api_error().message, "Transport failure: connection refused");
    }
}
