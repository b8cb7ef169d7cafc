//! Transporte HTTP injetável
//!
//! O cliente depende apenas da capacidade `send(request) -> response`
//! ([`Transport`]); a implementação de produção usa `reqwest`.

use crate::error::TransportError;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, Method};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// Corpo de uma requisição
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    None,
    Json(Value),
    Multipart(FilePart),
}

/// Arquivo enviado como `multipart/form-data`
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    /// Arquivo CSV no campo `file`, como o endpoint de upload espera
    pub fn csv(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: "file".to_string(),
            file_name: file_name.into(),
            mime: "text/csv".to_string(),
            bytes,
        }
    }
}

/// Requisição lógica: método, caminho relativo à URL base, query e corpo
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adiciona um parâmetro de query (codificado pelo transporte)
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, part: FilePart) -> Self {
        self.body = RequestBody::Multipart(part);
        self
    }
}

/// Resposta HTTP concluída, com o corpo já lido por completo
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            content_type: None,
            body: Vec::new(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Resposta JSON de conveniência (usada sobretudo em testes)
    pub fn json(status: u16, status_text: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, status_text)
            .with_content_type("application/json; charset=utf-8")
            .with_body(body)
    }

    /// Corpo decodificado como UTF-8 (bytes inválidos viram U+FFFD)
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Capacidade de enviar uma requisição e obter a resposta concluída
///
/// Falhas de rede são devolvidas como [`TransportError`]; qualquer resposta
/// recebida, inclusive 4xx/5xx, é `Ok`.
pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// Configuração do transporte HTTP
#[derive(Debug, Clone, PartialEq)]
pub struct HttpConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Cabeçalho `Cookie` repassado de forma opaca
    pub cookie: Option<String>,
}

impl HttpConfig {
    /// Timeouts padrão: total 30s, conexão 5s
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
            cookie: None,
        }
    }

    pub fn with_timeouts(mut self, total_timeout_secs: u64, connect_timeout_secs: u64) -> Self {
        self.timeout = Duration::from_secs(total_timeout_secs);
        self.connect_timeout = Duration::from_secs(connect_timeout_secs);
        self
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }
}

/// Transporte de produção sobre `reqwest`
///
/// Mantém um cookie store no cliente, equivalente a `credentials: 'include'`.
#[derive(Clone)]
pub struct HttpTransport {
    http_client: HttpClient,
    base_url: String,
    cookie: Option<String>,
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Result<Self, TransportError> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cookie: config.cookie,
        })
    }

    /// Obtém a URL base (sem barra final)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Junta a URL base e o caminho do endpoint
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = self.build_url(&request.path);

        tracing::debug!("{} {}", request.method, url);

        let mut builder = self.http_client.request(request.method, &url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(cookie) = &self.cookie {
            builder = builder.header(COOKIE, cookie);
        }

        builder = match request.body {
            RequestBody::None => builder,
            RequestBody::Json(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(&body).map_err(|e| TransportError::Other(e.to_string()))?),
            RequestBody::Multipart(part) => {
                let file = Part::bytes(part.bytes)
                    .file_name(part.file_name)
                    .mime_str(&part.mime)?;
                builder.multipart(Form::new().part(part.field, file))
            }
        };

        let response = builder.send().await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            content_type,
            body,
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        self.dispatch(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_building() {
        let transport = HttpTransport::new(HttpConfig::new("http://localhost:3000/api/v1/")).unwrap();

        assert_eq!(transport.base_url(), "http://localhost:3000/api/v1");
        assert_eq!(transport.build_url("csv/agendamentos"), "http://localhost:3000/api/v1/csv/agendamentos");
        assert_eq!(transport.build_url("/users"), "http://localhost:3000/api/v1/users");
    }

    #[test]
    fn test_http_config_defaults() {
        let config = HttpConfig::new("http://api").with_cookie("sid=abc");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.cookie.as_deref(), Some("sid=abc"));

        let config = config.with_timeouts(60, 10);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::post("/companies/create").json(json!({ "nome": "Acme" }));
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body, RequestBody::Json(json!({ "nome": "Acme" })));

        let request = ApiRequest::get("/csv/agendamentos/telefone").query("telefone", "5511");
        assert_eq!(request.query, vec![("telefone".to_string(), "5511".to_string())]);
        assert_eq!(request.body, RequestBody::None);
    }
}
