//! Cliente do painel: envia requisições pelo transporte e normaliza as respostas

use crate::error::{ClientError, Result};
use crate::response::{normalize, Normalized};
use crate::transport::{ApiRequest, HttpConfig, HttpTransport, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Cliente para a API REST do painel
///
/// Cada chamada é independente: não há estado compartilhado entre requisições
/// em andamento, nem deduplicação, nem cancelamento.
#[derive(Clone)]
pub struct PainelClient<T: Transport = HttpTransport> {
    transport: T,
}

impl PainelClient<HttpTransport> {
    /// Cria um cliente sobre o transporte HTTP padrão
    pub fn http(config: HttpConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(transport))
    }

    /// Obtém a URL base configurada
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

impl<T: Transport> PainelClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Envia a requisição e normaliza a resposta
    ///
    /// Falhas de rede retornam [`ClientError::Transport`]; respostas de erro
    /// retornam [`ClientError::Api`].
    pub async fn execute(&self, request: ApiRequest) -> Result<Normalized> {
        let method = request.method.clone();
        let path = request.path.clone();

        let response = self.transport.send(request).await?;
        tracing::debug!("{} {} -> {}", method, path, response.status);

        Ok(normalize(response)?)
    }

    /// Envia a requisição e decodifica o resultado normalizado
    pub(crate) async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        self.execute(request).await?.decode()
    }
}

/// Serializa um payload para corpo JSON
pub(crate) fn to_body<P: Serialize>(payload: &P) -> Result<Value> {
    serde_json::to_value(payload).map_err(ClientError::Encode)
}

/// Codifica um segmento de caminho (nomes de instância)
pub(crate) fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedTransport;
    use super::*;
    use crate::error::TransportError;
    use crate::response::EmptyReason;
    use crate::transport::RawResponse;
    use serde_json::json;

    #[tokio::test]
    async fn test_execute_normalizes_success() {
        let client = PainelClient::new(ScriptedTransport::respond(RawResponse::json(200, "OK", r#"{"ok":true}"#)));

        let outcome = client.execute(ApiRequest::get("/anything")).await.unwrap();
        assert_eq!(outcome, Normalized::Structured(json!({ "ok": true })));
        assert_eq!(client.transport().last_request().path, "/anything");
    }

    #[tokio::test]
    async fn test_execute_surfaces_api_error() {
        let client = PainelClient::new(ScriptedTransport::respond(RawResponse::json(
            400,
            "Bad Request",
            r#"{"message":"Instância já existe"}"#,
        )));

        let err = client.execute(ApiRequest::post("/create/instance")).await.unwrap_err();
        match err {
            ClientError::Api(api) => {
                assert_eq!(api.message, "Instância já existe");
                assert_eq!(api.status, Some(400));
            }
            other => panic!("erro inesperado: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_normalized() {
        let transport = ScriptedTransport::default();
        transport.push(Err(TransportError::Other("connection refused".into())));
        let client = PainelClient::new(transport);

        let err = client.execute(ApiRequest::get("/users")).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(TransportError::Other(_))));
    }

    #[tokio::test]
    async fn test_independent_calls_each_get_their_own_response() {
        let transport = ScriptedTransport::default();
        transport.push(Ok(RawResponse::new(204, "No Content")));
        transport.push(Ok(RawResponse::new(200, "OK").with_content_type("text/plain").with_body("ok")));
        let client = PainelClient::new(transport);

        let (first, second) = tokio::join!(
            client.execute(ApiRequest::delete("/instances/delete/a")),
            client.execute(ApiRequest::delete("/instances/delete/b")),
        );

        let mut outcomes = vec![first.unwrap(), second.unwrap()];
        outcomes.sort_by_key(|o| o.is_empty());
        assert_eq!(outcomes[0], Normalized::RawText("ok".into()));
        assert_eq!(outcomes[1], Normalized::Empty(EmptyReason::NoContent));
        assert_eq!(client.transport().requests.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_path_segment_encoding() {
        assert_eq!(path_segment("minha instância/1"), "minha%20inst%C3%A2ncia%2F1");
        assert_eq!(path_segment("simples"), "simples");
    }
}
