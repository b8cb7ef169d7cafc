//! Endpoints de configurações: empresas e usuários

use crate::client::{to_body, PainelClient};
use crate::error::Result;
use crate::transport::{ApiRequest, Transport};
use crate::types::{Company, CreateCompanyPayload, CreateUserPayload, User};

impl<T: Transport> PainelClient<T> {
    pub async fn criar_empresa(&self, payload: &CreateCompanyPayload) -> Result<Company> {
        let request = ApiRequest::post("/companies/create").json(to_body(payload)?);
        self.fetch(request).await
    }

    pub async fn empresas(&self) -> Result<Vec<Company>> {
        self.fetch(ApiRequest::get("/companies")).await
    }

    pub async fn criar_usuario(&self, payload: &CreateUserPayload) -> Result<User> {
        let request = ApiRequest::post("/users/create").json(to_body(payload)?);
        self.fetch(request).await
    }

    pub async fn usuarios(&self) -> Result<Vec<User>> {
        self.fetch(ApiRequest::get("/users")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::ScriptedTransport;
    use crate::transport::RawResponse;
    use crate::{ClientError, PainelClient};
    use serde_json::json;

    #[tokio::test]
    async fn test_empresas_list() {
        let body = json!([{
            "id": "c1",
            "nome": "Acme",
            "cnpj": "123",
            "cpf": null,
            "nomeResponsavel": null,
            "emailResponsavel": "a@acme.com",
            "estadoPagamento": 0,
            "planoContratado": "BASIC"
        }]);
        let client = PainelClient::new(ScriptedTransport::respond(RawResponse::json(200, "OK", body.to_string())));

        let empresas = client.empresas().await.unwrap();
        assert_eq!(empresas.len(), 1);
        assert_eq!(empresas[0].nome, "Acme");
        assert_eq!(client.transport().last_request().path, "/companies");
    }

    #[tokio::test]
    async fn test_usuarios_error_is_propagated() {
        let client = PainelClient::new(ScriptedTransport::respond(
            RawResponse::new(404, "Not Found").with_content_type("text/html").with_body("Cannot GET /users"),
        ));

        let err = client.usuarios().await.unwrap_err();
        match err {
            ClientError::Api(api) => {
                assert_eq!(api.message, "Not Found");
                assert_eq!(api.status, Some(404));
            }
            other => panic!("erro inesperado: {:?}", other),
        }
    }
}
