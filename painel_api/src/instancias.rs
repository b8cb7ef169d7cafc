//! Endpoints de instâncias do gateway de mensagens

use crate::client::{path_segment, to_body, PainelClient};
use crate::error::Result;
use crate::response::Normalized;
use crate::transport::{ApiRequest, Transport};
use crate::types::instancia::open_instances;
use crate::types::{CreateInstancePayload, FetchedInstanceConnection};

impl<T: Transport> PainelClient<T> {
    /// Cria uma nova instância
    pub async fn criar_instancia(&self, payload: &CreateInstancePayload) -> Result<Normalized> {
        let request = ApiRequest::post("/create/instance").json(to_body(payload)?);
        self.execute(request).await
    }

    /// Lista as conexões de todas as instâncias
    pub async fn conexoes_instancias(&self) -> Result<Vec<FetchedInstanceConnection>> {
        self.fetch(ApiRequest::get("/instances/conection")).await
    }

    /// Lista apenas as instâncias com conexão aberta
    pub async fn instancias_abertas(&self) -> Result<Vec<FetchedInstanceConnection>> {
        Ok(open_instances(self.conexoes_instancias().await?))
    }

    /// Remove uma instância pelo nome
    ///
    /// Um 204 é normalizado como [`Normalized::Empty`] com motivo `NoContent`.
    pub async fn remover_instancia(&self, instance_name: &str) -> Result<Normalized> {
        let path = format!("/instances/delete/{}", path_segment(instance_name));
        self.execute(ApiRequest::delete(path)).await
    }
}
