//! Envio de mensagens de texto pelas instâncias

use crate::client::{path_segment, to_body, PainelClient};
use crate::error::Result;
use crate::transport::{ApiRequest, Transport};
use crate::types::{SendTextMessagePayload, SendTextMessageResponse};

impl<T: Transport> PainelClient<T> {
    /// Envia uma mensagem de texto pela instância informada
    ///
    /// Qualquer resposta 2xx conta como envio concluído, seja qual for o corpo.
    pub async fn enviar_texto(
        &self,
        instance_name: &str,
        payload: &SendTextMessagePayload,
    ) -> Result<SendTextMessageResponse> {
        let path = format!("/message/sendText/{}", path_segment(instance_name));
        let request = ApiRequest::post(path).json(to_body(payload)?);

        let resposta = self.execute(request).await?;
        Ok(SendTextMessageResponse::from(resposta.into_value()))
    }
}
