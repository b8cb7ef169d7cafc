// Biblioteca do painel administrativo
// Expõe módulos para uso em testes e no binário

pub mod config;
pub mod handlers;
pub mod utils;

use painel_api::{HttpTransport, PainelClient, Transport};

// AppState é definido aqui para ser compartilhado
#[derive(Clone)]
pub struct AppState<T: Transport = HttpTransport> {
    pub settings: config::Settings,
    pub client: PainelClient<T>,
}

impl AppState<HttpTransport> {
    /// Monta o estado a partir das configurações carregadas
    pub fn from_settings(settings: config::Settings) -> utils::AppResult<Self> {
        let client = PainelClient::http(settings.api.http_config())?;
        Ok(Self { settings, client })
    }
}
