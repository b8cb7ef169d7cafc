//! Tipos de domínio da API do painel

pub mod agendamento;
pub mod empresa;
pub mod instancia;
pub mod mensagem;
pub mod usuario;

pub use agendamento::{
    Agendamento, EstimativaValor, PagamentoPorStatus, PercentualStatus, ResumoPagamentos, StatusPagamento,
    TextoOuNumero,
};
pub use empresa::{Company, CreateCompanyPayload};
pub use instancia::{CreateInstancePayload, FetchedInstanceConnection, WebhookConfig};
pub use mensagem::{MessageKey, SendTextMessagePayload, SendTextMessageResponse, SendTextMessageResponseData};
pub use usuario::{CreateUserPayload, User, UserModo};

use serde::Deserialize;

/// Resposta que pode vir como um único objeto ou como lista
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}
