//! Cliente da API REST do painel administrativo
//!
//! Este crate fornece uma interface tipo-segura para a API que gerencia
//! agendamentos, instâncias do gateway de mensagens, empresas e usuários.
//!
//! # Camadas
//!
//! - **Transporte** ([`transport`]): capacidade `send(request) -> response`,
//!   injetável. [`HttpTransport`] usa `reqwest`; testes usam transportes sintéticos.
//! - **Normalização** ([`response`]): converte uma resposta HTTP concluída em
//!   [`Normalized`] (JSON, vazio, texto puro) ou em [`ApiError`].
//! - **Endpoints**: um método assíncrono por operação da API, agrupados por
//!   área ([`agendamentos`], [`instancias`], [`mensagens`], [`configuracoes`]).
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use painel_api::{HttpConfig, PainelClient};
//!
//! #[tokio::main]
//! async fn main() -> painel_api::Result<()> {
//!     let client = PainelClient::http(HttpConfig::new("http://localhost:3000/api/v1"))?;
//!
//!     for agendamento in client.agendamentos().await? {
//!         println!(
//!             "{} - {}",
//!             agendamento.nome.as_deref().unwrap_or("-"),
//!             agendamento.status_pagamento.as_deref().unwrap_or("-")
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

// Módulos públicos
pub mod client;
pub mod error;
pub mod response;
pub mod transport;
pub mod types;

// Endpoints por área
pub mod agendamentos;
pub mod configuracoes;
pub mod instancias;
pub mod mensagens;

// Re-exports principais
pub use client::PainelClient;
pub use error::{ApiError, ClientError, Result, TransportError};
pub use response::{normalize, EmptyReason, Normalized};
pub use transport::{ApiRequest, FilePart, HttpConfig, HttpTransport, RawResponse, RequestBody, Transport};

/// URL base padrão da API (ambiente local)
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";
