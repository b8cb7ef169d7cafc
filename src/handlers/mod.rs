//! Handlers das operações do painel
//!
//! Cada handler valida a entrada do operador, chama o cliente e devolve o
//! resultado como JSON. Falhas de validação nunca chegam à rede.

pub mod agendamentos;
pub mod configuracoes;
pub mod instancias;
pub mod mensagens;

use crate::utils::logging::log_validation_error;
use crate::utils::{AppError, AppResult};

/// Exige um valor não vazio (após `trim`)
pub(crate) fn required<'a>(value: Option<&'a str>, field: &str, message: &str) -> AppResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(validation(field, message)),
    }
}

pub(crate) fn validation(field: &str, message: &str) -> AppError {
    log_validation_error(field, message);
    AppError::ValidationError(message.to_string())
}
