use serde::{Deserialize, Serialize};
use std::fmt;

/// Modo de operação habilitado para um usuário
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserModo {
    Chat,
    Agenda,
    Outro(String),
}

impl From<String> for UserModo {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CHAT" => UserModo::Chat,
            "AGENDA" => UserModo::Agenda,
            _ => UserModo::Outro(value),
        }
    }
}

impl From<UserModo> for String {
    fn from(value: UserModo) -> Self {
        match value {
            UserModo::Chat => "CHAT".to_string(),
            UserModo::Agenda => "AGENDA".to_string(),
            UserModo::Outro(other) => other,
        }
    }
}

impl fmt::Display for UserModo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserModo::Chat => f.write_str("CHAT"),
            UserModo::Agenda => f.write_str("AGENDA"),
            UserModo::Outro(other) => f.write_str(other),
        }
    }
}

/// Usuário cadastrado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Nome da empresa
    pub empresa: String,
    pub nome: String,
    pub username: String,
    /// YYYY-MM-DD
    pub nascimento: String,
    pub email: String,
    pub telefone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub senha: Option<String>,
    pub tipo: String,
    pub cpf: String,
    pub ativo: bool,
    pub modos: Vec<UserModo>,
}

/// Payload de criação de usuário
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub nome: String,
    pub username: String,
    pub empresa: String,
    pub nascimento: String,
    pub email: String,
    pub telefone: String,
    pub senha: String,
    pub tipo: String,
    pub cpf: String,
    pub ativo: bool,
    pub modos: Vec<UserModo>,
}

impl CreateUserPayload {
    /// Remove modos repetidos mantendo a ordem de seleção
    pub fn dedup_modos(mut self) -> Self {
        let mut vistos = Vec::with_capacity(self.modos.len());
        self.modos.retain(|modo| {
            if vistos.contains(modo) {
                false
            } else {
                vistos.push(modo.clone());
                true
            }
        });
        self
    }
}
