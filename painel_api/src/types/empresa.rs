use serde::{Deserialize, Serialize};

/// Empresa cadastrada
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nome: String,
    pub cnpj: Option<String>,
    pub cpf: Option<String>,
    pub nome_responsavel: Option<String>,
    pub email_responsavel: String,
    pub estado_pagamento: i64,
    pub plano_contratado: String,
}

/// Payload de criação de empresa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyPayload {
    pub nome: String,
    pub cnpj: Option<String>,
    pub cpf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome_responsavel: Option<String>,
    pub email_responsavel: String,
    pub estado_pagamento: i64,
    pub plano_contratado: String,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl CreateCompanyPayload {
    /// Remove espaços de `cnpj`, `cpf` e `nomeResponsavel`; valores em branco viram ausentes
    pub fn normalized(self) -> Self {
        Self {
            cnpj: blank_to_none(self.cnpj),
            cpf: blank_to_none(self.cpf),
            nome_responsavel: blank_to_none(self.nome_responsavel),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalized_payload_wire_format() {
        let payload = CreateCompanyPayload {
            nome: "Clínica Sol".into(),
            cnpj: Some(" 12.345.678/0001-90 ".into()),
            cpf: Some("   ".into()),
            nome_responsavel: Some("".into()),
            email_responsavel: "contato@sol.com".into(),
            estado_pagamento: 0,
            plano_contratado: "BASIC".into(),
        }
        .normalized();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "nome": "Clínica Sol",
                "cnpj": "12.345.678/0001-90",
                "cpf": null,
                "emailResponsavel": "contato@sol.com",
                "estadoPagamento": 0,
                "planoContratado": "BASIC"
            })
        );
    }

    #[test]
    fn test_company_accepts_null_fields() {
        let company: Company = serde_json::from_value(json!({
            "id": "c1",
            "nome": "Acme",
            "cnpj": null,
            "cpf": "12345678900",
            "nomeResponsavel": null,
            "emailResponsavel": "a@acme.com",
            "estadoPagamento": 1,
            "planoContratado": "PRO"
        }))
        .unwrap();

        assert_eq!(company.cnpj, None);
        assert_eq!(company.nome_responsavel, None);
        assert_eq!(company.estado_pagamento, 1);
    }
}
