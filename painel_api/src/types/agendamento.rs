use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Status de pagamento de um agendamento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPagamento {
    Pendente,
    Pago,
    Atrasado,
    Cancelado,
}

impl StatusPagamento {
    pub const ALL: [StatusPagamento; 4] = [
        StatusPagamento::Pendente,
        StatusPagamento::Pago,
        StatusPagamento::Atrasado,
        StatusPagamento::Cancelado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusPagamento::Pendente => "pendente",
            StatusPagamento::Pago => "pago",
            StatusPagamento::Atrasado => "atrasado",
            StatusPagamento::Cancelado => "cancelado",
        }
    }
}

impl fmt::Display for StatusPagamento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusPagamento {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        StatusPagamento::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| format!("Status de pagamento desconhecido: {}", s))
    }
}

/// Valor que a API envia ora como texto, ora como número (ids, valores monetários)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextoOuNumero {
    Numero(serde_json::Number),
    Texto(String),
}

impl TextoOuNumero {
    /// Valor numérico; texto como `"150.00"` também é aceito
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TextoOuNumero::Numero(n) => n.as_f64(),
            TextoOuNumero::Texto(t) => t.trim().replace(',', ".").parse().ok(),
        }
    }
}

impl fmt::Display for TextoOuNumero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextoOuNumero::Numero(n) => write!(f, "{}", n),
            TextoOuNumero::Texto(t) => f.write_str(t),
        }
    }
}

/// Registro de agendamento
///
/// Todos os campos são opcionais: a planilha importada define quais colunas
/// existem. Os nomes antigos (`nome_cliente`, `data_agendamento`, `servico`,
/// `valor`, `status_pagamento`) são aceitos como alternativa. Campos não
/// mapeados são preservados em `extras`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Agendamento {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TextoOuNumero>,
    #[serde(default, alias = "nome_cliente", skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<TextoOuNumero>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documento: Option<TextoOuNumero>,
    #[serde(default, alias = "data_agendamento", skip_serializing_if = "Option::is_none")]
    pub data_contrato: Option<String>,
    #[serde(default, alias = "servico", skip_serializing_if = "Option::is_none")]
    pub tipo_contrato: Option<String>,
    #[serde(default, alias = "valor", skip_serializing_if = "Option::is_none")]
    pub valor_mensalidade: Option<TextoOuNumero>,
    #[serde(
        default,
        rename = "statusPagamento",
        alias = "status_pagamento",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_pagamento: Option<String>,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl Agendamento {
    /// Status de pagamento reconhecido; valores fora da lista conhecida viram `None`
    pub fn status(&self) -> Option<StatusPagamento> {
        self.status_pagamento.as_deref().and_then(|s| s.parse().ok())
    }

    /// Indica se o lembrete já foi enviado (`lembreteEnviado`)
    pub fn lembrete_enviado(&self) -> bool {
        match self.extras.get("lembreteEnviado") {
            Some(Value::Bool(enviado)) => *enviado,
            Some(Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
            Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "sim"),
            _ => false,
        }
    }
}

/// Estimativa de valores por situação de pagamento em um período
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimativaValor {
    pub pendente: f64,
    pub pago: f64,
    pub atrasado: f64,
}

impl EstimativaValor {
    pub fn total(&self) -> f64 {
        self.pendente + self.pago + self.atrasado
    }
}

/// Contagem de pagamentos para um status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagamentoPorStatus {
    pub status: String,
    #[serde(default, deserialize_with = "contagem_flexivel")]
    pub count: u64,
    #[serde(default, deserialize_with = "valor_flexivel", skip_serializing_if = "Option::is_none")]
    pub total_valor: Option<f64>,
}

/// Contagem enviada como número, número fracionário ou texto (`COUNT(*)` do Postgres chega como `"3"`)
fn contagem(value: &Value) -> u64 {
    let numero = match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.round().max(0.0) as u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.round().max(0.0) as u64))
        }
        _ => None,
    };
    numero.unwrap_or(0)
}

fn contagem_flexivel<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(contagem(&Value::deserialize(deserializer)?))
}

fn valor_flexivel<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let valor = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(valor)
}

/// Estatísticas em qualquer dos formatos aceitos
///
/// - lista `[{status, count}]`
/// - mapa `{status: count}`
/// - qualquer outro valor (inclusive `null`) vira lista vazia
#[derive(Debug, Clone)]
pub(crate) struct PagamentosPorStatusResposta(Vec<PagamentoPorStatus>);

impl<'de> Deserialize<'de> for PagamentosPorStatusResposta {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let itens = match Value::deserialize(deserializer)? {
            Value::Array(itens) => itens
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<PagamentoPorStatus>, _>>()
                .map_err(de::Error::custom)?,
            Value::Object(mapa) => mapa
                .into_iter()
                .collect::<BTreeMap<String, Value>>()
                .into_iter()
                // contagem não numérica vira 0
                .map(|(status, count)| PagamentoPorStatus {
                    status,
                    count: contagem(&count),
                    total_valor: None,
                })
                .collect(),
            _ => Vec::new(),
        };

        Ok(Self(itens))
    }
}

impl From<PagamentosPorStatusResposta> for Vec<PagamentoPorStatus> {
    fn from(value: PagamentosPorStatusResposta) -> Self {
        value.0
    }
}

/// Totais e percentuais calculados sobre as estatísticas de pagamento
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumoPagamentos {
    pub total: u64,
    pub itens: Vec<PercentualStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentualStatus {
    pub status: String,
    pub count: u64,
    pub percentual: f64,
}

impl ResumoPagamentos {
    pub fn from_estatisticas(estatisticas: &[PagamentoPorStatus]) -> Self {
        let total: u64 = estatisticas.iter().map(|item| item.count).sum();

        let itens = estatisticas
            .iter()
            .map(|item| PercentualStatus {
                status: item.status.clone(),
                count: item.count,
                percentual: if total == 0 {
                    0.0
                } else {
                    item.count as f64 * 100.0 / total as f64
                },
            })
            .collect();

        Self { total, itens }
    }
}
