//! Endpoints de agendamentos, importação de CSV e estatísticas de pagamento

use crate::client::PainelClient;
use crate::error::Result;
use crate::response::Normalized;
use crate::transport::{ApiRequest, FilePart, Transport};
use crate::types::agendamento::PagamentosPorStatusResposta;
use crate::types::{Agendamento, EstimativaValor, OneOrMany, PagamentoPorStatus, StatusPagamento};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

impl<T: Transport> PainelClient<T> {
    /// Estimativa de valores (pendente, pago, atrasado) no período informado
    pub async fn estimativa_valor(&self, data_inicial: NaiveDate, data_final: NaiveDate) -> Result<EstimativaValor> {
        let request = ApiRequest::get("/csv/estimativa-valor")
            .query("dataInicial", data_inicial.format(DATE_FORMAT).to_string())
            .query("dataFinal", data_final.format(DATE_FORMAT).to_string());

        self.fetch(request).await
    }

    /// Envia um arquivo CSV de agendamentos para processamento
    pub async fn upload_csv(&self, file_name: &str, bytes: Vec<u8>) -> Result<Normalized> {
        tracing::info!("Enviando CSV {} ({} bytes)", file_name, bytes.len());

        let request = ApiRequest::post("/csv/upload").multipart(FilePart::csv(file_name, bytes));
        self.execute(request).await
    }

    /// Lista todos os agendamentos
    pub async fn agendamentos(&self) -> Result<Vec<Agendamento>> {
        self.fetch(ApiRequest::get("/csv/agendamentos")).await
    }

    /// Busca agendamentos pelo telefone do cliente
    ///
    /// A API pode devolver um único registro; o resultado é sempre uma lista.
    pub async fn agendamentos_por_telefone(&self, telefone: &str) -> Result<Vec<Agendamento>> {
        let request = ApiRequest::get("/csv/agendamentos/telefone").query("telefone", telefone);
        let resultado: OneOrMany<Agendamento> = self.fetch(request).await?;
        Ok(resultado.into())
    }

    /// Busca agendamentos pelo status de pagamento
    pub async fn agendamentos_por_status(&self, status: StatusPagamento) -> Result<Vec<Agendamento>> {
        let request =
            ApiRequest::get("/csv/agendamentos/status_pagamento").query("status_pagamento", status.as_str());
        self.fetch(request).await
    }

    /// Busca agendamentos pelo documento do cliente (um ou vários registros)
    pub async fn agendamentos_por_documento(&self, documento: &str) -> Result<Vec<Agendamento>> {
        let request = ApiRequest::get("/csv/agendamentos/documento").query("documento", documento);
        let resultado: OneOrMany<Agendamento> = self.fetch(request).await?;
        Ok(resultado.into())
    }

    /// Contagem de pagamentos por status
    ///
    /// Aceita tanto `[{status, count}]` quanto `{status: count}`; qualquer outro corpo vira lista vazia.
    pub async fn estatisticas_pagamentos_por_status(&self) -> Result<Vec<PagamentoPorStatus>> {
        let resposta: PagamentosPorStatusResposta =
            self.fetch(ApiRequest::get("/csv/estatisticas/pagamentos-por-status")).await?;
        Ok(resposta.into())
    }
}
