use crate::form::{Competitor, FormState, JobToBeDone};
use serde::{Deserialize, Serialize};

/// Normalized step-1 data as sent to the webhook.
///
/// Keys match the form's wire keys, in form order, including the literal
/// `"5whys"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub nome_produto: String,
    pub descricao_ideia: String,
    pub problema_central: String,
    pub publico_alvo: String,
    pub stakeholders: Vec<String>,
    pub motivacao: String,
    pub evidencias: String,
    pub hipoteses_principais: Vec<String>,
    pub jobs_to_be_done: Vec<JobToBeDone>,
    pub cenario_atual: String,
    pub concorrentes: Vec<Competitor>,
    pub kpis_iniciais: Vec<String>,
    #[serde(rename = "5whys")]
    pub five_whys: Vec<String>,
    pub anotacoes_extras: String,
}

/// Derive the payload from raw form state. Pure; `state` is left untouched.
pub fn build_payload(state: &FormState) -> Payload {
    Payload {
        nome_produto: state.nome_produto.trim().to_string(),
        descricao_ideia: state.descricao_ideia.trim().to_string(),
        problema_central: state.problema_central.trim().to_string(),
        publico_alvo: state.publico_alvo.trim().to_string(),
        stakeholders: clean_strings(&state.stakeholders),
        motivacao: state.motivacao.trim().to_string(),
        evidencias: state.evidencias.trim().to_string(),
        hipoteses_principais: clean_strings(&state.hipoteses_principais),
        jobs_to_be_done: state
            .jobs_to_be_done
            .iter()
            .map(|job| JobToBeDone {
                quando: job.quando.trim().to_string(),
                quero: job.quero.trim().to_string(),
                para_que: job.para_que.trim().to_string(),
            })
            .filter(|job| !(job.quando.is_empty() && job.quero.is_empty() && job.para_que.is_empty()))
            .collect(),
        cenario_atual: state.cenario_atual.trim().to_string(),
        concorrentes: state
            .concorrentes
            .iter()
            .map(|item| Competitor {
                nome: item.nome.trim().to_string(),
                tipo: item.tipo.trim().to_string(),
                forcas: item.forcas.trim().to_string(),
                fraquezas: item.fraquezas.trim().to_string(),
            })
            .filter(|item| {
                !(item.nome.is_empty()
                    && item.tipo.is_empty()
                    && item.forcas.is_empty()
                    && item.fraquezas.is_empty())
            })
            .collect(),
        kpis_iniciais: clean_strings(&state.kpis_iniciais),
        five_whys: clean_strings(&state.five_whys),
        anotacoes_extras: state.anotacoes_extras.trim().to_string(),
    }
}

// Trim first, then drop what became empty.
fn clean_strings(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
