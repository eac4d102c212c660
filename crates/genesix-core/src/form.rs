use crate::error::{GenesixError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Maximum number of entries in the "5 whys" list.
pub const FIVE_WHYS_MAX: usize = 5;

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// Every top-level field of the step-1 form, named by its wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "nomeProduto")]
    NomeProduto,
    #[serde(rename = "descricaoIdeia")]
    DescricaoIdeia,
    #[serde(rename = "problemaCentral")]
    ProblemaCentral,
    #[serde(rename = "publicoAlvo")]
    PublicoAlvo,
    #[serde(rename = "stakeholders")]
    Stakeholders,
    #[serde(rename = "motivacao")]
    Motivacao,
    #[serde(rename = "evidencias")]
    Evidencias,
    #[serde(rename = "hipotesesPrincipais")]
    HipotesesPrincipais,
    #[serde(rename = "jobsToBeDone")]
    JobsToBeDone,
    #[serde(rename = "cenarioAtual")]
    CenarioAtual,
    #[serde(rename = "concorrentes")]
    Concorrentes,
    #[serde(rename = "kpisIniciais")]
    KpisIniciais,
    #[serde(rename = "5whys")]
    FiveWhys,
    #[serde(rename = "anotacoesExtras")]
    AnotacoesExtras,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::NomeProduto => "nomeProduto",
            Field::DescricaoIdeia => "descricaoIdeia",
            Field::ProblemaCentral => "problemaCentral",
            Field::PublicoAlvo => "publicoAlvo",
            Field::Stakeholders => "stakeholders",
            Field::Motivacao => "motivacao",
            Field::Evidencias => "evidencias",
            Field::HipotesesPrincipais => "hipotesesPrincipais",
            Field::JobsToBeDone => "jobsToBeDone",
            Field::CenarioAtual => "cenarioAtual",
            Field::Concorrentes => "concorrentes",
            Field::KpisIniciais => "kpisIniciais",
            Field::FiveWhys => "5whys",
            Field::AnotacoesExtras => "anotacoesExtras",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar free-text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    NomeProduto,
    DescricaoIdeia,
    ProblemaCentral,
    PublicoAlvo,
    Motivacao,
    Evidencias,
    CenarioAtual,
    AnotacoesExtras,
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        match field {
            TextField::NomeProduto => Field::NomeProduto,
            TextField::DescricaoIdeia => Field::DescricaoIdeia,
            TextField::ProblemaCentral => Field::ProblemaCentral,
            TextField::PublicoAlvo => Field::PublicoAlvo,
            TextField::Motivacao => Field::Motivacao,
            TextField::Evidencias => Field::Evidencias,
            TextField::CenarioAtual => Field::CenarioAtual,
            TextField::AnotacoesExtras => Field::AnotacoesExtras,
        }
    }
}

/// Dynamic lists of plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    Stakeholders,
    HipotesesPrincipais,
    KpisIniciais,
    FiveWhys,
}

impl ListField {
    /// Item cap, if the list has one.
    pub fn max_items(self) -> Option<usize> {
        match self {
            ListField::FiveWhys => Some(FIVE_WHYS_MAX),
            _ => None,
        }
    }
}

impl From<ListField> for Field {
    fn from(field: ListField) -> Self {
        match field {
            ListField::Stakeholders => Field::Stakeholders,
            ListField::HipotesesPrincipais => Field::HipotesesPrincipais,
            ListField::KpisIniciais => Field::KpisIniciais,
            ListField::FiveWhys => Field::FiveWhys,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    Quando,
    Quero,
    ParaQue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitorField {
    Nome,
    Tipo,
    Forcas,
    Fraquezas,
}

// ---------------------------------------------------------------------------
// List items
// ---------------------------------------------------------------------------

/// A job-to-be-done: "when ..., I want ..., so that ...".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobToBeDone {
    pub quando: String,
    pub quero: String,
    pub para_que: String,
}

impl JobToBeDone {
    fn slot_mut(&mut self, field: JobField) -> &mut String {
        match field {
            JobField::Quando => &mut self.quando,
            JobField::Quero => &mut self.quero,
            JobField::ParaQue => &mut self.para_que,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Competitor {
    pub nome: String,
    pub tipo: String,
    pub forcas: String,
    pub fraquezas: String,
}

impl Competitor {
    fn slot_mut(&mut self, field: CompetitorField) -> &mut String {
        match field {
            CompetitorField::Nome => &mut self.nome,
            CompetitorField::Tipo => &mut self.tipo,
            CompetitorField::Forcas => &mut self.forcas,
            CompetitorField::Fraquezas => &mut self.fraquezas,
        }
    }
}

// ---------------------------------------------------------------------------
// FormState
// ---------------------------------------------------------------------------

/// Raw, unnormalized state of the step-1 ("Contexto & Problema") form.
///
/// Every dynamic list holds at least one entry. List edits build a new
/// vector and swap it in rather than mutating the old one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
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

impl Default for FormState {
    fn default() -> Self {
        Self {
            nome_produto: String::new(),
            descricao_ideia: String::new(),
            problema_central: String::new(),
            publico_alvo: String::new(),
            stakeholders: vec![String::new()],
            motivacao: String::new(),
            evidencias: String::new(),
            hipoteses_principais: vec![String::new()],
            jobs_to_be_done: vec![JobToBeDone::default()],
            cenario_atual: String::new(),
            concorrentes: vec![Competitor::default()],
            kpis_iniciais: vec![String::new()],
            five_whys: vec![String::new()],
            anotacoes_extras: String::new(),
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------------
    // Scalar fields
    // ---------------------------------------------------------------------------

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::NomeProduto => &self.nome_produto,
            TextField::DescricaoIdeia => &self.descricao_ideia,
            TextField::ProblemaCentral => &self.problema_central,
            TextField::PublicoAlvo => &self.publico_alvo,
            TextField::Motivacao => &self.motivacao,
            TextField::Evidencias => &self.evidencias,
            TextField::CenarioAtual => &self.cenario_atual,
            TextField::AnotacoesExtras => &self.anotacoes_extras,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::NomeProduto => &mut self.nome_produto,
            TextField::DescricaoIdeia => &mut self.descricao_ideia,
            TextField::ProblemaCentral => &mut self.problema_central,
            TextField::PublicoAlvo => &mut self.publico_alvo,
            TextField::Motivacao => &mut self.motivacao,
            TextField::Evidencias => &mut self.evidencias,
            TextField::CenarioAtual => &mut self.cenario_atual,
            TextField::AnotacoesExtras => &mut self.anotacoes_extras,
        };
        *slot = value.into();
    }

    // ---------------------------------------------------------------------------
    // String lists
    // ---------------------------------------------------------------------------

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Stakeholders => &self.stakeholders,
            ListField::HipotesesPrincipais => &self.hipoteses_principais,
            ListField::KpisIniciais => &self.kpis_iniciais,
            ListField::FiveWhys => &self.five_whys,
        }
    }

    fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Stakeholders => &mut self.stakeholders,
            ListField::HipotesesPrincipais => &mut self.hipoteses_principais,
            ListField::KpisIniciais => &mut self.kpis_iniciais,
            ListField::FiveWhys => &mut self.five_whys,
        }
    }

    pub fn set_list_item(
        &mut self,
        field: ListField,
        index: usize,
        value: impl Into<String>,
    ) -> Result<()> {
        let updated = replaced(self.list(field), field.into(), index, |_| value.into())?;
        *self.list_mut(field) = updated;
        Ok(())
    }

    /// Append an empty entry. Returns `false` (and leaves the list alone)
    /// when the list is already at its cap.
    pub fn add_list_item(&mut self, field: ListField) -> bool {
        let current = self.list(field);
        if field.max_items().is_some_and(|max| current.len() >= max) {
            return false;
        }
        let updated = appended(current);
        *self.list_mut(field) = updated;
        true
    }

    pub fn remove_list_item(&mut self, field: ListField, index: usize) -> Result<()> {
        let updated = removed(self.list(field), field.into(), index)?;
        *self.list_mut(field) = updated;
        Ok(())
    }

    // ---------------------------------------------------------------------------
    // Object lists
    // ---------------------------------------------------------------------------

    pub fn set_job_field(
        &mut self,
        index: usize,
        field: JobField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.jobs_to_be_done = replaced(&self.jobs_to_be_done, Field::JobsToBeDone, index, |job| {
            let mut job = job.clone();
            *job.slot_mut(field) = value.into();
            job
        })?;
        Ok(())
    }

    pub fn add_job(&mut self) {
        self.jobs_to_be_done = appended(&self.jobs_to_be_done);
    }

    pub fn remove_job(&mut self, index: usize) -> Result<()> {
        self.jobs_to_be_done = removed(&self.jobs_to_be_done, Field::JobsToBeDone, index)?;
        Ok(())
    }

    pub fn set_competitor_field(
        &mut self,
        index: usize,
        field: CompetitorField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.concorrentes = replaced(&self.concorrentes, Field::Concorrentes, index, |item| {
            let mut item = item.clone();
            *item.slot_mut(field) = value.into();
            item
        })?;
        Ok(())
    }

    pub fn add_competitor(&mut self) {
        self.concorrentes = appended(&self.concorrentes);
    }

    pub fn remove_competitor(&mut self, index: usize) -> Result<()> {
        self.concorrentes = removed(&self.concorrentes, Field::Concorrentes, index)?;
        Ok(())
    }

    // ---------------------------------------------------------------------------
    // Drafts
    // ---------------------------------------------------------------------------

    /// Restore the list invariants on a state that came from outside the
    /// editing operations (e.g. a draft file).
    pub fn normalize(mut self) -> Result<Self> {
        if self.five_whys.len() > FIVE_WHYS_MAX {
            return Err(GenesixError::ListCapExceeded {
                field: Field::FiveWhys.to_string(),
                max: FIVE_WHYS_MAX,
                got: self.five_whys.len(),
            });
        }
        ensure_one(&mut self.stakeholders);
        ensure_one(&mut self.hipoteses_principais);
        ensure_one(&mut self.jobs_to_be_done);
        ensure_one(&mut self.concorrentes);
        ensure_one(&mut self.kpis_iniciais);
        ensure_one(&mut self.five_whys);
        Ok(self)
    }

    /// Load a draft from a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let state: FormState = match DraftFormat::from_path(path)? {
            DraftFormat::Yaml => serde_yaml::from_str(&data)?,
            DraftFormat::Json => serde_json::from_str(&data)?,
        };
        state.normalize()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = match DraftFormat::from_path(path)? {
            DraftFormat::Yaml => serde_yaml::to_string(self)?,
            DraftFormat::Json => serde_json::to_string_pretty(self)?,
        };
        crate::io::atomic_write(path, data.as_bytes())
    }
}

enum DraftFormat {
    Yaml,
    Json,
}

impl DraftFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(DraftFormat::Yaml),
            Some("json") => Ok(DraftFormat::Json),
            other => Err(GenesixError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Copy-on-write list helpers
// ---------------------------------------------------------------------------

fn replaced<T: Clone>(
    items: &[T],
    field: Field,
    index: usize,
    edit: impl FnOnce(&T) -> T,
) -> Result<Vec<T>> {
    let target = items.get(index).ok_or_else(|| GenesixError::IndexOutOfRange {
        field: field.to_string(),
        index,
        len: items.len(),
    })?;
    let replacement = edit(target);
    let mut updated = items.to_vec();
    updated[index] = replacement;
    Ok(updated)
}

fn appended<T: Clone + Default>(items: &[T]) -> Vec<T> {
    let mut updated = Vec::with_capacity(items.len() + 1);
    updated.extend_from_slice(items);
    updated.push(T::default());
    updated
}

fn removed<T: Clone + Default>(items: &[T], field: Field, index: usize) -> Result<Vec<T>> {
    if index >= items.len() {
        return Err(GenesixError::IndexOutOfRange {
            field: field.to_string(),
            index,
            len: items.len(),
        });
    }
    let updated: Vec<T> = items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect();
    if updated.is_empty() {
        return Ok(vec![T::default()]);
    }
    Ok(updated)
}

fn ensure_one<T: Default>(items: &mut Vec<T>) {
    if items.is_empty() {
        items.push(T::default());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn initial_state_has_one_slot_per_list() {
        let state = FormState::new();
        assert_eq!(state.stakeholders, vec![String::new()]);
        assert_eq!(state.jobs_to_be_done.len(), 1);
        assert_eq!(state.concorrentes.len(), 1);
        assert_eq!(state.five_whys.len(), 1);
    }

    #[test]
    fn removing_last_item_leaves_empty_slot() {
        let mut state = FormState::new();
        state.set_list_item(ListField::Stakeholders, 0, "Alice").unwrap();
        state.remove_list_item(ListField::Stakeholders, 0).unwrap();
        assert_eq!(state.stakeholders, vec![String::new()]);

        state.set_job_field(0, JobField::Quero, "pagar rapido").unwrap();
        state.remove_job(0).unwrap();
        assert_eq!(state.jobs_to_be_done, vec![JobToBeDone::default()]);

        state.remove_competitor(0).unwrap();
        assert_eq!(state.concorrentes, vec![Competitor::default()]);
    }

    #[test]
    fn remove_keeps_order_of_remaining_items() {
        let mut state = FormState::new();
        state.add_list_item(ListField::KpisIniciais);
        state.add_list_item(ListField::KpisIniciais);
        for (i, kpi) in ["NPS", "CAC", "LTV"].iter().enumerate() {
            state.set_list_item(ListField::KpisIniciais, i, *kpi).unwrap();
        }
        state.remove_list_item(ListField::KpisIniciais, 1).unwrap();
        assert_eq!(state.kpis_iniciais, vec!["NPS", "LTV"]);
    }

    #[test]
    fn five_whys_capped_at_five() {
        let mut state = FormState::new();
        for _ in 0..4 {
            assert!(state.add_list_item(ListField::FiveWhys));
        }
        assert_eq!(state.five_whys.len(), 5);
        assert!(!state.add_list_item(ListField::FiveWhys));
        assert_eq!(state.five_whys.len(), 5);
    }

    #[test]
    fn other_lists_are_uncapped() {
        let mut state = FormState::new();
        for _ in 0..10 {
            assert!(state.add_list_item(ListField::Stakeholders));
        }
        assert_eq!(state.stakeholders.len(), 11);
    }

    #[test]
    fn out_of_range_edit_is_rejected() {
        let mut state = FormState::new();
        let err = state.set_list_item(ListField::Stakeholders, 3, "x").unwrap_err();
        assert!(matches!(
            err,
            GenesixError::IndexOutOfRange { index: 3, len: 1, .. }
        ));
        assert!(state.remove_competitor(2).is_err());
        assert_eq!(state, FormState::new());
    }

    #[test]
    fn object_item_edit_touches_one_subfield() {
        let mut state = FormState::new();
        state.add_competitor();
        state.set_competitor_field(1, CompetitorField::Nome, "Acme").unwrap();
        assert_eq!(state.concorrentes[0], Competitor::default());
        assert_eq!(state.concorrentes[1].nome, "Acme");
        assert_eq!(state.concorrentes[1].tipo, "");
    }

    #[test]
    fn serializes_with_wire_keys() {
        let json = serde_json::to_value(FormState::new()).unwrap();
        assert!(json.get("nomeProduto").is_some());
        assert!(json.get("5whys").is_some());
        assert!(json["jobsToBeDone"][0].get("paraQue").is_some());
    }

    #[test]
    fn normalize_fills_empty_lists() {
        let json = r#"{"nomeProduto":"Pix Facil","stakeholders":[],"5whys":[]}"#;
        let state: FormState = serde_json::from_str(json).unwrap();
        let state = state.normalize().unwrap();
        assert_eq!(state.nome_produto, "Pix Facil");
        assert_eq!(state.stakeholders, vec![String::new()]);
        assert_eq!(state.five_whys, vec![String::new()]);
        assert_eq!(state.concorrentes.len(), 1);
    }

    #[test]
    fn normalize_rejects_six_whys() {
        let mut state = FormState::new();
        state.five_whys = vec!["por que?".to_string(); 6];
        assert!(matches!(
            state.normalize(),
            Err(GenesixError::ListCapExceeded { max: 5, got: 6, .. })
        ));
    }

    #[test]
    fn draft_roundtrip_yaml_and_json() {
        let dir = TempDir::new().unwrap();
        let mut state = FormState::new();
        state.set_text(TextField::NomeProduto, "Pix Facil");
        state.set_list_item(ListField::FiveWhys, 0, "clientes desistem").unwrap();

        for name in ["draft.yaml", "draft.json"] {
            let path = dir.path().join(name);
            state.save(&path).unwrap();
            assert_eq!(FormState::load(&path).unwrap(), state);
        }
    }

    #[test]
    fn draft_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.toml");
        assert!(matches!(
            FormState::new().save(&path),
            Err(GenesixError::UnsupportedFormat(_))
        ));
    }
}
