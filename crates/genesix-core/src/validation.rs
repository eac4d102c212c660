//! Required-field and length rules for the step-1 form.

use crate::form::{Field, FormState, TextField};
use std::collections::BTreeMap;

/// Per-field validation messages, keyed by field.
pub type ErrorMap = BTreeMap<Field, String>;

/// Fields that must hold non-blank text, with their display labels.
pub const REQUIRED_FIELDS: &[(TextField, &str)] = &[
    (TextField::NomeProduto, "Nome do produto"),
    (TextField::DescricaoIdeia, "Descricao da ideia"),
    (TextField::ProblemaCentral, "Problema central"),
    (TextField::PublicoAlvo, "Publico alvo"),
    (TextField::Motivacao, "Motivacao"),
];

/// Character limits, checked against the raw (untrimmed) value.
pub const MAX_LENGTH_RULES: &[(TextField, usize)] = &[
    (TextField::DescricaoIdeia, 2000),
    (TextField::ProblemaCentral, 1500),
    (TextField::PublicoAlvo, 1000),
    (TextField::Motivacao, 1500),
    (TextField::Evidencias, 2000),
    (TextField::CenarioAtual, 2000),
    (TextField::AnotacoesExtras, 2000),
];

pub fn max_length(field: TextField) -> Option<usize> {
    MAX_LENGTH_RULES
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, limit)| *limit)
}

pub fn required_message(label: &str) -> String {
    format!("{label} e obrigatorio.")
}

pub fn limit_message(limit: usize) -> String {
    format!("Limite de {limit} caracteres.")
}

/// Length as the browser form measures it, in UTF-16 code units.
///
/// Characters outside the Basic Multilingual Plane count as two.
pub fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Run every rule and collect all failures.
///
/// Length rules run after required rules, so a whitespace-only value that is
/// also too long reports the length message. Each field appears at most once.
pub fn validate(state: &FormState) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for (field, label) in REQUIRED_FIELDS {
        if state.text(*field).trim().is_empty() {
            errors.insert((*field).into(), required_message(label));
        }
    }

    for (field, limit) in MAX_LENGTH_RULES {
        if text_length(state.text(*field)) > *limit {
            errors.insert((*field).into(), limit_message(*limit));
        }
    }

    errors
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_state() -> FormState {
        let mut state = FormState::new();
        state.set_text(TextField::NomeProduto, "Pix Facil");
        state.set_text(TextField::DescricaoIdeia, "Pagamentos por aproximacao");
        state.set_text(TextField::ProblemaCentral, "Filas no caixa");
        state.set_text(TextField::PublicoAlvo, "Pequenos varejistas");
        state.set_text(TextField::Motivacao, "Reduzir atrito no checkout");
        state
    }

    #[test]
    fn complete_state_has_no_errors() {
        assert!(validate(&valid_state()).is_empty());
    }

    #[test]
    fn empty_state_flags_every_required_field() {
        let errors = validate(&FormState::new());
        assert_eq!(errors.len(), REQUIRED_FIELDS.len());
        assert_eq!(
            errors[&Field::NomeProduto],
            "Nome do produto e obrigatorio."
        );
        assert_eq!(errors[&Field::Motivacao], "Motivacao e obrigatorio.");
        assert!(!errors.contains_key(&Field::Evidencias));
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let mut state = valid_state();
        state.set_text(TextField::PublicoAlvo, " \t\n ");
        let errors = validate(&state);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::PublicoAlvo], "Publico alvo e obrigatorio.");
    }

    #[test]
    fn blank_field_reported_independently_of_others() {
        for (field, _) in REQUIRED_FIELDS {
            let mut state = valid_state();
            state.set_text(*field, "");
            let errors = validate(&state);
            assert_eq!(errors.len(), 1, "only {:?} should fail", field);
            assert!(errors.contains_key(&Field::from(*field)));
        }
    }

    #[test]
    fn length_limit_boundary() {
        for (field, limit) in MAX_LENGTH_RULES {
            let mut state = valid_state();
            state.set_text(*field, "a".repeat(*limit));
            assert!(validate(&state).is_empty(), "{:?} at limit", field);

            state.set_text(*field, "a".repeat(limit + 1));
            let errors = validate(&state);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[&Field::from(*field)], limit_message(*limit));
        }
    }

    #[test]
    fn accented_text_counts_one_unit_per_char() {
        let mut state = valid_state();
        state.set_text(TextField::PublicoAlvo, "ç".repeat(1000));
        assert!(validate(&state).is_empty());
    }

    #[test]
    fn astral_chars_count_as_two_units() {
        let mut state = valid_state();
        state.set_text(TextField::PublicoAlvo, "😀".repeat(600));
        assert_eq!(text_length(state.text(TextField::PublicoAlvo)), 1200);
        let errors = validate(&state);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::PublicoAlvo], "Limite de 1000 caracteres.");

        state.set_text(TextField::PublicoAlvo, "😀".repeat(500));
        assert!(validate(&state).is_empty());
    }

    #[test]
    fn nome_produto_has_no_length_limit() {
        let mut state = valid_state();
        state.set_text(TextField::NomeProduto, "x".repeat(10_000));
        assert!(validate(&state).is_empty());
        assert_eq!(max_length(TextField::NomeProduto), None);
    }

    #[test]
    fn long_whitespace_reports_limit_once() {
        let mut state = valid_state();
        state.set_text(TextField::Motivacao, " ".repeat(1501));
        let errors = validate(&state);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Motivacao], "Limite de 1500 caracteres.");
    }

    #[test]
    fn collects_all_failures_in_one_pass() {
        let mut state = FormState::new();
        state.set_text(TextField::Evidencias, "e".repeat(2001));
        state.set_text(TextField::AnotacoesExtras, "n".repeat(2001));
        let errors = validate(&state);
        assert_eq!(errors.len(), REQUIRED_FIELDS.len() + 2);
    }

    #[test]
    fn validate_does_not_touch_state() {
        let state = valid_state();
        let before = state.clone();
        let _ = validate(&state);
        assert_eq!(state, before);
    }
}
