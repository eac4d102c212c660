pub mod draft;
pub mod payload;
pub mod route;
pub mod steps;
pub mod submit;
pub mod validate;
pub mod webhook;

use anyhow::Context;
use genesix_core::form::FormState;
use std::path::Path;

pub(crate) fn load_draft(file: &Path) -> anyhow::Result<FormState> {
    FormState::load(file).with_context(|| format!("failed to load draft {}", file.display()))
}
