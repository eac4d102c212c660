use crate::output::print_json;
use genesix_core::payload::build_payload;
use std::path::Path;

pub fn run(file: &Path) -> anyhow::Result<()> {
    let state = super::load_draft(file)?;
    print_json(&build_payload(&state))
}
