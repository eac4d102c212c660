use crate::output::{print_json, print_table};
use genesix_core::validation::validate;
use std::path::Path;

pub fn run(file: &Path, json: bool) -> anyhow::Result<()> {
    let state = super::load_draft(file)?;
    let errors = validate(&state);

    if json {
        #[derive(serde::Serialize)]
        struct ValidationOutput<'a> {
            valid: bool,
            errors: &'a genesix_core::validation::ErrorMap,
        }
        print_json(&ValidationOutput {
            valid: errors.is_empty(),
            errors: &errors,
        })?;
    } else if errors.is_empty() {
        println!("Draft is valid.");
    } else {
        let rows = errors
            .iter()
            .map(|(field, message)| vec![field.to_string(), message.clone()])
            .collect();
        print_table(&["FIELD", "ERROR"], rows);
    }

    if !errors.is_empty() {
        anyhow::bail!("{} validation error(s)", errors.len());
    }
    Ok(())
}
