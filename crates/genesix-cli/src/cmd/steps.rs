use crate::output::{print_json, print_table};
use genesix_core::steps::catalog;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&catalog());
    }

    let rows = catalog()
        .iter()
        .map(|info| {
            vec![
                (info.id.index() + 1).to_string(),
                info.id.to_string(),
                info.title.to_string(),
            ]
        })
        .collect();
    print_table(&["#", "ID", "TITLE"], rows);
    Ok(())
}
