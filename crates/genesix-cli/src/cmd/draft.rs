use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use genesix_core::form::FormState;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum DraftSubcommand {
    /// Write an empty step-1 draft
    New {
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print a draft after list normalization
    Show { file: PathBuf },
}

pub fn run(subcommand: DraftSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        DraftSubcommand::New { file, force } => new(&file, force),
        DraftSubcommand::Show { file } => show(&file, json),
    }
}

fn new(file: &Path, force: bool) -> anyhow::Result<()> {
    if file.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", file.display());
    }
    FormState::default()
        .save(file)
        .with_context(|| format!("failed to write draft {}", file.display()))?;
    println!("Created draft: {}", file.display());
    Ok(())
}

fn show(file: &Path, json: bool) -> anyhow::Result<()> {
    let state = super::load_draft(file)?;
    if json {
        return print_json(&state);
    }

    println!("Nome do produto:  {}", state.nome_produto);
    println!("Problema central: {}", state.problema_central);
    println!("Publico alvo:     {}", state.publico_alvo);
    println!("Stakeholders:     {}", state.stakeholders.len());
    println!("Hipoteses:        {}", state.hipoteses_principais.len());
    println!("Jobs to be done:  {}", state.jobs_to_be_done.len());
    println!("Concorrentes:     {}", state.concorrentes.len());
    println!("KPIs:             {}", state.kpis_iniciais.len());
    println!("5 porques:        {}", state.five_whys.len());
    Ok(())
}
