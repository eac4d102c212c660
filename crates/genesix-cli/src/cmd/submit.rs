use crate::output::{print_json, print_table};
use anyhow::Context;
use genesix_core::config::WebhookEndpoint;
use genesix_core::submission::{Step1Form, SubmissionStatus};
use genesix_core::types::StepId;
use genesix_core::webhook::WebhookClient;
use std::path::Path;

pub fn run(file: &Path, webhook_url: Option<&str>, json: bool) -> anyhow::Result<()> {
    let state = super::load_draft(file)?;
    let client = WebhookClient::new(WebhookEndpoint::resolve(webhook_url));
    let mut form = Step1Form::with_state(state);

    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    rt.block_on(form.submit(&client));

    if !form.errors().is_empty() {
        if json {
            #[derive(serde::Serialize)]
            struct InvalidOutput<'a> {
                status: &'a SubmissionStatus,
                errors: &'a genesix_core::validation::ErrorMap,
            }
            print_json(&InvalidOutput {
                status: form.status(),
                errors: form.errors(),
            })?;
        } else {
            let rows = form
                .errors()
                .iter()
                .map(|(field, message)| vec![field.to_string(), message.clone()])
                .collect();
            print_table(&["FIELD", "ERROR"], rows);
        }
        anyhow::bail!(
            "not submitted: {} validation error(s)",
            form.errors().len()
        );
    }

    if json {
        print_json(form.status())?;
    }

    match form.status() {
        SubmissionStatus::Succeeded { response, .. } => {
            if !json {
                println!("Dados enviados.");
                if let Some(body) = response {
                    println!("Response: {body}");
                }
                form.advance(|| {
                    if let Some(next) = StepId::ContextoProblema.next() {
                        println!("Next step unlocked: {next}");
                    }
                });
            }
            Ok(())
        }
        SubmissionStatus::Failed { message } => anyhow::bail!("{message}"),
        other => anyhow::bail!("unexpected submission status: {}", other.as_str()),
    }
}
