use crate::output::print_json;
use genesix_core::config::WebhookEndpoint;

pub fn run(explicit: Option<&str>, json: bool) -> anyhow::Result<()> {
    let endpoint = WebhookEndpoint::resolve(explicit);

    if json {
        #[derive(serde::Serialize)]
        struct WebhookOutput<'a> {
            url: &'a str,
            source: String,
            configured: bool,
        }
        return print_json(&WebhookOutput {
            url: endpoint.url(),
            source: endpoint.source().to_string(),
            configured: endpoint.is_configured(),
        });
    }

    println!("URL:        {}", endpoint.url());
    println!("Source:     {}", endpoint.source());
    println!(
        "Configured: {}",
        if endpoint.is_configured() { "yes" } else { "no" }
    );
    Ok(())
}
