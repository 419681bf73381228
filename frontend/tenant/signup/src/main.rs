use shared::api::client::HttpApiClient;
use shared::config::get_config;
use shared::entity::signup::SignupInput;
use shared::form::signup::SignupForm;

use anyhow::Context;
use std::io::Read;
use std::process::ExitCode;
use tracing::{debug, info, instrument, warn};

/// Read the signup form document from stdin.
#[instrument(name = "frontend.tenant.signup.read_input")]
fn read_input() -> anyhow::Result<SignupInput> {
    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .context("failed to read form from stdin")?;
    serde_json::from_str(&body).context("form document is not valid JSON")
}

#[instrument(skip(form, api), name = "frontend.tenant.signup.handler")]
async fn handler(form: &mut SignupForm, api: &HttpApiClient) -> bool {
    match form.submit(api).await {
        Ok(message) => {
            info!("tenant signup accepted: {}", message);
            true
        }
        Err(e) => {
            warn!("tenant signup not completed: {}", e);
            false
        }
    }
}

// Custom allocator configuration
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    shared::tracer::init_tracing()?;
    let config = get_config();
    info!("Starting tenant signup against {}", config.signup_url());

    let input = read_input()?;
    let api = HttpApiClient::new(config.clone())?;
    let mut form = SignupForm::from_config(config).with_input(input);
    debug!(strength = %form.password_strength(), "password scored");

    let accepted = handler(&mut form, &api).await;
    println!("{}", serde_json::to_string_pretty(&form.view())?);

    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
