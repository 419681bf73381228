use shared::api::client::HttpApiClient;
use shared::config::get_config;
use shared::entity::login::LoginInput;
use shared::form::login::LoginForm;

use anyhow::Context;
use std::io::Read;
use std::process::ExitCode;
use tracing::{info, instrument, warn};

#[instrument(name = "frontend.auth.login.read_input")]
fn read_input() -> anyhow::Result<LoginInput> {
    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .context("failed to read form from stdin")?;
    serde_json::from_str(&body).context("form document is not valid JSON")
}

#[instrument(skip(form, api), name = "frontend.auth.login.handler")]
async fn handler(form: &mut LoginForm, api: &HttpApiClient) -> bool {
    match form.submit(api).await {
        Ok(message) => {
            info!("login accepted: {}", message);
            true
        }
        Err(e) => {
            warn!("login not completed: {}", e);
            false
        }
    }
}

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    shared::tracer::init_tracing()?;
    let config = get_config();
    info!("Starting login against {}", config.login_url());

    let input = read_input()?;
    let api = HttpApiClient::new(config.clone())?;
    let mut form = LoginForm::new().with_input(input);

    let accepted = handler(&mut form, &api).await;
    println!("{}", serde_json::to_string_pretty(&form.view())?);

    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
