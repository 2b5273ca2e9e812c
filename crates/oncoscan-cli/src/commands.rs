//! Command handlers for the `oncoscan` binary.

use std::path::{Path, PathBuf};

use oncoscan_client::PredictionClient;
use oncoscan_core::models::case::CaseField;
use oncoscan_core::models::prediction::SubmissionResult;
use oncoscan_core::routes::ADD_CASE_ROUTE;
use oncoscan_intake::{AddCaseView, PickedFile, RouteDecision, SubmitOutcome, route_guard};

use crate::config::{self, OncoscanConfig};

/// Everything the add-case form asks for.
#[derive(Debug, Clone, clap::Args)]
pub struct SubmitArgs {
    /// Patient's full name
    #[arg(long)]
    pub name: String,

    /// Patient's age
    #[arg(long)]
    pub age: String,

    /// Male or Female
    #[arg(long)]
    pub gender: String,

    /// Contact email address
    #[arg(long)]
    pub email: String,

    /// Contact phone number
    #[arg(long)]
    pub phone: String,

    /// JPG, JPEG or PNG image of the scan
    #[arg(long)]
    pub image: PathBuf,
}

/// Fill the add-case form, submit it, and print the prediction.
pub async fn submit(config: &OncoscanConfig, args: SubmitArgs) -> eyre::Result<SubmissionResult> {
    let client = PredictionClient::new(&config.client_config())?;

    // The view is only mounted once the guard lets it render.
    let view = match route_guard(config.is_authenticated(), || AddCaseView::mount(client)) {
        RouteDecision::Render(mount) => mount(),
        RouteDecision::Redirect(nav) => {
            tracing::warn!(route = ADD_CASE_ROUTE, redirect = %nav.to, "route guarded");
            eyre::bail!(
                "not signed in, {ADD_CASE_ROUTE} redirected to {} (run `oncoscan login` first)",
                nav.to
            );
        }
    };

    for (field, value) in [
        (CaseField::Name, args.name),
        (CaseField::Age, args.age),
        (CaseField::Gender, args.gender),
        (CaseField::Email, args.email),
        (CaseField::Number, args.phone),
    ] {
        view.update_field(field, value).await;
    }

    let picked = PickedFile::from_path(&args.image).await?;
    let selected = view.select_image(Some(picked)).await;
    print_notifications(&view).await;
    selected?;

    let outcome = view.submit().await?;
    print_notifications(&view).await;

    match outcome {
        SubmitOutcome::Ready(result) => {
            println!("Prediction Complete");
            println!("Result: {result}");
            if let Some(nav) = view.acknowledge_result().await? {
                println!("→ {}", nav.to);
            }
            Ok(result)
        }
        SubmitOutcome::Invalid(err) => Err(eyre::eyre!(err)),
        SubmitOutcome::Failed(err) => Err(eyre::eyre!(err)),
        SubmitOutcome::AlreadyInFlight | SubmitOutcome::Cancelled => {
            eyre::bail!("submission did not complete")
        }
    }
}

async fn print_notifications<S: oncoscan_client::PredictionService>(view: &AddCaseView<S>) {
    for note in view.form().lock().await.take_notifications() {
        eprintln!("✗ {}", note.message);
    }
}

pub fn login(dir: &Path, token: String) -> eyre::Result<()> {
    let token = token.trim().to_string();
    if token.is_empty() {
        eyre::bail!("session token must not be empty");
    }

    let mut config = config::load_or_default(dir)?;
    config.session_token = Some(token);
    config.updated_at = jiff::Timestamp::now();
    config::save_config(dir, &config)?;
    println!("Signed in");
    Ok(())
}

pub fn logout(dir: &Path) -> eyre::Result<()> {
    let mut config = config::load_or_default(dir)?;
    if config.session_token.take().is_none() {
        println!("Not signed in");
        return Ok(());
    }
    config.updated_at = jiff::Timestamp::now();
    config::save_config(dir, &config)?;
    println!("Signed out");
    Ok(())
}

pub fn show_config(config: &OncoscanConfig) -> eyre::Result<()> {
    let info = config::config_info(config);
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

pub fn set_config(
    dir: &Path,
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
) -> eyre::Result<OncoscanConfig> {
    let mut config = config::load_or_default(dir)?;

    if let Some(endpoint) = endpoint {
        // Reject endpoints the client would refuse later.
        PredictionClient::new(&oncoscan_client::ClientConfig {
            endpoint: endpoint.clone(),
            timeout: None,
        })?;
        config.endpoint = endpoint;
    }
    if let Some(secs) = timeout_secs {
        config.request_timeout_secs = (secs > 0).then_some(secs);
    }

    config.updated_at = jiff::Timestamp::now();
    config::save_config(dir, &config)?;
    Ok(config)
}

pub fn reset_config(dir: &Path) -> eyre::Result<()> {
    config::delete_config(dir)?;
    println!("Configuration reset");
    Ok(())
}
