//! Oneisok CLI - quote-request relay server and command-line client
mod fmt;

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use api::{AppState, HttpQuoteClient};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use oneisok_core::{
    compose_email, Budget, CheckboxVerifier, Field, FieldValue, FormState, MailConfig, Priority,
    Service, SmtpMailTransport, Submission, SubmitOutcome,
};
use owo_colors::OwoColorize as _;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::fmt::StatusFormatter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().or_else(|_| EnvFilter::builder().parse("info"))?,
            )
            .event_format(StatusFormatter)
            .with_writer(std::io::stderr)
            .init();
    }
    debug!("Command line arguments: {:?}", cli);

    match cli.command {
        Commands::Serve { bind } => serve(bind).await,
        Commands::Send(args) => send(args).await,
        Commands::Preview { file, output } => preview(&file, output),
    }
}

const ABOUT: &str = "Relay Oneisok quote requests to the sales inbox";
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(about = ABOUT)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the mail relay server
    Serve {
        /// Address to listen on
        #[arg(long, env = "ONEISOK_BIND_ADDR", default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
    },
    /// Fill in a quote request and submit it to a relay server
    Send(SendArgs),
    /// Print the email a submission would produce
    Preview {
        /// JSON file holding the submission
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Args, Debug)]
struct SendArgs {
    /// Relay server origin
    #[arg(long, env = "ONEISOK_RELAY_URL", default_value = "http://127.0.0.1:8080")]
    server: String,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    address: Option<String>,

    /// One of: web-development, mobile-app, ui-ux-design, digital-marketing, seo
    #[arg(long)]
    service: Option<Service>,

    /// One of: under-5k, 5k-10k, 10k-25k, 25k-50k, over-50k
    #[arg(long)]
    budget: Option<Budget>,

    /// Low, Medium, or Urgent
    #[arg(long, default_value = "Low")]
    priority: Priority,

    /// Estimated launch date (YYYY-MM-DD)
    #[arg(long)]
    launch_date: Option<String>,

    #[arg(long)]
    comments: Option<String>,

    /// Consent to having the submitted data collected
    #[arg(long)]
    consent: bool,

    /// Human verification token
    #[arg(long)]
    human_token: Option<String>,
}

/// Output format options
#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Headers followed by the plain-text body
    Text,
    /// The email as JSON
    Json,
}

/// Run the relay until Ctrl+C or SIGTERM
async fn serve(bind: SocketAddr) -> anyhow::Result<()> {
    let config = MailConfig::from_env();
    if let Err(e) = config.validate() {
        warn!("{}; every relay attempt will fail until this is fixed", e);
    }
    debug!("Mail configuration: {:?}", config);

    let state = Arc::new(AppState::new(config, SmtpMailTransport::new()));
    let app = api::router(state);

    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind to {}", bind))?;
    info!("Relay listening on http://{}", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Drive the form pipeline from command-line values
async fn send(args: SendArgs) -> anyhow::Result<()> {
    let mut form = FormState::new();

    let text_fields = [
        (Field::Name, args.name),
        (Field::Email, args.email),
        (Field::Phone, args.phone),
        (Field::Address, args.address),
        (Field::Service, args.service.map(|s| s.as_str().to_owned())),
        (Field::Budget, args.budget.map(|b| b.as_str().to_owned())),
        (Field::Priority, Some(args.priority.as_str().to_owned())),
        (Field::LaunchDate, args.launch_date),
        (Field::Comments, args.comments),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value {
            form.update_field(field, FieldValue::Text(value));
        }
    }
    form.update_field(Field::Consent, FieldValue::Checked(args.consent));

    if let Some(token) = &args.human_token {
        form.verify_human(&CheckboxVerifier, token);
    }

    println!("Form Progress: {}%", form.completion_percent());

    let missing: Vec<&str> = Field::REQUIRED
        .iter()
        .filter(|field| !field.is_checkbox() && !form.is_completed(**field))
        .map(|field| field.as_str())
        .collect();
    if !missing.is_empty() {
        error!("Missing required fields: {}", missing.join(", "));
        process::exit(1);
    }

    let client = HttpQuoteClient::new(args.server);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Sending quote request to {}", client.endpoint()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = form.submit(&client).await;
    spinner.finish_and_clear();

    match outcome {
        Some(SubmitOutcome::Sent) => {
            println!(
                "{} {}",
                "Success:".green().bold(),
                SubmitOutcome::Sent.message()
            );
            Ok(())
        }
        Some(outcome) => {
            error!("{}", outcome.message());
            process::exit(1);
        }
        None => {
            error!("Submission blocked: human verification and consent are both required");
            process::exit(1);
        }
    }
}

/// Compose and print the email for a submission file
fn preview(file: &Path, output: OutputFormat) -> anyhow::Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let submission = Submission::from_json_lenient(&value);
    let email = compose_email(&submission, &MailConfig::from_env());

    match output {
        OutputFormat::Text => {
            println!("{} {}", "From:".dimmed(), email.from);
            println!("{} {}", "To:".dimmed(), email.to);
            println!("{} {}", "Subject:".dimmed(), email.subject);
            println!();
            print!("{}", email.body);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&email)?),
    }

    Ok(())
}
