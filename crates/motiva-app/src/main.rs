use std::io::{self, Write as _};
use std::path::PathBuf;

use clap::Parser;
use jiff::{Timestamp, Zoned};
use tracing_subscriber::EnvFilter;

use motiva_app::api::ApiVerifier;
use motiva_app::config::{self, AppConfig};
use motiva_app::flow::AssessmentFlow;
use motiva_core::interpretations::interpretation;
use motiva_core::models::question::{QUESTION_COUNT, SCALE, question_bank};
use motiva_core::models::report::Report;
use motiva_core::scoring::compute_ranking;
use motiva_email::client::{EmailClient, ReportSummary};
use motiva_email::delivery::{DeliveryLedger, DeliveryStatus, send_report_summary};
use motiva_export::pdf::{generate_pdf, report_filename};
use motiva_export::render::render_report;
use motiva_export::styles::PageStyles;
use motiva_gate::flows::{GateState, PaymentGate};
use motiva_storage::file::FileStore;

/// Career Motivation Map: 21 questions, six drivers, one ranked profile.
#[derive(Parser, Debug)]
#[command(name = "motiva", version, about = "Career Motivation Map assessment")]
struct Cli {
    /// Checkout session id from the payment redirect, if any
    #[arg(long)]
    session_id: Option<String>,

    /// Config file path (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the PDF report (defaults to the report's own name)
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;

    run(cli, config).await
}

async fn run(cli: Cli, config: AppConfig) -> eyre::Result<()> {
    println!("Career Motivation Map");
    println!("21 questions, about 7 minutes. Answer instinctively.");
    println!();
    println!("Rate each statement:");
    for (_, label) in SCALE {
        println!("  {label}");
    }
    println!();

    let mut flow = AssessmentFlow::new();
    flow.name = prompt("Your name: ")?;
    flow.email = loop {
        let email = prompt("Email for your results: ")?;
        if email.is_empty() {
            println!("An email address is required.");
            continue;
        }
        break email;
    };

    for (i, question) in question_bank().iter().enumerate() {
        println!();
        println!("{}/{} {}", i + 1, QUESTION_COUNT, question.prompt);
        loop {
            let raw = prompt("Rating (1-5): ")?;
            if let Ok(value) = raw.parse::<u8>()
                && flow.record_answer(question.id, value).is_ok()
            {
                break;
            }
            println!("Enter a whole number from 1 to 5.");
        }
    }

    flow.submit()?;

    let store = FileStore::default_location()?;
    let mut gate = PaymentGate::new(store);
    gate.restore(Timestamp::now());

    let verifier = ApiVerifier::new(config.api_base_url.as_str())?;

    if !gate.state().is_authorized()
        && let Some(session_id) = cli.session_id.as_deref()
    {
        println!();
        println!("Checking your checkout session...");
        gate.verify_session(&verifier, session_id, Timestamp::now())
            .await;
    }

    if !gate.state().is_authorized() {
        println!();
        println!("Checking for a payment under {}...", flow.email);
        gate.verify_email(&verifier, &flow.email, Timestamp::now())
            .await;
    }

    while !gate.state().is_authorized() {
        println!();
        println!("Your results are ready, but we could not find a payment.");
        println!("Complete the one-time purchase here:");
        println!("  {}", config.checkout_url);
        let choice = prompt("Press Enter to check again, or type q to quit: ")?;
        if choice.eq_ignore_ascii_case("q") {
            println!("Your answers were not saved. Run the assessment again any time.");
            return Ok(());
        }
        gate.verify_email(&verifier, &flow.email, Timestamp::now())
            .await;
    }

    flow.mark_authorized();

    let today = Zoned::now().date();
    let report = Report::new(flow.name.clone(), today, compute_ranking(flow.answers()));

    println!();
    println!("Your motivation profile");
    for (rank, score) in report.scores.iter().enumerate() {
        println!("  {}. {} {:>3}/100", rank + 1, score.label, score.scaled);
    }
    for score in report.scores.iter().take(2) {
        let interp = interpretation(score.driver);
        println!();
        println!("{}", interp.title);
        println!("{}", interp.meaning);
    }

    let rendered = render_report(&report)?;
    let pdf = generate_pdf(&rendered, &PageStyles::default())?;
    let out_path = cli
        .out
        .unwrap_or_else(|| PathBuf::from(report_filename(&flow.name)));
    std::fs::write(&out_path, &pdf)?;
    println!();
    println!("Full report saved to {}", out_path.display());

    let delivery_email = match gate.state() {
        GateState::Authorized(record) if !record.email.is_empty() => record.email.clone(),
        _ => flow.email.clone(),
    };

    if let Some(email_config) = config.email {
        if delivery_email.trim().is_empty() {
            tracing::info!("no delivery address, skipping summary email");
        } else {
            let client = EmailClient::new(email_config);
            let mut ledger = DeliveryLedger::new(FileStore::default_location()?);
            let summary = ReportSummary {
                to_email: delivery_email.clone(),
                to_name: flow.name.clone(),
                primary_driver: report
                    .primary()
                    .map(|s| s.label.to_string())
                    .unwrap_or_default(),
                secondary_driver: report
                    .secondary()
                    .map(|s| s.label.to_string())
                    .unwrap_or_default(),
            };
            match send_report_summary(&client, &mut ledger, &summary, today).await {
                DeliveryStatus::Sent => {
                    println!("A summary is on its way to {delivery_email}.");
                }
                DeliveryStatus::AlreadySent => {
                    println!("Today's summary email already went to {delivery_email}.");
                }
                DeliveryStatus::Failed => {
                    println!("The summary email could not be sent. Your PDF is saved locally.");
                }
            }
        }
    }

    Ok(())
}

fn prompt(label: &str) -> eyre::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Err(eyre::eyre!("input closed before the assessment finished"));
    }
    Ok(line.trim().to_string())
}
