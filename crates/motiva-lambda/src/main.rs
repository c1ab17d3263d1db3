use tracing_subscriber::EnvFilter;

use motiva_lambda::build_router;
use motiva_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = AppState::from_env();
    if state.payments.is_none() {
        tracing::warn!("STRIPE_SECRET_KEY is not set, verification routes will answer 500");
    }

    let app = build_router(state);
    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
