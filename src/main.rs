use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use payee_onboarding::config::AppConfig;
use payee_onboarding::psp::http::HttpPspClient;
use payee_onboarding::psp::mock::MockPspClient;
use payee_onboarding::psp::PspClient;
use payee_onboarding::publisher::redis_stream::RedisStreamPublisher;
use payee_onboarding::repo::postgres::PgPayeeRepository;
use payee_onboarding::service::payee_service::PayeeService;
use payee_onboarding::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let payees_repo = Arc::new(PgPayeeRepository { pool: pool.clone() });

    let psp_client: Arc<dyn PspClient> = if cfg.psp_mode == "HTTP" {
        Arc::new(HttpPspClient {
            base_url: cfg.psp_base_url.clone(),
            api_key: cfg.psp_api_key.clone(),
            timeout_ms: cfg.psp_timeout_ms,
            client: reqwest::Client::new(),
        })
    } else {
        Arc::new(MockPspClient {
            behavior: "ALWAYS_SUCCESS".to_string(),
        })
    };

    let event_publisher = Arc::new(RedisStreamPublisher {
        client: redis::Client::open(cfg.redis_url.clone())?,
    });

    let payee_service = PayeeService {
        repository: payees_repo.clone(),
        psp_client,
        event_publisher,
    };

    let state = AppState {
        payee_service,
        payees_repo,
    };

    let operator_key = cfg.operator_api_key.clone();
    let operator_routes = Router::new()
        .route(
            "/payees/:payee_id/status",
            post(payee_onboarding::http::handlers::payees::change_status),
        )
        .layer(from_fn_with_state(
            operator_key,
            payee_onboarding::http::middleware::auth::require_operator_key,
        ));

    let app = Router::new()
        .route("/health", get(payee_onboarding::http::handlers::payees::health))
        .route("/payees", post(payee_onboarding::http::handlers::payees::onboard_payee))
        .route(
            "/payees/:payee_id",
            get(payee_onboarding::http::handlers::payees::get_payee),
        )
        .merge(operator_routes)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
