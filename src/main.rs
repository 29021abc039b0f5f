use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::env;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cryptocore_backend::{handlers, seed, services::coingecko::CoinGeckoService, AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cryptocore_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Connect to database
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    tracing::info!("Running migrations...");
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let coingecko = CoinGeckoService::new(
        env::var("COINGECKO_API_KEY").unwrap_or_default(),
        env::var("COINGECKO_BASE_URL")
            .unwrap_or_else(|_| "https://api.coingecko.com/api/v3".to_string()),
    );

    let state = AppState {
        db: std::sync::Arc::new(db),
        coingecko,
    };

    // Seed reference data before accepting requests
    seed::run(&state).await;

    // CORS
    let origins: Vec<HeaderValue> = env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000".to_string())
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .allow_credentials(true);

    // Build router
    let api = Router::new()
        .route("/asset/create-asset", post(handlers::asset::create_asset))
        .route("/asset/{symbol}", get(handlers::asset::find_by_symbol))
        .route(
            "/exchange/create-exchange",
            post(handlers::exchange::create_exchange),
        )
        .route("/exchange/{symbol}", get(handlers::exchange::find_by_symbol))
        .route(
            "/trading-pair/create-trading-pair",
            post(handlers::trading_pair::create_trading_pair),
        )
        .route(
            "/asset-metric/create-asset-metric",
            post(handlers::asset_metric::create_asset_metric),
        )
        .route("/user/create-user", post(handlers::user::create_user))
        .route("/user/all", get(handlers::user::get_all))
        .route(
            "/telegram/create-telegram",
            post(handlers::telegram::create_telegram),
        )
        .route("/robot/create-robot", post(handlers::robot::create_robot));

    let app = Router::new()
        .nest("/core/v1", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
