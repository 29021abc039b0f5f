use axum::routing::{get, post};
use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use cryptocore_backend::services::coingecko::CoinGeckoService;
use cryptocore_backend::{handlers, AppState};

/// Mock database pre-loaded with the query results a test expects, in the
/// order the handlers will issue them.
pub fn mock_db(mock: MockDatabase) -> DatabaseConnection {
    mock.into_connection()
}

pub fn empty_mock() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn test_state(db: DatabaseConnection) -> AppState {
    let coingecko = CoinGeckoService::new(
        String::new(),
        "https://api.coingecko.com/api/v3".to_string(),
    );
    AppState {
        db: std::sync::Arc::new(db),
        coingecko,
    }
}

/// The routes under test, mounted the way main.rs mounts them.
pub fn test_router(db: DatabaseConnection) -> Router {
    let api = Router::new()
        .route("/asset/create-asset", post(handlers::asset::create_asset))
        .route("/asset/{symbol}", get(handlers::asset::find_by_symbol))
        .route(
            "/trading-pair/create-trading-pair",
            post(handlers::trading_pair::create_trading_pair),
        )
        .route("/user/create-user", post(handlers::user::create_user));

    Router::new().nest("/core/v1", api).with_state(test_state(db))
}
