// src/lib.rs

use sea_orm::DatabaseConnection;
use services::coingecko::CoinGeckoService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub coingecko: CoinGeckoService,
}

pub mod entities {
    pub mod prelude;

    pub mod asset_metrics;
    pub mod assets;
    pub mod exchanges;
    pub mod robots;
    pub mod telegrams;
    pub mod trading_pairs;
    pub mod users;
}

pub mod services {
    pub mod coingecko;

    pub mod asset;
    pub mod asset_metric;
    pub mod exchange;
    pub mod robot;
    pub mod telegram;
    pub mod trading_pair;
    pub mod user;
}

pub mod handlers;
pub mod models;
pub mod seed;
