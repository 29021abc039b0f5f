//! One-shot startup seeding.
//!
//! Runs before the server starts accepting requests, one entity group at a
//! time, each gated by its `INIT_*` variable (anything but the exact string
//! `"false"` means run). Records are submitted sequentially through the
//! entity services so the duplicate check never races itself.

pub mod fixtures;
pub mod normalizer;

use std::env;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::entities::{prelude::*, telegrams};
use crate::models::response::{BatchOutcome, Envelope};
use crate::models::robot::CreateRobotRequest;
use crate::models::telegram::CreateTelegramRequest;
use crate::models::trading_pair::CreateTradingPairRequest;
use crate::models::user::CreateUserRequest;
use crate::services::coingecko::CoinMarket;
use crate::services::{asset, asset_metric, exchange, robot, telegram, trading_pair, user};
use crate::AppState;

// The original data set only takes the first few tickers of the listing.
const MAX_SEED_TICKERS: usize = 11;

fn gate_open(name: &str) -> bool {
    env::var(name).map(|value| value != "false").unwrap_or(true)
}

pub async fn run(state: &AppState) {
    tracing::info!("Running startup seeding");

    if gate_open("INIT_ASSETS") {
        seed_assets(state).await;
    }
    if gate_open("INIT_EXCHANGES") {
        seed_exchanges(state).await;
    }
    if gate_open("INIT_TRADING_PAIRS") {
        seed_trading_pairs(&state.db).await;
    }
    if gate_open("INIT_ASSET_METRICS") {
        seed_asset_metrics(&state.db).await;
    }
    if gate_open("INIT_USERS") {
        seed_users(&state.db).await;
    }
    if gate_open("INIT_TELEGRAM") {
        seed_telegrams(&state.db).await;
    }
    if gate_open("INIT_ROBOTS") {
        seed_robots(&state.db).await;
    }

    tracing::info!("Startup seeding finished");
}

fn log_outcome<T>(group: &str, result: &Envelope<BatchOutcome<T>>) {
    match &result.data {
        Some(outcome) => tracing::info!(
            "Seeded {}: {} created, {} duplicates, {} failed",
            group,
            outcome.created.len(),
            outcome.duplicates.len(),
            outcome.failed.len()
        ),
        None => tracing::error!(
            "Seeding {} failed at the batch level (status {})",
            group,
            result.status_code
        ),
    }
}

/// Ascending market-cap rank, missing rank last. The sort must be stable so
/// equally ranked records keep their source order.
pub fn sort_by_market_cap_rank(market: &mut [CoinMarket]) {
    market.sort_by_key(|raw| raw.market_cap_rank.map(i64::from).unwrap_or(i64::MAX));
}

async fn seed_assets(state: &AppState) {
    let mut market = if state.coingecko.has_api_key() {
        match state.coingecko.get_market_data("usd").await {
            Ok(data) if !data.is_empty() => data,
            Ok(_) => {
                tracing::warn!("CoinGecko returned no market data, using bundled fixture");
                fixtures::market_data()
            }
            Err(e) => {
                tracing::warn!("Market data fetch failed ({}), using bundled fixture", e);
                fixtures::market_data()
            }
        }
    } else {
        tracing::info!("COINGECKO_API_KEY not set, seeding assets from bundled fixture");
        fixtures::market_data()
    };

    sort_by_market_cap_rank(&mut market);

    let requests = market.iter().map(normalizer::asset_from_market).collect();
    let result = asset::create_assets_batch(&state.db, requests).await;
    log_outcome("assets", &result);
}

async fn seed_exchanges(state: &AppState) {
    let mut listings = if state.coingecko.has_api_key() {
        match state.coingecko.get_exchanges().await {
            Ok(data) if !data.is_empty() => data,
            Ok(_) => {
                tracing::warn!("CoinGecko returned no exchanges, using bundled fixture");
                fixtures::exchanges()
            }
            Err(e) => {
                tracing::warn!("Exchange fetch failed ({}), using bundled fixture", e);
                fixtures::exchanges()
            }
        }
    } else {
        tracing::info!("COINGECKO_API_KEY not set, seeding exchanges from bundled fixture");
        fixtures::exchanges()
    };

    listings.sort_by_key(|raw| raw.trust_score_rank.map(i64::from).unwrap_or(i64::MAX));

    let mut outcome = BatchOutcome::default();
    for raw in &listings {
        let result =
            exchange::create_exchange(&state.db, normalizer::exchange_from_listing(raw)).await;
        outcome.record(&raw.id, result);
    }
    log_outcome("exchanges", &Envelope::multi_status(outcome));
}

async fn seed_trading_pairs(db: &DatabaseConnection) {
    let tickers = fixtures::bitcoin_tickers();

    let mut outcome = BatchOutcome::default();
    let mut skipped = 0usize;

    for raw in tickers.tickers.iter().take(MAX_SEED_TICKERS) {
        let base = asset::find_by_symbol(db, &raw.base.to_lowercase()).await;
        let quote = asset::find_by_symbol(db, &raw.target.to_lowercase()).await;
        let listed_on = exchange::find_by_symbol(db, &raw.market.identifier).await;

        let (Some(base), Some(quote), Some(listed_on)) = (base.data, quote.data, listed_on.data)
        else {
            tracing::warn!(
                base = %raw.base,
                target = %raw.target,
                market = %raw.market.identifier,
                "skipping ticker with missing prerequisite"
            );
            skipped += 1;
            continue;
        };

        let symbol = format!("{}/{}", base.symbol, quote.symbol);
        let request = CreateTradingPairRequest {
            exchange_id: listed_on.id,
            base_asset_id: base.id,
            quote_asset_id: quote.id,
            symbol: symbol.clone(),
            min_trade_amount: Some("1".to_string()),
            max_trade_amount: Some("1000000".to_string()),
            tick_size: Some("0.01".to_string()),
            step_size: Some("0.01".to_string()),
        };

        let result = trading_pair::create_trading_pair(db, request).await;
        outcome.record(&symbol, result);
    }

    if skipped > 0 {
        tracing::info!("Skipped {} tickers with missing prerequisites", skipped);
    }
    log_outcome("trading pairs", &Envelope::multi_status(outcome));
}

async fn seed_asset_metrics(db: &DatabaseConnection) {
    let btc = match asset::find_by_symbol(db, "btc").await.data {
        Some(asset) => asset,
        None => {
            tracing::error!("Asset btc not found, skipping metric seeding");
            return;
        }
    };
    let binance = match exchange::find_by_symbol(db, "binance").await.data {
        Some(exchange) => exchange,
        None => {
            tracing::error!("Exchange binance not found, skipping metric seeding");
            return;
        }
    };
    let snapshot = match fixtures::market_data()
        .into_iter()
        .find(|c| c.id.as_deref() == Some("bitcoin"))
    {
        Some(snapshot) => snapshot,
        None => {
            tracing::error!("bitcoin snapshot missing from market data fixture");
            return;
        }
    };

    let chart = fixtures::bitcoin_market_chart();

    let mut outcome = BatchOutcome::default();
    for index in 0..chart.prices.len() {
        let Some(request) = normalizer::metric_from_chart(btc.id, binance.id, &chart, index, &snapshot)
        else {
            continue;
        };
        let key = request.timestamp.to_rfc3339();
        let result = asset_metric::create_asset_metric(db, request).await;
        outcome.record(&key, result);
    }
    log_outcome("asset metrics", &Envelope::multi_status(outcome));
}

async fn seed_users(db: &DatabaseConnection) {
    let seeds = [
        CreateUserRequest {
            email: "user.user@gmail.com".to_string(),
            username: "imehdi".to_string(),
        },
        CreateUserRequest {
            email: "user.admin@gmail.com".to_string(),
            username: "iadmin".to_string(),
        },
    ];

    let mut outcome = BatchOutcome::default();
    for raw in seeds {
        let key = raw.username.clone();
        let result = user::create_user(db, raw).await;
        outcome.record(&key, result);
    }
    log_outcome("users", &Envelope::multi_status(outcome));
}

async fn seed_telegrams(db: &DatabaseConnection) {
    let seeds = [
        CreateTelegramRequest {
            bot_token: "bot_token_test".to_string(),
            chat_id: "chat_id_test".to_string(),
            email: "user.user@gmail.com".to_string(),
            username: "imehdi".to_string(),
        },
        CreateTelegramRequest {
            bot_token: "bot_token_test1".to_string(),
            chat_id: "chat_id_test1".to_string(),
            email: "user.admin@gmail.com".to_string(),
            username: "iadmin".to_string(),
        },
    ];

    let mut outcome = BatchOutcome::default();
    for raw in seeds {
        let key = raw.username.clone();
        let result = telegram::create_telegram(db, raw).await;
        outcome.record(&key, result);
    }
    log_outcome("telegrams", &Envelope::multi_status(outcome));
}

async fn seed_robots(db: &DatabaseConnection) {
    let users = match user::get_all(db).await.data {
        Some(users) => users,
        None => {
            tracing::error!("Could not list users, skipping robot seeding");
            return;
        }
    };

    let mut outcome = BatchOutcome::default();
    for u in users {
        let binding = Telegrams::find()
            .filter(telegrams::Column::UserId.eq(u.id))
            .one(db)
            .await;

        let telegram_id = match binding {
            Ok(Some(binding)) => binding.id,
            Ok(None) => {
                tracing::warn!(username = %u.username, "user has no telegram bot, skipping");
                continue;
            }
            Err(e) => {
                tracing::error!("failed to look up telegram binding: {}", e);
                continue;
            }
        };

        let name = format!("News{}Bot", u.username);
        let request = CreateRobotRequest {
            user_id: u.id,
            telegram_id,
            name: name.clone(),
            strategy: "all".to_string(),
            config: Some(serde_json::json!({ "json": "test" })),
        };

        let result = robot::create_robot(db, request).await;
        outcome.record(&name, result);
    }
    log_outcome("robots", &Envelope::multi_status(outcome));
}
