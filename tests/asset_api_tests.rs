mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use cryptocore_backend::entities::{assets, exchanges};

use crate::common::{empty_mock, mock_db, test_router};

fn btc_row() -> assets::Model {
    assets::Model {
        id: 1,
        symbol: "btc".to_string(),
        name: "Bitcoin".to_string(),
        coin_gecko_id: "bitcoin".to_string(),
        coin_market_cap_id: "N/A".to_string(),
        market_cap: "1265432100000".to_string(),
        market_cap_rank: 1,
        image: "N/A".to_string(),
        is_active: true,
        is_tracked: true,
    }
}

fn create_asset_request() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/core/v1/asset/create-asset")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "symbol": "btc",
                "name": "Bitcoin",
                "coinGeckoId": "bitcoin",
                "marketCap": "1265432100000",
                "marketCapRank": 1
            })
            .to_string(),
        ))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_asset_returns_success_envelope() {
    let db = mock_db(
        empty_mock().append_query_results([Vec::<assets::Model>::new(), vec![btc_row()]]),
    );
    let app = test_router(db);

    let response = app.oneshot(create_asset_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["isSuccess"], true);
    assert_eq!(json["statusCode"], 200);
    assert!(json["errorCause"].is_null());
    assert_eq!(json["data"]["symbol"], "btc");
}

#[tokio::test]
async fn duplicate_asset_returns_conflict_envelope() {
    let db = mock_db(empty_mock().append_query_results([vec![btc_row()]]));
    let app = test_router(db);

    let response = app.oneshot(create_asset_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["isSuccess"], false);
    assert_eq!(json["statusCode"], 409);
    assert_eq!(json["errorCause"], "DUPLICATE");
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn unknown_symbol_lookup_returns_not_found_envelope() {
    let db = mock_db(empty_mock().append_query_results([Vec::<assets::Model>::new()]));
    let app = test_router(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/core/v1/asset/doge")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["errorCause"], "NOT_FOUND");
}

#[tokio::test]
async fn trading_pair_with_unknown_exchange_is_rejected() {
    // Only the exchange lookup is queued; the guard must answer 404 without
    // touching the trading_pairs table.
    let db = mock_db(empty_mock().append_query_results([Vec::<exchanges::Model>::new()]));
    let app = test_router(db);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/core/v1/trading-pair/create-trading-pair")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "exchangeId": 99,
                        "baseAssetId": 1,
                        "quoteAssetId": 2,
                        "symbol": "btc/usdt"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["isSuccess"], false);
    assert_eq!(json["errorCause"], "NOT_FOUND");
}
