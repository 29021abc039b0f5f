pub mod asset;
pub mod asset_metric;
pub mod exchange;
pub mod response;
pub mod robot;
pub mod telegram;
pub mod trading_pair;
pub mod user;
