pub use super::asset_metrics::Entity as AssetMetrics;
pub use super::assets::Entity as Assets;
pub use super::exchanges::Entity as Exchanges;
pub use super::robots::Entity as Robots;
pub use super::telegrams::Entity as Telegrams;
pub use super::trading_pairs::Entity as TradingPairs;
pub use super::users::Entity as Users;
