//! Quote grouping, ranking and pricing logic lives here.

pub mod app_state;
pub mod entities;
pub mod grouping;
pub mod navigator;
pub mod pricing;
pub mod service_level;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState, SheetSource};
#[allow(unused_imports)]
pub use entities::{
    Carrier, CarrierInfo, PriceUpdate, Quote, QuoteId, QuoteSheet, ServiceLevel, ShipmentInfo,
};
#[allow(unused_imports)]
pub use grouping::{carrier_id, group_and_rank, BoardSummary, CarrierGroup};
#[allow(unused_imports)]
pub use navigator::ServiceNavigator;
#[allow(unused_imports)]
pub use pricing::{
    format_currency, format_weight, margin_pct, parse_price_input, reprice, PriceInputError,
};
#[allow(unused_imports)]
pub use service_level::{service_label, ServiceTier};
