pub mod carrier_card;
pub mod kpi_card;
pub mod quote_details;
pub mod service_badge;
pub mod toast;
