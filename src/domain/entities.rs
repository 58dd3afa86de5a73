use serde::{Deserialize, Deserializer, Serialize};

/// Identifier for quotes as issued by the rating service.
pub type QuoteId = u64;

/// Carrier identity as it arrives on each quote.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub scac: Option<String>,
    #[serde(default)]
    pub mc_number: Option<String>,
    #[serde(default)]
    pub dot_number: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLevel {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A priced offer from one carrier for one service level.
///
/// Money fields become `NaN` when absent or `null` so a malformed record still
/// groups and renders as "N/A" instead of rejecting the whole sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub quote_id: QuoteId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub carrier: Carrier,
    #[serde(default)]
    pub carrier_code: Option<String>,
    #[serde(default = "missing_amount", deserialize_with = "amount_or_nan")]
    pub customer_price: f64,
    #[serde(default = "missing_amount", deserialize_with = "amount_or_nan")]
    pub profit: f64,
    #[serde(default = "missing_amount", deserialize_with = "amount_or_nan")]
    pub carrier_total_rate: f64,
    #[serde(default)]
    pub transit_days: Option<u32>,
    #[serde(default)]
    pub service_level: Option<ServiceLevel>,
}

fn missing_amount() -> f64 {
    f64::NAN
}

fn amount_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Quote {
    /// Transit days when the carrier reported a usable value.
    /// A zero is treated the same as a missing value.
    pub fn known_transit_days(&self) -> Option<u32> {
        self.transit_days.filter(|days| *days > 0)
    }

    pub fn service_code(&self) -> Option<&str> {
        self.service_level
            .as_ref()
            .and_then(|level| level.code.as_deref())
            .filter(|code| !code.is_empty())
    }

    pub fn service_description(&self) -> Option<&str> {
        self.service_level
            .as_ref()
            .and_then(|level| level.description.as_deref())
            .filter(|description| !description.is_empty())
    }
}

/// Shipment the quotes were requested for. Display only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentInfo {
    pub from_zip: String,
    pub to_zip: String,
    pub weight: f64,
    pub pallets: u32,
    pub pickup_date: String,
}

/// Header metadata shown on a carrier card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierInfo {
    pub scac: Option<String>,
    pub mc_number: Option<String>,
    pub dot_number: Option<String>,
}

/// A quote sheet: one shipment plus every quote returned for it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSheet {
    pub shipment: ShipmentInfo,
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

/// Emitted by the detail panel when the user overrides a customer price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceUpdate {
    pub quote_id: QuoteId,
    pub new_price: f64,
}
