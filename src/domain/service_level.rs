use super::entities::Quote;

/// Service tiers recognised from carrier service codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceTier {
    Unspecified,
    Guaranteed,
    Expedited,
    Economy,
    Standard,
}

impl ServiceTier {
    /// Tier for a carrier service code such as `GTD_NOON` or `EXPEDITED`.
    pub fn classify(code: Option<&str>) -> Self {
        let Some(code) = code.filter(|code| !code.is_empty()) else {
            return ServiceTier::Unspecified;
        };

        let has = |tokens: &[&str]| tokens.iter().any(|token| code.contains(token));
        if has(&["GUARANTEED", "GTD"]) {
            ServiceTier::Guaranteed
        } else if has(&["EXPEDITED", "PRIORITY", "URGENT"]) {
            ServiceTier::Expedited
        } else if has(&["ECONOMY", "DEFERRED"]) {
            ServiceTier::Economy
        } else {
            ServiceTier::Standard
        }
    }

    pub fn of(quote: &Quote) -> Self {
        Self::classify(quote.service_code())
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ServiceTier::Unspecified | ServiceTier::Economy => "🕒",
            ServiceTier::Guaranteed => "🛡️",
            ServiceTier::Expedited => "⚡",
            ServiceTier::Standard => "🚚",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            ServiceTier::Unspecified => "text-slate-400",
            ServiceTier::Guaranteed => "text-emerald-400",
            ServiceTier::Expedited => "text-orange-400",
            ServiceTier::Economy => "text-purple-400",
            ServiceTier::Standard => "text-sky-400",
        }
    }
}

/// Display name for a quote's service level.
pub fn service_label(quote: &Quote) -> &str {
    quote
        .service_description()
        .or_else(|| quote.service_code())
        .unwrap_or("Standard")
}
