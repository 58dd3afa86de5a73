use thiserror::Error;

use super::entities::Quote;

/// Formats an amount as US dollars, e.g. `$1,234.50`. Non-finite input renders `N/A`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "N/A".to_string();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Formats a shipment weight with thousands separators and up to three decimals.
pub fn format_weight(weight: f64) -> String {
    if !weight.is_finite() {
        return "N/A".to_string();
    }
    let fixed = format!("{:.3}", weight.abs());
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (trimmed, None),
    };
    let sign = if weight < 0.0 && trimmed != "0" { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}{}.{fraction}", group_thousands(whole)),
        None => format!("{sign}{}", group_thousands(whole)),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Profit as a percentage of the customer price.
pub fn margin_pct(quote: &Quote) -> Option<f64> {
    let price = quote.customer_price;
    if !price.is_finite() || price <= 0.0 || !quote.profit.is_finite() {
        return None;
    }
    Some(quote.profit / price * 100.0)
}

/// Overrides the customer price; profit follows from the carrier rate.
pub fn reprice(quote: &mut Quote, new_price: f64) {
    quote.customer_price = new_price;
    quote.profit = new_price - quote.carrier_total_rate;
}

#[derive(Debug, Error, PartialEq)]
pub enum PriceInputError {
    #[error("enter a price")]
    Empty,
    #[error("'{0}' is not a valid price")]
    NotANumber(String),
    #[error("price cannot be negative")]
    Negative,
    #[error("price must be a finite amount")]
    NotFinite,
}

/// Parses a user-typed price such as `1,234.50` or `$980`.
pub fn parse_price_input(input: &str) -> Result<f64, PriceInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PriceInputError::Empty);
    }
    let cleaned: String = trimmed
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',' && !ch.is_whitespace())
        .collect();
    let value = cleaned
        .parse::<f64>()
        .map_err(|_| PriceInputError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(PriceInputError::NotFinite);
    }
    if value < 0.0 {
        return Err(PriceInputError::Negative);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Carrier;

    fn quote(price: f64, profit: f64, rate: f64) -> Quote {
        Quote {
            quote_id: 11,
            carrier: Carrier::default(),
            carrier_code: None,
            customer_price: price,
            profit,
            carrier_total_rate: rate,
            transit_days: Some(3),
            service_level: None,
        }
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.5), "$999.50");
        assert_eq!(format_currency(1234.567), "$1,234.57");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-42.1), "-$42.10");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(f64::NAN), "N/A");
        assert_eq!(format_currency(f64::INFINITY), "N/A");
    }

    #[test]
    fn weight_formatting() {
        assert_eq!(format_weight(1500.0), "1,500");
        assert_eq!(format_weight(12345.25), "12,345.25");
        assert_eq!(format_weight(980.0), "980");
        assert_eq!(format_weight(0.1234), "0.123");
        assert_eq!(format_weight(f64::NAN), "N/A");
    }

    #[test]
    fn margin_requires_positive_price() {
        assert_eq!(margin_pct(&quote(200.0, 50.0, 150.0)), Some(25.0));
        assert_eq!(margin_pct(&quote(0.0, 50.0, 150.0)), None);
        assert_eq!(margin_pct(&quote(f64::NAN, 50.0, 150.0)), None);
    }

    #[test]
    fn reprice_recomputes_profit() {
        let mut q = quote(200.0, 50.0, 150.0);
        reprice(&mut q, 260.0);
        assert_eq!(q.customer_price, 260.0);
        assert_eq!(q.profit, 110.0);
    }

    #[test]
    fn parses_price_input() {
        assert_eq!(parse_price_input(" 1,234.50 "), Ok(1234.5));
        assert_eq!(parse_price_input("$980"), Ok(980.0));
        assert_eq!(parse_price_input(""), Err(PriceInputError::Empty));
        assert_eq!(parse_price_input("-5"), Err(PriceInputError::Negative));
        assert_eq!(parse_price_input("inf"), Err(PriceInputError::NotFinite));
        assert_eq!(
            parse_price_input("cheap"),
            Err(PriceInputError::NotANumber("cheap".to_string()))
        );
    }
}
