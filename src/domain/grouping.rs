//! Carrier grouping and ranking for the quote board.

use std::collections::HashMap;

use tracing::debug;

use super::entities::{CarrierInfo, Quote, QuoteId};

/// All quotes offered by one carrier, cheapest first.
#[derive(Clone, Debug, PartialEq)]
pub struct CarrierGroup {
    pub carrier_id: String,
    pub name: String,
    pub info: CarrierInfo,
    pub quotes: Vec<Quote>,
}

impl CarrierGroup {
    fn seeded_from(carrier_id: String, quote: &Quote) -> Self {
        Self {
            carrier_id,
            name: quote.carrier.name.clone(),
            info: CarrierInfo {
                scac: non_empty(quote.carrier.scac.as_ref())
                    .or_else(|| non_empty(quote.carrier_code.as_ref()))
                    .map(str::to_string),
                mc_number: non_empty(quote.carrier.mc_number.as_ref()).map(str::to_string),
                dot_number: non_empty(quote.carrier.dot_number.as_ref()).map(str::to_string),
            },
            quotes: Vec::new(),
        }
    }

    /// Lowest customer price in the group. `NaN` only when no quote has a price.
    pub fn best_price(&self) -> f64 {
        self.quotes
            .iter()
            .map(|quote| quote.customer_price)
            .filter(|price| !price.is_nan())
            .reduce(f64::min)
            .unwrap_or(f64::NAN)
    }

    pub fn avg_price(&self) -> f64 {
        mean(self.quotes.iter().map(|quote| quote.customer_price)).unwrap_or(f64::NAN)
    }

    pub fn avg_profit(&self) -> f64 {
        mean(self.quotes.iter().map(|quote| quote.profit)).unwrap_or(f64::NAN)
    }

    /// Mean transit time over quotes that report one; `None` when none do.
    pub fn avg_transit_days(&self) -> Option<f64> {
        mean(
            self.quotes
                .iter()
                .filter_map(Quote::known_transit_days)
                .map(f64::from),
        )
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Stable identity of the quote set behind this group.
    ///
    /// Independent of prices, so repricing a quote keeps the same fingerprint
    /// while a different set of quotes produces a new one.
    pub fn fingerprint(&self) -> String {
        let mut ids: Vec<QuoteId> = self.quotes.iter().map(|quote| quote.quote_id).collect();
        ids.sort_unstable();
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        format!("{}:{}", self.carrier_id, joined)
    }
}

/// Grouping key for a quote: SCAC, then carrier code, then carrier name.
/// Empty strings count as missing.
pub fn carrier_id(quote: &Quote) -> String {
    non_empty(quote.carrier.scac.as_ref())
        .or_else(|| non_empty(quote.carrier_code.as_ref()))
        .unwrap_or(quote.carrier.name.as_str())
        .to_string()
}

/// Buckets quotes by carrier and orders the buckets by their best price.
///
/// Header metadata comes from the first quote seen for each carrier. Quote
/// order inside a group and group order on equal best prices both follow the
/// input order.
pub fn group_and_rank(quotes: &[Quote]) -> Vec<CarrierGroup> {
    let mut groups: Vec<CarrierGroup> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for quote in quotes {
        let id = carrier_id(quote);
        let slot = match slots.get(&id) {
            Some(slot) => *slot,
            None => {
                groups.push(CarrierGroup::seeded_from(id.clone(), quote));
                slots.insert(id, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].quotes.push(quote.clone());
    }

    for group in &mut groups {
        group
            .quotes
            .sort_by(|a, b| a.customer_price.total_cmp(&b.customer_price));
    }
    groups.sort_by(|a, b| a.best_price().total_cmp(&b.best_price()));

    debug!(
        quotes = quotes.len(),
        carriers = groups.len(),
        "grouped quotes by carrier"
    );
    groups
}

/// Headline numbers for the board header.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardSummary {
    pub carrier_count: usize,
    pub quote_count: usize,
    pub lowest_price: Option<f64>,
}

impl BoardSummary {
    pub fn from_groups(groups: &[CarrierGroup]) -> Self {
        let lowest_price = groups
            .iter()
            .map(CarrierGroup::best_price)
            .filter(|price| !price.is_nan())
            .reduce(f64::min);
        Self {
            carrier_count: groups.len(),
            quote_count: groups.iter().map(CarrierGroup::len).sum(),
            lowest_price,
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.is_empty())
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Carrier;

    fn quote(id: QuoteId, name: &str, scac: Option<&str>, price: f64, profit: f64) -> Quote {
        Quote {
            quote_id: id,
            carrier: Carrier {
                name: name.to_string(),
                scac: scac.map(str::to_string),
                ..Carrier::default()
            },
            carrier_code: None,
            customer_price: price,
            profit,
            carrier_total_rate: price - profit,
            transit_days: None,
            service_level: None,
        }
    }

    fn prices(group: &CarrierGroup) -> Vec<f64> {
        group.quotes.iter().map(|q| q.customer_price).collect()
    }

    #[test]
    fn key_prefers_scac_then_code_then_name() {
        let mut q = quote(1, "Acme Freight", Some("ABC"), 100.0, 10.0);
        q.carrier_code = Some("XYZ".to_string());
        assert_eq!(carrier_id(&q), "ABC");

        q.carrier.scac = None;
        assert_eq!(carrier_id(&q), "XYZ");

        q.carrier_code = None;
        assert_eq!(carrier_id(&q), "Acme Freight");
    }

    #[test]
    fn empty_identifiers_fall_through() {
        let mut q = quote(1, "Acme Freight", Some(""), 100.0, 10.0);
        q.carrier_code = Some(String::new());
        assert_eq!(carrier_id(&q), "Acme Freight");
    }

    #[test]
    fn groups_and_orders_by_best_price() {
        let quotes = vec![
            quote(1, "Acme", Some("ACM"), 500.0, 50.0),
            quote(2, "Acme", Some("ACM"), 300.0, 80.0),
            quote(3, "Beta", None, 400.0, 60.0),
        ];

        let groups = group_and_rank(&quotes);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].carrier_id, "ACM");
        assert_eq!(prices(&groups[0]), vec![300.0, 500.0]);
        assert_eq!(groups[0].best_price(), 300.0);
        assert_eq!(groups[1].carrier_id, "Beta");
        assert_eq!(groups[1].best_price(), 400.0);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_and_rank(&[]).is_empty());
        let summary = BoardSummary::from_groups(&[]);
        assert_eq!(summary.quote_count, 0);
        assert_eq!(summary.lowest_price, None);
    }

    #[test]
    fn header_comes_from_first_quote_seen() {
        let mut first = quote(1, "Acme Freight", Some("ACM"), 500.0, 50.0);
        first.carrier.mc_number = Some("MC-1".to_string());
        let mut second = quote(2, "Acme Freight LLC", Some("ACM"), 200.0, 20.0);
        second.carrier.mc_number = Some("MC-2".to_string());
        second.carrier.dot_number = Some("DOT-9".to_string());

        let groups = group_and_rank(&[first, second]);

        assert_eq!(groups[0].name, "Acme Freight");
        assert_eq!(groups[0].info.mc_number.as_deref(), Some("MC-1"));
        assert_eq!(groups[0].info.dot_number, None);
        assert_eq!(groups[0].quotes[0].quote_id, 2);
    }

    #[test]
    fn header_scac_falls_back_to_carrier_code() {
        let mut q = quote(1, "Rail Co", None, 100.0, 10.0);
        q.carrier_code = Some("RLCO".to_string());
        let groups = group_and_rank(&[q]);
        assert_eq!(groups[0].carrier_id, "RLCO");
        assert_eq!(groups[0].info.scac.as_deref(), Some("RLCO"));
    }

    #[test]
    fn partitions_input_and_keeps_sort_invariants() {
        let quotes = vec![
            quote(1, "A", Some("AAA"), 900.0, 90.0),
            quote(2, "B", Some("BBB"), 150.0, 15.0),
            quote(3, "A", Some("AAA"), 120.0, 12.0),
            quote(4, "C", None, 700.0, 70.0),
            quote(5, "B", Some("BBB"), 150.0, 30.0),
            quote(6, "C", None, 650.0, 65.0),
            quote(7, "D", Some("DDD"), 120.0, 1.0),
        ];

        let groups = group_and_rank(&quotes);

        let mut seen: Vec<QuoteId> = groups
            .iter()
            .flat_map(|g| g.quotes.iter().map(|q| q.quote_id))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);

        for group in &groups {
            assert!(group
                .quotes
                .windows(2)
                .all(|pair| pair[0].customer_price <= pair[1].customer_price));
        }
        assert!(groups
            .windows(2)
            .all(|pair| pair[0].best_price() <= pair[1].best_price()));

        // Equal best prices keep first-seen order.
        assert_eq!(groups[0].carrier_id, "AAA");
        assert_eq!(groups[1].carrier_id, "DDD");

        // Equal prices inside a group keep input order.
        let bbb = groups.iter().find(|g| g.carrier_id == "BBB").unwrap();
        assert_eq!(
            bbb.quotes.iter().map(|q| q.quote_id).collect::<Vec<_>>(),
            vec![2, 5]
        );
    }

    #[test]
    fn grouping_is_idempotent() {
        let quotes = vec![
            quote(1, "A", Some("AAA"), 900.0, 90.0),
            quote(2, "B", None, 150.0, 15.0),
            quote(3, "A", Some("AAA"), 120.0, 12.0),
        ];
        assert_eq!(group_and_rank(&quotes), group_and_rank(&quotes));
    }

    #[test]
    fn averages_cover_price_profit_and_transit() {
        let mut a = quote(1, "A", Some("AAA"), 300.0, 30.0);
        a.transit_days = Some(2);
        let b = quote(2, "A", Some("AAA"), 500.0, 70.0);
        let mut c = quote(3, "A", Some("AAA"), 400.0, 20.0);
        c.transit_days = Some(4);

        let groups = group_and_rank(&[a, b, c]);
        let group = &groups[0];

        assert_eq!(group.avg_price(), 400.0);
        assert_eq!(group.avg_profit(), 40.0);
        assert_eq!(group.avg_transit_days(), Some(3.0));
    }

    #[test]
    fn transit_average_unavailable_without_data() {
        let mut a = quote(1, "A", Some("AAA"), 300.0, 30.0);
        a.transit_days = Some(0);
        let b = quote(2, "A", Some("AAA"), 500.0, 70.0);

        let groups = group_and_rank(&[a, b]);
        assert_eq!(groups[0].avg_transit_days(), None);
    }

    #[test]
    fn missing_prices_degrade_without_panicking() {
        let broken = quote(1, "A", Some("AAA"), f64::NAN, f64::NAN);
        let fine = quote(2, "A", Some("AAA"), 250.0, 25.0);
        let other = quote(3, "B", Some("BBB"), f64::NAN, 5.0);

        let groups = group_and_rank(&[broken, fine, other]);

        assert_eq!(groups[0].carrier_id, "AAA");
        assert_eq!(groups[0].quotes[0].quote_id, 2);
        assert_eq!(groups[0].best_price(), 250.0);
        assert!(groups[0].avg_price().is_nan());
        assert!(groups[1].best_price().is_nan());

        let summary = BoardSummary::from_groups(&groups);
        assert_eq!(summary.quote_count, 3);
        assert_eq!(summary.lowest_price, Some(250.0));
    }

    #[test]
    fn fingerprint_ignores_prices_but_tracks_membership() {
        let quotes = vec![
            quote(7, "A", Some("AAA"), 300.0, 30.0),
            quote(3, "A", Some("AAA"), 500.0, 70.0),
        ];
        let before = group_and_rank(&quotes)[0].fingerprint();
        assert_eq!(before, "AAA:3,7");

        let mut repriced = quotes.clone();
        repriced[0].customer_price = 900.0;
        assert_eq!(group_and_rank(&repriced)[0].fingerprint(), before);

        let mut grown = quotes;
        grown.push(quote(9, "A", Some("AAA"), 100.0, 10.0));
        assert_ne!(group_and_rank(&grown)[0].fingerprint(), before);
    }
}
