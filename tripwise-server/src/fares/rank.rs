//! Quote ranking.

use crate::domain::FareQuote;

/// Rank quotes cheapest first.
///
/// The sort is stable: quotes with equal prices keep their input order,
/// which for estimator output is roster order.
pub fn rank_quotes(mut quotes: Vec<FareQuote>) -> Vec<FareQuote> {
    quotes.sort_by_key(|q| q.price);
    quotes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(provider: &str, price: u64) -> FareQuote {
        FareQuote {
            provider: provider.to_string(),
            vehicle_class: "Test".to_string(),
            price,
            eta_minutes: 10,
            rating: 4.0,
        }
    }

    fn providers(quotes: &[FareQuote]) -> Vec<&str> {
        quotes.iter().map(|q| q.provider.as_str()).collect()
    }

    #[test]
    fn rank_by_price() {
        let ranked = rank_quotes(vec![quote("A", 300), quote("B", 100), quote("C", 200)]);
        assert_eq!(providers(&ranked), vec!["B", "C", "A"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank_quotes(vec![
            quote("A", 200),
            quote("B", 100),
            quote("C", 200),
            quote("D", 100),
        ]);
        assert_eq!(providers(&ranked), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn empty_and_single() {
        assert!(rank_quotes(Vec::new()).is_empty());
        assert_eq!(providers(&rank_quotes(vec![quote("A", 5)])), vec!["A"]);
    }
}
