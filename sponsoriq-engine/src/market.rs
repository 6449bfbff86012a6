//! Static DMA market multiplier table.
//!
//! A DMA (designated market area) scales the base event value for local
//! sponsorship market strength. Unknown market names resolve to 1.0
//! rather than failing.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// DMA multipliers, ordered by market strength.
pub static DMA_MULTIPLIERS: &[(&str, f64)] = &[
    ("New York", 1.50),
    ("Los Angeles", 1.40),
    ("San Francisco", 1.35),
    ("Chicago", 1.25),
    ("Washington DC", 1.25),
    ("Dallas-Fort Worth", 1.20),
    ("Boston", 1.20),
    ("Miami", 1.20),
    ("Houston", 1.15),
    ("Philadelphia", 1.15),
    ("Seattle", 1.15),
    ("Atlanta", 1.10),
    ("Denver", 1.10),
    ("Phoenix", 1.05),
    ("Minneapolis", 1.05),
    ("Other", 1.00),
];

static MARKET_INDEX: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| DMA_MULTIPLIERS.iter().copied().collect());

/// Multiplier for a DMA name; 1.0 when the name is not in the table.
pub fn multiplier_for(dma: &str) -> f64 {
    MARKET_INDEX.get(dma).copied().unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_markets() {
        assert!((multiplier_for("New York") - 1.50).abs() < f64::EPSILON);
        assert!((multiplier_for("Minneapolis") - 1.05).abs() < f64::EPSILON);
        assert!((multiplier_for("Other") - 1.00).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_market_defaults_to_one() {
        assert!((multiplier_for("Duluth") - 1.0).abs() < f64::EPSILON);
        assert!((multiplier_for("") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_table_size_and_bounds() {
        assert_eq!(DMA_MULTIPLIERS.len(), 16);
        for (name, multiplier) in DMA_MULTIPLIERS {
            assert!(
                (1.0..=1.5).contains(multiplier),
                "{name} multiplier out of range"
            );
        }
    }
}
