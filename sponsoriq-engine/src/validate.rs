//! Field-level bounds for input records.
//!
//! These are the form constraints the input-collection surface enforces
//! before invoking the pipeline. The pipeline itself never re-validates;
//! callers that skip validation get the pipeline's defined degenerate
//! behavior instead of errors.

use sponsoriq_common::validation::{
    check_max, check_min, collect_errors, Validate, ValidationError, ValidationResult,
};

use crate::types::{AssetSelection, EventFacts, MarketFacts, ValuationInputs};

impl Validate for EventFacts {
    fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();
        check_min("event.capacity", f64::from(self.capacity), 100.0, &mut errors);
        check_min(
            "event.attendance",
            f64::from(self.attendance),
            50.0,
            &mut errors,
        );
        check_min("event.duration_hours", self.duration_hours, 1.0, &mut errors);
        check_max("event.duration_hours", self.duration_hours, 72.0, &mut errors);
        check_min("event.event_days", f64::from(self.event_days), 1.0, &mut errors);
        check_min(
            "event.edition_number",
            f64::from(self.edition_number),
            1.0,
            &mut errors,
        );
        collect_errors(errors)
    }
}

impl Validate for MarketFacts {
    fn validate(&self) -> ValidationResult<()> {
        if self.dma.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "market.dma".to_string(),
            });
        }
        Ok(())
    }
}

impl Validate for AssetSelection {
    fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();
        if self.asset_id.trim().is_empty() {
            errors.push(ValidationError::MissingField {
                field: "assets[].asset_id".to_string(),
            });
        }
        check_min(
            "assets[].quantity",
            f64::from(self.quantity),
            1.0,
            &mut errors,
        );
        check_max(
            "assets[].quantity",
            f64::from(self.quantity),
            100.0,
            &mut errors,
        );
        collect_errors(errors)
    }
}

impl Validate for ValuationInputs {
    fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();
        if let Err(e) = self.event.validate() {
            errors.push(e);
        }
        if let Err(e) = self.market.validate() {
            errors.push(e);
        }
        for selection in &self.assets {
            if let Err(e) = selection.validate() {
                errors.push(e);
            }
        }
        collect_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_inputs() -> ValuationInputs {
        ValuationInputs {
            event: EventFacts {
                name: String::new(),
                venue_type: "convention".to_string(),
                capacity: 10_000,
                attendance: 7_500,
                duration_hours: 8.0,
                event_days: 1,
                edition_number: 1,
                total_sponsors: 5,
                has_waitlist: false,
            },
            market: MarketFacts {
                dma: "Other".to_string(),
            },
            assets: vec![AssetSelection {
                asset_id: "stage_branding".to_string(),
                quantity: 1,
                exposure_tier: None,
            }],
        }
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(make_inputs().validate().is_ok());
    }

    #[test]
    fn test_capacity_floor() {
        let mut inputs = make_inputs();
        inputs.event.capacity = 99;
        let err = inputs.validate().unwrap_err();
        assert!(matches!(err, ValidationError::BelowMinimum { .. }));
    }

    #[test]
    fn test_duration_ceiling() {
        let mut inputs = make_inputs();
        inputs.event.duration_hours = 73.0;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_quantity_bounds() {
        let mut inputs = make_inputs();
        inputs.assets[0].quantity = 0;
        assert!(inputs.validate().is_err());

        let mut inputs = make_inputs();
        inputs.assets[0].quantity = 101;
        assert!(inputs.validate().is_err());

        let mut inputs = make_inputs();
        inputs.assets[0].quantity = 100;
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_empty_dma_is_missing() {
        let mut inputs = make_inputs();
        inputs.market.dma = "  ".to_string();
        let err = inputs.validate().unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { .. }));
    }

    #[test]
    fn test_errors_aggregate_per_record() {
        let mut inputs = make_inputs();
        inputs.event.capacity = 10;
        inputs.event.attendance = 5;
        inputs.assets[0].quantity = 0;
        let err = inputs.validate().unwrap_err();
        // One entry per failing record; the event's two violations arrive
        // wrapped in their own Multiple.
        match err {
            ValidationError::Multiple(inner) => {
                assert_eq!(inner.len(), 2);
                assert!(matches!(inner[0], ValidationError::Multiple(_)));
            }
            other => panic!("expected Multiple, got {other:?}"),
        }
    }
}
