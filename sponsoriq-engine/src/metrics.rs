//! Derived attention and quality metrics.
//!
//! Events sell time. These metrics translate exposure seconds into
//! attention-hours, grade impression quality against the digital
//! viewability standard, and price an hour of attention.

/// Digital viewability baseline: 50 milliseconds.
const DIGITAL_BASELINE_SECONDS: f64 = 0.05;

/// Impression Quality Index.
///
/// How many times higher quality an average event impression is than the
/// 50 ms digital standard. Zero when there is no exposure.
pub fn calculate_iqi(avg_exposure_seconds: f64) -> u64 {
    if avg_exposure_seconds <= 0.0 {
        return 0;
    }
    (avg_exposure_seconds / DIGITAL_BASELINE_SECONDS).round() as u64
}

/// Cost Per Hour of Attention.
///
/// Sponsorship investment divided by total attention-hours. Zero attention
/// yields a defined 0 rather than a division error.
pub fn calculate_cpha(value: f64, total_attention_hours: f64) -> f64 {
    if total_attention_hours <= 0.0 {
        return 0.0;
    }
    value / total_attention_hours
}

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
