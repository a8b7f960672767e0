//! GST price breakdown shown next to the price inputs

use serde::Serialize;

/// GST slabs a listing can be filed under, in percent
pub const GST_RATES: [f64; 5] = [0.0, 5.0, 12.0, 18.0, 28.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GstBreakdown {
    pub gst_rate: f64,
    pub base_price: f64,
    pub gst_amount: f64,
    pub inclusive_price: f64,
}

pub fn validate_gst_rate(rate: f64) -> Result<(), String> {
    if GST_RATES.iter().any(|r| (r - rate).abs() < f64::EPSILON) {
        Ok(())
    } else {
        Err(format!("GST rate {}% is not a valid slab", rate))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn check_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price < 0.0 {
        return Err(format!("Price {} is not valid", price));
    }
    Ok(())
}

impl GstBreakdown {
    /// Split a GST-inclusive price into base price and tax
    pub fn from_inclusive(inclusive_price: f64, gst_rate: f64) -> Result<Self, String> {
        check_price(inclusive_price)?;
        validate_gst_rate(gst_rate)?;
        let base_price = round2(inclusive_price * 100.0 / (100.0 + gst_rate));
        Ok(Self {
            gst_rate,
            base_price,
            gst_amount: round2(inclusive_price - base_price),
            inclusive_price: round2(inclusive_price),
        })
    }

    /// Add GST on top of a base price
    pub fn from_exclusive(base_price: f64, gst_rate: f64) -> Result<Self, String> {
        check_price(base_price)?;
        validate_gst_rate(gst_rate)?;
        let gst_amount = round2(base_price * gst_rate / 100.0);
        Ok(Self {
            gst_rate,
            base_price: round2(base_price),
            gst_amount,
            inclusive_price: round2(base_price + gst_amount),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inclusive() {
        let b = GstBreakdown::from_inclusive(1180.0, 18.0).unwrap();
        assert_eq!(b.base_price, 1000.0);
        assert_eq!(b.gst_amount, 180.0);
        assert_eq!(b.inclusive_price, 1180.0);

        let b = GstBreakdown::from_inclusive(999.0, 12.0).unwrap();
        assert_eq!(b.base_price, 891.96);
        assert_eq!(b.gst_amount, 107.04);
    }

    #[test]
    fn test_from_exclusive() {
        let b = GstBreakdown::from_exclusive(250.0, 5.0).unwrap();
        assert_eq!(b.gst_amount, 12.5);
        assert_eq!(b.inclusive_price, 262.5);
    }

    #[test]
    fn test_zero_rate() {
        let b = GstBreakdown::from_inclusive(500.0, 0.0).unwrap();
        assert_eq!(b.base_price, 500.0);
        assert_eq!(b.gst_amount, 0.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(GstBreakdown::from_inclusive(100.0, 15.0).is_err());
        assert!(GstBreakdown::from_exclusive(-1.0, 5.0).is_err());
        assert!(GstBreakdown::from_exclusive(f64::NAN, 5.0).is_err());
    }
}
