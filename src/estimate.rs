//! Move Estimator
//!
//! Crew size, duration and cost from home size, stairs, heavy items and distance.

use chrono::{Datelike, NaiveDate};

use crate::error::BookingError;
use crate::models::Estimate;

/// Average driving speed used for travel time (km/h)
const AVERAGE_SPEED_KMH: f64 = 50.0;
/// Extra hours per heavy item and per flight of stairs
const HALF_HOUR: f64 = 0.5;
const PEAK_SURCHARGE: f64 = 1.2;
/// Flat fuel fee up to this distance, per-km rate beyond it
const LOCAL_DISTANCE_KM: f64 = 100.0;
const LOCAL_FUEL_FEE: f64 = 40.0;
const FUEL_RATE_PER_KM: f64 = 0.72;

/// Raw numeric inputs of the booking form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveParams {
    pub bedrooms: u32,
    pub stairs_origin: u32,
    pub stairs_destination: u32,
    pub heavy_items: u32,
    pub distance_km: f64,
}

impl MoveParams {
    /// Parse the booking form's text fields. Blank fields are invalid.
    pub fn parse(
        bedrooms: &str,
        stairs_origin: &str,
        stairs_destination: &str,
        heavy_items: &str,
        distance_km: &str,
    ) -> Result<Self, BookingError> {
        let distance_raw = distance_km.trim();
        let distance_km = distance_raw
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite() && *d >= 0.0)
            .ok_or_else(|| BookingError::InvalidDistance(distance_raw.to_string()))?;
        Ok(Self {
            bedrooms: parse_count("bedrooms", bedrooms)?,
            stairs_origin: parse_count("stairs_origin", stairs_origin)?,
            stairs_destination: parse_count("stairs_destination", stairs_destination)?,
            heavy_items: parse_count("heavy_items", heavy_items)?,
            distance_km,
        })
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, BookingError> {
    let raw = raw.trim();
    raw.parse().map_err(|_| BookingError::InvalidCount {
        field,
        value: raw.to_string(),
    })
}

/// Moves in June, July and August are billed at the peak rate.
/// Dates that do not parse as `YYYY-MM-DD` are treated as off-peak.
pub fn is_peak_season(move_date: &str) -> bool {
    NaiveDate::parse_from_str(move_date.trim(), "%Y-%m-%d")
        .map(|date| matches!(date.month(), 6..=8))
        .unwrap_or(false)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn compute_estimate(params: MoveParams, peak_season: bool) -> Estimate {
    let movers = match params.bedrooms {
        0 | 1 => 2,
        2 => 3,
        _ => 4,
    };

    let mut hours = match params.bedrooms {
        0 | 1 => 4.0,
        2 => 6.0,
        3 => 8.0,
        _ => 10.0,
    };
    hours += HALF_HOUR * f64::from(params.heavy_items);
    hours += params.distance_km / AVERAGE_SPEED_KMH;
    hours += HALF_HOUR * (f64::from(params.stairs_origin) + f64::from(params.stairs_destination));

    let mut hourly_rate = match movers {
        2 => 140.0,
        3 => 160.0,
        _ => 180.0,
    };
    if peak_season {
        hourly_rate *= PEAK_SURCHARGE;
    }

    let mut cost = hours * hourly_rate;
    if params.distance_km <= LOCAL_DISTANCE_KM {
        cost += LOCAL_FUEL_FEE;
    } else {
        cost += params.distance_km * FUEL_RATE_PER_KM;
    }

    Estimate {
        movers,
        hours: round_to(hours, 1),
        cost: round_to(cost, 2),
        bedrooms: params.bedrooms,
        stairs_origin: params.stairs_origin,
        stairs_destination: params.stairs_destination,
        heavy_items: params.heavy_items,
        distance_km: params.distance_km,
        peak_season,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(bedrooms: u32, stairs: (u32, u32), heavy_items: u32, distance_km: f64) -> MoveParams {
        MoveParams {
            bedrooms,
            stairs_origin: stairs.0,
            stairs_destination: stairs.1,
            heavy_items,
            distance_km,
        }
    }

    #[test]
    fn test_small_local_move() {
        let estimate = compute_estimate(params(1, (0, 0), 0, 0.0), false);
        assert_eq!(estimate.movers, 2);
        assert_eq!(estimate.hours, 4.0);
        assert_eq!(estimate.cost, 600.0);
    }

    #[test]
    fn test_crew_size_by_bedrooms() {
        let movers: Vec<u32> = [0, 1, 2, 3, 5]
            .iter()
            .map(|b| compute_estimate(params(*b, (0, 0), 0, 0.0), false).movers)
            .collect();
        assert_eq!(movers, vec![2, 2, 3, 4, 4]);
    }

    #[test]
    fn test_extra_time_and_long_distance() {
        // 6h base + 1h heavy + 3h travel + 1.5h stairs = 11.5h at $160
        let estimate = compute_estimate(params(2, (2, 1), 2, 150.0), false);
        assert_eq!(estimate.hours, 11.5);
        // 1840 + 108 fuel
        assert_eq!(estimate.cost, 1948.0);
    }

    #[test]
    fn test_peak_season_rate() {
        let estimate = compute_estimate(params(3, (0, 0), 0, 0.0), true);
        // 8h at 180 * 1.2 + 40
        assert_eq!(estimate.cost, 1768.0);
        assert!(estimate.peak_season);
    }

    #[test]
    fn test_hours_rounded_to_one_decimal() {
        let estimate = compute_estimate(params(1, (0, 0), 0, 12.0), false);
        assert_eq!(estimate.hours, 4.2);
        // cost uses unrounded hours: 4.24 * 140 + 40
        assert_eq!(estimate.cost, 633.6);
    }

    #[test]
    fn test_is_peak_season() {
        assert!(is_peak_season("2025-06-01"));
        assert!(is_peak_season("2025-08-31"));
        assert!(!is_peak_season("2025-05-31"));
        assert!(!is_peak_season("2025-09-01"));
        assert!(!is_peak_season(""));
        assert!(!is_peak_season("next july"));
    }

    #[test]
    fn test_parse_params() {
        let parsed = MoveParams::parse("3", "1", " 0 ", "2", "42.5").unwrap();
        assert_eq!(parsed, params(3, (1, 0), 2, 42.5));
    }

    #[test]
    fn test_parse_params_rejects_blank_fields() {
        assert!(matches!(
            MoveParams::parse("1", "0", "", "0", "0"),
            Err(BookingError::InvalidCount { field: "stairs_destination", .. })
        ));
        assert!(matches!(
            MoveParams::parse("1", "0", "0", "0", "  "),
            Err(BookingError::InvalidDistance(_))
        ));
    }

    #[test]
    fn test_huge_stair_counts_do_not_overflow() {
        let parsed = MoveParams::parse("1", "4294967295", "1", "0", "0").unwrap();
        let estimate = compute_estimate(parsed, false);
        // 4h base + 0.5h per flight over 4294967296 flights
        assert_eq!(estimate.hours, 4.0 + 0.5 * 4_294_967_296.0);
        assert!(estimate.cost.is_finite());
    }

    #[test]
    fn test_parse_params_rejects_bad_numbers() {
        assert!(matches!(
            MoveParams::parse("two", "0", "0", "0", "0"),
            Err(BookingError::InvalidCount { field: "bedrooms", .. })
        ));
        assert!(matches!(
            MoveParams::parse("1", "0", "0", "0", "far"),
            Err(BookingError::InvalidDistance(_))
        ));
        assert!(MoveParams::parse("1", "-1", "0", "0", "0").is_err());
    }
}
