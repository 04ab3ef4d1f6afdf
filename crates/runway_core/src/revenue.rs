//! Revenue model
//!
//! Hotels are acquired on a logistic ramp between `months_to_first_revenue`
//! and the end of the runway. Each live hotel pays a subscription and
//! generates commission on its bookings. Both streams are always computed;
//! the revenue model selector only decides what gets displayed.

use crate::math::logistic;
use crate::model::{HotelAdoption, InputAssumptions, RevenueSeries};

/// Steepness of the adoption curve
pub const RAMP_STEEPNESS: f64 = 10.0;
/// Fraction of the ramp window at which adoption is fastest
pub const RAMP_MIDPOINT: f64 = 0.5;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Hotels live in `month` for a horizon of `runway_months`.
///
/// - At or past the horizon the count is pinned to `target_hotels`.
/// - Before `months_to_first_revenue` it stays at `hotels_at_start`.
/// - In between it follows a logistic curve, floored to whole hotels.
///
/// An empty ramp window (first revenue at or after the horizon) jumps
/// straight to the target at the horizon without evaluating the curve.
pub fn hotels_in_month(adoption: &HotelAdoption, runway_months: u32, month: u32) -> u32 {
    if month >= runway_months {
        return adoption.target_hotels;
    }
    if month < adoption.months_to_first_revenue {
        return adoption.hotels_at_start;
    }

    let window = runway_months.saturating_sub(adoption.months_to_first_revenue);
    if window == 0 {
        return adoption.target_hotels;
    }

    let progress = f64::from(month - adoption.months_to_first_revenue) / f64::from(window);
    let adopted = logistic(progress, RAMP_STEEPNESS, RAMP_MIDPOINT);
    let start = f64::from(adoption.hotels_at_start);
    let target = f64::from(adoption.target_hotels);

    (start + (target - start) * adopted).floor() as u32
}

/// Hotel counts for months `0..=runway_months`
pub fn hotel_ramp(adoption: &HotelAdoption, runway_months: u32) -> Vec<u32> {
    (0..=runway_months)
        .map(|month| hotels_in_month(adoption, runway_months, month))
        .collect()
}

/// Running sum of a monthly series
pub fn cumulative(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |total, &value| {
            *total += value;
            Some(*total)
        })
        .collect()
}

/// Compute the monthly revenue projection.
///
/// Exit figures (`annual_saas`, `annual_commission`, `arr`) come from the
/// last month of the ramp. The `target_*` fields keep the steady-state view
/// at `target_hotels`; because the ramp is pinned to the target at the
/// horizon the two agree.
pub fn compute_revenue(inputs: &InputAssumptions) -> RevenueSeries {
    let pricing = &inputs.revenue;
    let hotels_by_month = hotel_ramp(&inputs.adoption, inputs.raise.runway_months);

    let subscription = pricing.monthly_subscription;
    let commission_per_hotel = pricing.commission_per_hotel();

    let saas_by_month: Vec<f64> = hotels_by_month
        .iter()
        .map(|&hotels| f64::from(hotels) * subscription)
        .collect();
    let commission_by_month: Vec<f64> = hotels_by_month
        .iter()
        .map(|&hotels| f64::from(hotels) * commission_per_hotel)
        .collect();
    let monthly_revenue: Vec<f64> = saas_by_month
        .iter()
        .zip(&commission_by_month)
        .map(|(saas, commission)| saas + commission)
        .collect();
    let cumulative_revenue = cumulative(&monthly_revenue);

    let annual_saas = saas_by_month.last().copied().unwrap_or(0.0) * MONTHS_PER_YEAR;
    let annual_commission = commission_by_month.last().copied().unwrap_or(0.0) * MONTHS_PER_YEAR;

    let target = f64::from(inputs.adoption.target_hotels);
    let target_annual_saas = target * subscription * MONTHS_PER_YEAR;
    let target_annual_commission = target * commission_per_hotel * MONTHS_PER_YEAR;

    RevenueSeries {
        hotels_by_month,
        saas_by_month,
        commission_by_month,
        monthly_revenue,
        cumulative_revenue,
        annual_saas,
        annual_commission,
        arr: annual_saas + annual_commission,
        target_annual_saas,
        target_annual_commission,
        target_annual_revenue: target_annual_saas + target_annual_commission,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adoption(start: u32, target: u32, first_revenue: u32) -> HotelAdoption {
        HotelAdoption {
            target_hotels: target,
            hotels_at_start: start,
            months_to_first_revenue: first_revenue,
        }
    }

    #[test]
    fn test_ramp_flat_before_first_revenue() {
        let ramp = hotel_ramp(&adoption(5, 3500, 3), 24);
        assert_eq!(ramp.len(), 25);
        assert_eq!(&ramp[..3], &[5, 5, 5]);
        // Month 3 is progress 0: 5 + 3495 * sigmoid(-5) = 28.4..
        assert_eq!(ramp[3], 28);
    }

    #[test]
    fn test_ramp_pinned_at_horizon() {
        let ramp = hotel_ramp(&adoption(5, 3500, 3), 24);
        assert_eq!(*ramp.last().unwrap(), 3500);
        // Month 23 is still on the curve and below target
        assert!(ramp[23] < 3500);
    }

    #[test]
    fn test_ramp_midpoint() {
        // Window 3..23 has length 20, so month 13 is progress 0.5
        let ramp = hotel_ramp(&adoption(0, 1000, 3), 23);
        assert_eq!(ramp[13], 500);
    }

    #[test]
    fn test_empty_window_jumps_to_target() {
        let ramp = hotel_ramp(&adoption(10, 200, 12), 12);
        assert_eq!(ramp.len(), 13);
        assert!(ramp[..12].iter().all(|&h| h == 10));
        assert_eq!(ramp[12], 200);
    }

    #[test]
    fn test_first_revenue_past_horizon() {
        let ramp = hotel_ramp(&adoption(10, 200, 30), 12);
        assert!(ramp[..12].iter().all(|&h| h == 10));
        assert_eq!(ramp[12], 200);
    }

    #[test]
    fn test_zero_horizon() {
        let ramp = hotel_ramp(&adoption(10, 200, 3), 0);
        assert_eq!(ramp, vec![200]);
    }

    #[test]
    fn test_cumulative() {
        assert_eq!(cumulative(&[1.0, 2.0, 3.5]), vec![1.0, 3.0, 6.5]);
        assert!(cumulative(&[]).is_empty());
    }

    #[test]
    fn test_revenue_streams_split() {
        let inputs = InputAssumptions::default();
        let series = compute_revenue(&inputs);

        assert_eq!(series.len(), 25);
        // Month 0: 5 hotels * $100 and 5 * $360 commission
        assert!((series.saas_by_month[0] - 500.0).abs() < 1e-9);
        assert!((series.commission_by_month[0] - 1_800.0).abs() < 1e-9);
        assert!((series.monthly_revenue[0] - 2_300.0).abs() < 1e-9);
    }

    #[test]
    fn test_exit_figures_match_steady_state() {
        let inputs = InputAssumptions::default();
        let series = compute_revenue(&inputs);

        // 3500 * 100 * 12
        assert!((series.annual_saas - 4_200_000.0).abs() < 1e-6);
        // 3500 * 360 * 12
        assert!((series.annual_commission - 15_120_000.0).abs() < 1e-6);
        assert!((series.arr - 19_320_000.0).abs() < 1e-6);
        assert!((series.target_annual_revenue - series.arr).abs() < 1e-6);
    }
}
