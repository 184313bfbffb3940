//! Exercise-date handling.
//!
//! Callers collect an exercise date from the user; the engine needs a year
//! fraction. Conversion uses Actual/365 Fixed.

use chrono::NaiveDate;

use super::error::PricingError;

/// Day basis of the Actual/365 Fixed convention.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Converts an exercise date into a time to exercise in years (Act/365).
///
/// # Errors
/// `InvalidParameter` (`time_to_exercise`) if the exercise date is not
/// strictly after `today`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pricer_core::types::time_to_exercise;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let exercise = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(time_to_exercise(today, exercise).unwrap(), 1.0);
///
/// assert!(time_to_exercise(exercise, today).is_err());
/// ```
pub fn time_to_exercise(today: NaiveDate, exercise_date: NaiveDate) -> Result<f64, PricingError> {
    let days = (exercise_date - today).num_days();
    if days <= 0 {
        return Err(PricingError::InvalidParameter {
            name: "time_to_exercise",
            value: days as f64 / DAYS_PER_YEAR,
            reason: "exercise date must be after today",
        });
    }
    Ok(days as f64 / DAYS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_half_year() {
        // 2024-01-01 to 2024-07-01 is 182 days
        let t = time_to_exercise(date(2024, 1, 1), date(2024, 7, 1)).unwrap();
        assert_relative_eq!(t, 182.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_leap_year_counts_actual_days() {
        let t = time_to_exercise(date(2024, 1, 1), date(2025, 1, 1)).unwrap();
        assert_relative_eq!(t, 366.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_single_day() {
        let t = time_to_exercise(date(2025, 3, 10), date(2025, 3, 11)).unwrap();
        assert_relative_eq!(t, 1.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_same_day_rejected() {
        let err = time_to_exercise(date(2025, 3, 10), date(2025, 3, 10)).unwrap_err();
        assert_eq!(err.parameter_name(), Some("time_to_exercise"));
    }

    #[test]
    fn test_past_date_rejected() {
        assert!(time_to_exercise(date(2025, 3, 10), date(2024, 3, 10)).is_err());
    }
}
