//! Ingest-side validation for sensor readings

use rust_decimal::Decimal;

use crate::error::{MetricsError, MetricsResult};
use crate::reading::Reading;
use crate::{MAX_VALUE_FRACTION_DIGITS, MAX_VALUE_INTEGER_DIGITS};

/// Validation limits for incoming readings
pub struct ValidationLimits {
    /// Maximum sensor id length
    pub max_sensor_id_length: usize,
    /// Maximum integer digits in a value
    pub max_integer_digits: u32,
    /// Maximum fractional digits in a value
    pub max_fraction_digits: u32,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_sensor_id_length: crate::MAX_SENSOR_ID_LENGTH,
            max_integer_digits: MAX_VALUE_INTEGER_DIGITS,
            max_fraction_digits: MAX_VALUE_FRACTION_DIGITS,
        }
    }
}

/// Validator for incoming sensor readings
#[derive(Default)]
pub struct Validator {
    limits: ValidationLimits,
}

impl Validator {
    /// Create a new validator with custom limits
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// Validate a reading before it is stored.
    ///
    /// The metric and timestamp fields are enforced by the type system;
    /// this checks the sensor id and the decimal precision of the value.
    pub fn validate_reading(&self, reading: &Reading) -> MetricsResult<()> {
        if reading.sensor_id.is_blank() {
            return Err(MetricsError::validation("Sensor id cannot be blank"));
        }

        if reading.sensor_id.as_str().len() > self.limits.max_sensor_id_length {
            return Err(MetricsError::validation(format!(
                "Sensor id too long: {} > {}",
                reading.sensor_id.as_str().len(),
                self.limits.max_sensor_id_length
            )));
        }

        self.validate_value(reading.value)
    }

    /// Validate the decimal precision of a reading value
    pub fn validate_value(&self, value: Decimal) -> MetricsResult<()> {
        let normalized = value.normalize();

        if normalized.scale() > self.limits.max_fraction_digits {
            return Err(MetricsError::validation(format!(
                "Value has more than {} fractional digits",
                self.limits.max_fraction_digits
            )));
        }

        if integer_digits(normalized) > self.limits.max_integer_digits {
            return Err(MetricsError::validation(format!(
                "Value has more than {} integer digits",
                self.limits.max_integer_digits
            )));
        }

        Ok(())
    }
}

/// Count the digits before the decimal point
fn integer_digits(value: Decimal) -> u32 {
    let integral = value.trunc().abs();
    if integral.is_zero() {
        return 0;
    }

    let mut digits = 0u32;
    let ten = Decimal::from(10);
    let mut remaining = integral;
    while !remaining.is_zero() {
        remaining = (remaining / ten).trunc();
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::{MetricType, SensorId};
    use crate::time::Timestamp;
    use rust_decimal_macros::dec;

    fn reading_with_value(value: Decimal) -> Reading {
        Reading::new(
            SensorId::new("s1").unwrap(),
            MetricType::Temperature,
            value,
            Timestamp::from_millis(0).unwrap(),
        )
    }

    #[test]
    fn test_valid_reading_passes() {
        let validator = Validator::default();
        assert!(validator.validate_reading(&reading_with_value(dec!(21.5))).is_ok());
        assert!(validator.validate_reading(&reading_with_value(dec!(-40))).is_ok());
        assert!(validator.validate_reading(&reading_with_value(dec!(0.0001))).is_ok());
    }

    #[test]
    fn test_blank_sensor_id_is_rejected() {
        let validator = Validator::default();
        let reading = Reading::new(
            SensorId::from("   "),
            MetricType::Humidity,
            dec!(50),
            Timestamp::from_millis(0).unwrap(),
        );

        let err = validator.validate_reading(&reading).unwrap_err();
        assert_eq!(err.category(), "validation");
    }

    #[test]
    fn test_fraction_digit_limit() {
        let validator = Validator::default();

        assert!(validator.validate_value(dec!(1.2345)).is_ok());
        assert!(validator.validate_value(dec!(1.23456)).is_err());
        // Trailing zeros do not count against the limit
        assert!(validator.validate_value(dec!(1.2340000)).is_ok());
    }

    #[test]
    fn test_integer_digit_limit() {
        let validator = Validator::default();

        // 14 integer digits is the maximum
        assert!(validator.validate_value(dec!(99_999_999_999_999)).is_ok());
        assert!(validator.validate_value(dec!(100_000_000_000_000)).is_err());
        assert!(validator.validate_value(dec!(-99_999_999_999_999.9999)).is_ok());
    }

    #[test]
    fn test_integer_digit_count() {
        assert_eq!(integer_digits(dec!(0)), 0);
        assert_eq!(integer_digits(dec!(0.5)), 0);
        assert_eq!(integer_digits(dec!(9)), 1);
        assert_eq!(integer_digits(dec!(10)), 2);
        assert_eq!(integer_digits(dec!(-123.45)), 3);
    }
}
