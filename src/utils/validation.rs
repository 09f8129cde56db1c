//! Validation utilities

use bigdecimal::BigDecimal;
use chrono::NaiveTime;
use std::str::FromStr;

use crate::traits::*;
use crate::types::*;

const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Upper bound on the digits of a typed weight, on either side of the separator
const MAX_WEIGHT_DIGITS: usize = 15;

/// Validate that a weight is strictly positive
pub fn validate_positive_weight(weight: &BigDecimal) -> LogbookResult<()> {
    if *weight <= BigDecimal::from(0) {
        Err(LogbookError::Validation(
            "O peso deve ser maior que zero".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Parse a weight typed into the form.
///
/// Only plain decimals are accepted: an optional sign, digits, and at most
/// one `,` or `.` separator. Blank, non-numeric, exponent-form, overlong,
/// zero and negative input all fail with `message`.
pub fn parse_weight(raw: &str, message: &str) -> LogbookResult<BigDecimal> {
    let normalized = raw.trim().replace(',', ".");
    let decimal =
        plain_decimal(&normalized).ok_or_else(|| LogbookError::Validation(message.to_string()))?;

    let weight = BigDecimal::from_str(&decimal)
        .map_err(|_| LogbookError::Validation(message.to_string()))?;
    validate_positive_weight(&weight).map_err(|_| LogbookError::Validation(message.to_string()))?;

    Ok(weight)
}

/// Canonical `[-]int[.frac]` form of a plain decimal, or `None` for anything
/// else (exponents, `inf`, repeated separators, too many digits)
fn plain_decimal(value: &str) -> Option<String> {
    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value.strip_prefix('+').unwrap_or(value)),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty())
        || !is_digits(integer)
        || !is_digits(fraction)
        || integer.len() > MAX_WEIGHT_DIGITS
        || fraction.len() > MAX_WEIGHT_DIGITS
    {
        return None;
    }

    let integer = if integer.is_empty() { "0" } else { integer };
    if fraction.is_empty() {
        Some(format!("{}{}", sign, integer))
    } else {
        Some(format!("{}{}.{}", sign, integer, fraction))
    }
}

/// Parse a time of day that must be present
pub fn parse_required_time(raw: &str, message: &str) -> LogbookResult<NaiveTime> {
    parse_optional_time(raw, message)?.ok_or_else(|| LogbookError::Validation(message.to_string()))
}

/// Parse a time of day that may be left blank
pub fn parse_optional_time(raw: &str, message: &str) -> LogbookResult<Option<NaiveTime>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
        .map(Some)
        .ok_or_else(|| LogbookError::Validation(message.to_string()))
}

/// Validate that a farm name is present and of reasonable length
pub fn validate_farm_name(name: &str, field: &str) -> LogbookResult<()> {
    if name.trim().is_empty() {
        return Err(LogbookError::Validation(format!(
            "{} não pode ficar em branco",
            field
        )));
    }

    if name.chars().count() > 100 {
        return Err(LogbookError::Validation(format!(
            "{} não pode exceder 100 caracteres",
            field
        )));
    }

    Ok(())
}

/// Strict validator that also requires origin and destination farms
pub struct StrictTripValidator;

impl TripValidator for StrictTripValidator {
    fn validate_new_trip(&self, input: &NewTrip) -> LogbookResult<Trip> {
        // Basic validation
        let trip = DefaultTripValidator.validate_new_trip(input)?;

        validate_farm_name(&trip.origin_farm, "Granja de origem")?;
        validate_farm_name(&trip.destination_farm, "Granja de destino")?;

        Ok(trip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form() -> NewTrip {
        NewTrip {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            collection_time: "07:30".to_string(),
            collection_weight: "100".to_string(),
            origin_farm: "Granja Boa Vista".to_string(),
            discharge_time: "09:15".to_string(),
            discharge_weight: "95".to_string(),
            destination_farm: "Fazenda Santa Luzia".to_string(),
        }
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(
            parse_weight("12,5", "bad").unwrap(),
            BigDecimal::from_str("12.5").unwrap()
        );
        assert_eq!(parse_weight(" 0.01 ", "bad").unwrap(), BigDecimal::from_str("0.01").unwrap());
        assert!(parse_weight("0", "bad").is_err());
        assert!(parse_weight("-3", "bad").is_err());
        assert!(parse_weight("", "bad").is_err());
        assert!(parse_weight("abc", "bad").is_err());
        assert!(parse_weight("12kg", "bad").is_err());
        assert!(parse_weight("1,2,3", "bad").is_err());
        assert_eq!(parse_weight("5.", "bad").unwrap(), BigDecimal::from(5));
        assert_eq!(parse_weight(",5", "bad").unwrap(), BigDecimal::from_str("0.5").unwrap());
    }

    #[test]
    fn test_exponent_and_overlong_weights_are_rejected() {
        assert!(parse_weight("1e5000000", "bad").is_err());
        assert!(parse_weight("1e-5000000", "bad").is_err());
        assert!(parse_weight("1E3", "bad").is_err());
        assert!(parse_weight("inf", "bad").is_err());
        assert!(parse_weight(&"9".repeat(MAX_WEIGHT_DIGITS + 1), "bad").is_err());
        assert!(parse_weight(&format!("0.{}1", "0".repeat(MAX_WEIGHT_DIGITS)), "bad").is_err());
        assert_eq!(
            parse_weight(&"9".repeat(MAX_WEIGHT_DIGITS), "bad").unwrap(),
            BigDecimal::from(999_999_999_999_999i64)
        );
    }

    #[test]
    fn test_parse_times() {
        assert_eq!(
            parse_required_time("7:05", "bad").unwrap(),
            NaiveTime::from_hms_opt(7, 5, 0).unwrap()
        );
        assert_eq!(
            parse_required_time("07:05:30", "bad").unwrap(),
            NaiveTime::from_hms_opt(7, 5, 30).unwrap()
        );
        assert!(parse_required_time("", "bad").is_err());
        assert!(parse_required_time("25:00", "bad").is_err());
        assert_eq!(parse_optional_time("  ", "bad").unwrap(), None);
    }

    #[test]
    fn test_default_validator_builds_trip() {
        let trip = DefaultTripValidator.validate_new_trip(&form()).unwrap();
        assert_eq!(trip.collection_time, NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert_eq!(trip.discharge_time, NaiveTime::from_hms_opt(9, 15, 0));
        assert_eq!(trip.collection_weight, BigDecimal::from(100));
        assert_eq!(trip.discharge_weight, BigDecimal::from(95));
        assert_eq!(trip.origin_farm, "Granja Boa Vista");
    }

    #[test]
    fn test_missing_collection_time_is_rejected() {
        let mut input = form();
        input.collection_time.clear();
        let err = DefaultTripValidator.validate_new_trip(&input).unwrap_err();
        assert_eq!(err.to_string(), "Por favor, preencha o horário da coleta.");
    }

    #[test]
    fn test_zero_collection_weight_is_rejected() {
        let mut input = form();
        input.collection_weight = "0".to_string();
        let err = DefaultTripValidator.validate_new_trip(&input).unwrap_err();
        assert!(matches!(err, LogbookError::Validation(_)));

        input.collection_weight = "0.01".to_string();
        assert!(DefaultTripValidator.validate_new_trip(&input).is_ok());
    }

    #[test]
    fn test_invalid_discharge_weight_is_rejected() {
        let mut input = form();
        input.discharge_weight = "n/a".to_string();
        let err = DefaultTripValidator.validate_new_trip(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Por favor, preencha um peso descarregado válido (maior que zero)."
        );
    }

    #[test]
    fn test_farms_are_optional_by_default() {
        let mut input = form();
        input.origin_farm.clear();
        input.destination_farm.clear();
        assert!(DefaultTripValidator.validate_new_trip(&input).is_ok());
        assert!(StrictTripValidator.validate_new_trip(&input).is_err());
    }

    #[test]
    fn test_strict_validator_accepts_complete_form() {
        assert!(StrictTripValidator.validate_new_trip(&form()).is_ok());

        let mut input = form();
        input.destination_farm = "x".repeat(101);
        let err = StrictTripValidator.validate_new_trip(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Granja de destino não pode exceder 100 caracteres"
        );
    }
}
