//! Expiration date layout shared by storage and the HTTP boundary.

use jiff::{Error, Zoned, civil::Date};

/// Day/month/year layout used on the wire and on disk.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `DD/MM/YYYY` date.
///
/// # Errors
///
/// Returns an error when the input does not match the layout.
pub fn parse_date(value: &str) -> Result<Date, Error> {
    Date::strptime(DATE_FORMAT, value.trim())
}

/// Render a date as `DD/MM/YYYY`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.strftime(DATE_FORMAT).to_string()
}

/// The current calendar date in the system time zone.
#[must_use]
pub fn today() -> Date {
    Zoned::now().date()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_day_month_year() -> TestResult {
        assert_eq!(parse_date("01/02/2006")?, date(2006, 2, 1));

        Ok(())
    }

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(format_date(date(2024, 12, 1)), "01/12/2024");
    }

    #[test]
    fn rejects_iso_dates() {
        assert!(parse_date("2024-12-01").is_err());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_date("").is_err());
    }
}
