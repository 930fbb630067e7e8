use crate::core::types::DateInput;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::warn;

/// Canonical uppercase form of a currency pair (`"btc_usd"` → `"BTC_USD"`)
#[must_use]
pub fn normalize_pair(pair: &str) -> String {
    pair.to_uppercase()
}

/// Canonical uppercase form of a currency code
#[must_use]
pub fn normalize_currency(currency: &str) -> String {
    currency.to_uppercase()
}

/// Resolve a flexible date bound to epoch seconds.
///
/// Bounds resolve independently; a bound that cannot be parsed resolves to
/// `None` and is omitted from the request rather than failing the call.
#[must_use]
pub fn resolve_epoch(input: Option<&DateInput>) -> Option<i64> {
    match input? {
        DateInput::Epoch(secs) => Some(*secs),
        DateInput::Timestamp(ts) => Some(ts.timestamp()),
        DateInput::Text(text) => parse_date_text(text),
    }
}

fn parse_date_text(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(epoch) = text.parse::<i64>() {
        return Some(epoch);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.timestamp());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc().timestamp());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp());
    }
    warn!("unparseable date input: {text:?}");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn pair_and_currency_uppercase() {
        assert_eq!(normalize_pair("btc_usd"), "BTC_USD");
        assert_eq!(normalize_pair("BTC_USD"), "BTC_USD");
        assert_eq!(normalize_currency("xmr"), "XMR");
    }

    #[test]
    fn plain_date_resolves_to_midnight_utc() {
        let input = DateInput::from("2021-01-01");
        assert_eq!(resolve_epoch(Some(&input)), Some(1_609_459_200));
    }

    #[test]
    fn datetime_string_resolves() {
        let input = DateInput::from("2021-01-01 12:30:00");
        assert_eq!(resolve_epoch(Some(&input)), Some(1_609_504_200));
    }

    #[test]
    fn rfc3339_resolves() {
        let input = DateInput::from("2021-06-01T00:00:00Z");
        assert_eq!(resolve_epoch(Some(&input)), Some(1_622_505_600));
    }

    #[test]
    fn numeric_inputs_pass_through() {
        assert_eq!(
            resolve_epoch(Some(&DateInput::from(1_609_459_200))),
            Some(1_609_459_200)
        );
        assert_eq!(
            resolve_epoch(Some(&DateInput::from("1609459200"))),
            Some(1_609_459_200)
        );
    }

    #[test]
    fn timestamp_input_resolves() {
        let ts = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            resolve_epoch(Some(&DateInput::from(ts))),
            Some(1_609_459_200)
        );
    }

    #[test]
    fn absent_and_unparseable_stay_none() {
        assert_eq!(resolve_epoch(None), None);
        let garbage = DateInput::from("the day after tomorrow");
        assert_eq!(resolve_epoch(Some(&garbage)), None);
    }

    #[test]
    fn bounds_resolve_independently() {
        let start = DateInput::from("not a date");
        let end = DateInput::from("2021-01-01");
        assert_eq!(resolve_epoch(Some(&start)), None);
        assert_eq!(resolve_epoch(Some(&end)), Some(1_609_459_200));
    }
}
