use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::exchange_rate::ExchangeRate;
use crate::rounding::Rounding;

/// Every tunable of the swap form, with in-code defaults.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapPrefs {
    exchange_rate: ExchangeRate,
    /// Fractional digits kept in a derived field.
    decimal_places: u32,
    /// Fractional digits in the rate line.
    rate_display_places: u32,
    rounding: Rounding,
    debounce_ms: u64,
    submit_delay_ms: u64,
}

impl SwapPrefs {
    pub fn exchange_rate(&self) -> &ExchangeRate {
        &self.exchange_rate
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    pub fn rate_display_places(&self) -> u32 {
        self.rate_display_places
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn with_exchange_rate(mut self, rate: ExchangeRate) -> Self {
        self.exchange_rate = rate;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce_ms = debounce.as_millis() as u64;
        self
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay_ms = delay.as_millis() as u64;
        self
    }
}

impl Default for SwapPrefs {
    fn default() -> Self {
        Self {
            exchange_rate: ExchangeRate::default(),
            decimal_places: 2,
            rate_display_places: 4,
            rounding: Rounding::Down,
            debounce_ms: 300,
            submit_delay_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let prefs = SwapPrefs::default();
        assert_eq!(prefs.exchange_rate().to_string(), "0.85");
        assert_eq!(prefs.decimal_places(), 2);
        assert_eq!(prefs.rate_display_places(), 4);
        assert!(prefs.rounding().is_down());
        assert_eq!(prefs.debounce(), Duration::from_millis(300));
        assert_eq!(prefs.submit_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let prefs: SwapPrefs =
            serde_json::from_str(r#"{ "exchange_rate": "1.5", "debounce_ms": 50 }"#).unwrap();
        assert_eq!(prefs.exchange_rate().to_string(), "1.5");
        assert_eq!(prefs.debounce(), Duration::from_millis(50));
        assert_eq!(prefs.submit_delay(), Duration::from_millis(1000));
        assert_eq!(prefs.decimal_places(), 2);
    }

    #[test]
    fn builders_override() {
        let prefs = SwapPrefs::default()
            .with_exchange_rate("2".parse().unwrap())
            .with_debounce(Duration::ZERO)
            .with_submit_delay(Duration::from_millis(5));
        assert_eq!(prefs.exchange_rate().to_string(), "2");
        assert_eq!(prefs.debounce(), Duration::ZERO);
        assert_eq!(prefs.submit_delay(), Duration::from_millis(5));
    }
}
