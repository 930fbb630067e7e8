use crate::core::errors::ExchangeError;

/// Request parameter set shared by public and trading dispatch.
///
/// Entries keep insertion order. Empty values are dropped on insert and
/// dropped again on encode, so re-filtering an already-filtered set is a
/// no-op. Optional fields are omitted from the wire rather than sent empty.
#[derive(Debug, Clone, Default)]
pub struct ParamSet {
    entries: Vec<(String, String)>,
}

impl ParamSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set seeded with the fixed command value
    #[must_use]
    pub fn command(command: &str) -> Self {
        let mut set = Self::default();
        set.insert("command", command);
        set
    }

    /// Add a field, dropping it when the rendered value is empty
    pub fn insert(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        if !value.is_empty() {
            self.entries.push((key.to_string(), value));
        }
    }

    /// Add an optional field; `None` is omitted entirely
    pub fn insert_opt(&mut self, key: &str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Look up a field by name
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries with empty values stripped, in insertion order
    #[must_use]
    pub fn filtered(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .cloned()
            .collect()
    }

    /// Form-encode the filtered entries into a request body or query string
    pub fn encode(&self) -> Result<String, ExchangeError> {
        Self::encode_entries(&self.filtered())
    }

    /// Form-encode a prepared entry list; the exchange decodes standard
    /// `&`-separated form encoding, so nothing else is accepted here.
    pub fn encode_entries(entries: &[(String, String)]) -> Result<String, ExchangeError> {
        serde_urlencoded::to_string(entries)
            .map_err(|e| ExchangeError::InvalidParameters(format!("failed to encode body: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_dropped_on_insert() {
        let mut params = ParamSet::command("returnTradeHistory");
        params.insert("currencyPair", "BTC_USD");
        params.insert("start", "");
        params.insert_opt("end", None::<String>);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("start"), None);
        assert_eq!(params.get("end"), None);
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut params = ParamSet::command("returnOrderBook");
        params.insert("currencyPair", "BTC_USD");
        let once = params.filtered();
        let twice: Vec<_> = once
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn encode_preserves_insertion_order() {
        let mut params = ParamSet::command("buy");
        params.insert("currencyPair", "BTC_USD");
        params.insert("rate", "100");
        params.insert("amount", "1");
        assert_eq!(
            params.encode().unwrap(),
            "command=buy&currencyPair=BTC_USD&rate=100&amount=1"
        );
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        let mut params = ParamSet::command("withdraw");
        params.insert("address", "a b&c=d");
        assert_eq!(
            params.encode().unwrap(),
            "command=withdraw&address=a+b%26c%3Dd"
        );
    }
}
