use std::collections::HashMap;

/// Parameters of a `Digest` authorization header, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestParams {
    params: HashMap<String, String>,
}

impl DigestParams {
    /// Parses a comma separated `key=value` list.
    ///
    /// Tokens without `=` or with an empty key are skipped. When a key repeats,
    /// the last occurrence wins. Values lose surrounding whitespace and one pair
    /// of enclosing double quotes.
    pub fn parse(params: &str) -> Self {
        let params = params
            .split(',')
            .filter_map(|token| {
                let Some((key, value)) = token.split_once('=') else {
                    tracing::debug!("Skipping digest parameter without `=`");
                    return None;
                };

                let key = key.trim();
                if key.is_empty() {
                    tracing::debug!("Skipping digest parameter with empty key");
                    return None;
                }

                Some((key.to_string(), Self::unquote(value.trim()).to_string()))
            })
            .collect();

        Self { params }
    }

    fn unquote(value: &str) -> &str {
        value
            .strip_prefix('"')
            .and_then(|value| value.strip_suffix('"'))
            .unwrap_or(value)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
