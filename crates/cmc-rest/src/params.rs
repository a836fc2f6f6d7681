//! Query parameter normalization
//!
//! Identifier, symbol and slug options accept a scalar, an array or an
//! already comma-separated string. All of them normalize to the same
//! [`ParamList`], which is sent as one comma-joined value.

use crate::error::RestResult;
use std::fmt;

/// Comma-joinable list of ids, symbols, slugs or currencies
///
/// ```
/// use cmc_rest::ParamList;
///
/// assert_eq!(ParamList::from(["BTC", "ETH"]), ParamList::from("BTC,ETH"));
/// assert_eq!(ParamList::from(vec![1u64, 1027]).to_param(), "1,1027");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParamList(Vec<String>);

impl ParamList {
    /// Build a list from any iterable of displayable items.
    ///
    /// Items are split on commas and trimmed; blank entries are dropped.
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        let entries = items
            .into_iter()
            .flat_map(|item| {
                item.to_string()
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self(entries)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the list has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in order
    pub fn items(&self) -> &[String] {
        &self.0
    }

    /// Comma-joined wire value
    pub fn to_param(&self) -> String {
        self.0.join(",")
    }
}

impl fmt::Display for ParamList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_param())
    }
}

impl From<&str> for ParamList {
    fn from(value: &str) -> Self {
        Self::new([value])
    }
}

impl From<String> for ParamList {
    fn from(value: String) -> Self {
        Self::new([value])
    }
}

impl From<u64> for ParamList {
    fn from(value: u64) -> Self {
        Self::new([value])
    }
}

impl From<u32> for ParamList {
    fn from(value: u32) -> Self {
        Self::new([value])
    }
}

impl<T: ToString> From<Vec<T>> for ParamList {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T: ToString> From<&[T]> for ParamList {
    fn from(values: &[T]) -> Self {
        Self::new(values.iter().map(ToString::to_string))
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for ParamList {
    fn from(values: [T; N]) -> Self {
        Self::new(values)
    }
}

/// Ordered query string under construction
///
/// Absent options are never pushed, so they never reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    pub fn push(&mut self, key: &'static str, value: impl ToString) {
        self.pairs.push((key, value.to_string()));
    }

    /// Append a parameter if present
    pub fn push_opt<T: ToString>(&mut self, key: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append a list as one comma-joined parameter
    pub fn push_list(&mut self, key: &'static str, list: &ParamList) {
        self.push(key, list.to_param());
    }

    /// Append enumerated values as one comma-joined parameter, unless empty
    pub fn push_joined<T: fmt::Display>(&mut self, key: &'static str, values: &[T]) {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.push(key, joined);
        }
    }

    /// Look up a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Parameter names in order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(k, _)| *k)
    }

    /// Check if no parameter was pushed
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encode as `application/x-www-form-urlencoded`
    pub fn encode(&self) -> RestResult<String> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }
}
