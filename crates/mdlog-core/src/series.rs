//! Time-series data model shared by the parsers and the aggregator.

use std::collections::HashMap;
use std::fmt;

// ── Value ─────────────────────────────────────────────────────────────────────

/// A single numeric datum read from a log file.
///
/// The lexical form of the source token decides the variant: a token that
/// parses as an integer stays [`Value::Int`], anything else (decimal point,
/// exponent) becomes [`Value::Real`]. Inference is per value, not per column,
/// so a series may mix both variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
}

impl Value {
    /// Parse a numeric token, trying the integer form first.
    ///
    /// Returns `None` when the token is not a number.
    pub fn parse(token: &str) -> Option<Value> {
        if let Ok(n) = token.parse::<i64>() {
            return Some(Value::Int(n));
        }
        token.parse::<f64>().ok().map(Value::Real)
    }

    /// The value widened to `f64` regardless of variant.
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(n) => n as f64,
            Value::Real(x) => x,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            // Debug formatting keeps a trailing `.0`, so real-valued columns
            // stay visibly real in the output.
            Value::Real(x) => write!(f, "{:?}", x),
        }
    }
}

// ── SeriesTable ───────────────────────────────────────────────────────────────

/// An insertion-ordered mapping from series key to its per-frame values.
///
/// Key order is first-seen order in the source text, which keeps output
/// column order stable across runs. Values are appended one per observed
/// frame.
#[derive(Debug, Clone, Default)]
pub struct SeriesTable {
    keys: Vec<String>,
    series: HashMap<String, Vec<Value>>,
}

impl SeriesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Append one value to `key`'s series, registering the key on first sight.
    pub fn push(&mut self, key: &str, value: Value) {
        match self.series.get_mut(key) {
            Some(values) => values.push(value),
            None => {
                self.keys.push(key.to_string());
                self.series.insert(key.to_string(), vec![value]);
            }
        }
    }

    /// Concatenate every series of `other` onto this table, key-wise.
    ///
    /// Keys new to this table are appended in `other`'s key order.
    pub fn extend(&mut self, other: SeriesTable) {
        let SeriesTable { keys, mut series } = other;
        for key in keys {
            let values = series.remove(&key).unwrap_or_default();
            match self.series.get_mut(&key) {
                Some(existing) => existing.extend(values),
                None => {
                    self.keys.push(key.clone());
                    self.series.insert(key, values);
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[Value]> {
        self.series.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.series.contains_key(key)
    }

    /// Remove `key` and its series, unregistering it from the key order.
    pub fn remove(&mut self, key: &str) -> Option<Vec<Value>> {
        let removed = self.series.remove(key);
        if removed.is_some() {
            self.keys.retain(|k| k != key);
        }
        removed
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    /// `(key, series)` pairs in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> + '_ {
        self.keys
            .iter()
            .filter_map(|k| self.series.get(k).map(|v| (k.as_str(), v.as_slice())))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
