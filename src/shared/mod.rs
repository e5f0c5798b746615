//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the relayer sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod serde_util;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

// ─── AssetData ───────────────────────────────────────────────────────────────

/// ABI-encoded asset identifier as a `0x`-prefixed hex string.
///
/// The encoding is opaque to this crate: only its shape is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AssetData(String);

impl AssetData {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// `0x` followed by a non-empty, even number of hex digits.
    pub fn is_well_formed(&self) -> bool {
        match self.0.strip_prefix("0x") {
            Some(hex) => {
                !hex.is_empty() && hex.len() % 2 == 0 && hex.bytes().all(|b| b.is_ascii_hexdigit())
            }
            None => false,
        }
    }

    /// Hex comparison, ignoring case.
    pub fn matches(&self, other: &AssetData) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::fmt::Display for AssetData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetData {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AssetData {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for AssetData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AssetData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AssetData(s))
    }
}

// ─── Amount ──────────────────────────────────────────────────────────────────

/// Token quantity in base units (wei-style unsigned integer of arbitrary size).
///
/// Serialized as a decimal string. Deserializes from a decimal string or a JSON
/// integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(#[serde(with = "serde_util::base_units")] BigUint);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid amount {0:?}: expected an unsigned base-unit integer")]
pub struct AmountParseError(pub String);

impl Amount {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Read an optional amount out of a loose JSON value.
    ///
    /// `null` and `""` count as absent. Numbers above `u64::MAX` are rejected;
    /// larger amounts must arrive as decimal strings.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Option<Self>, AmountParseError> {
        match value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::String(s) if s.is_empty() => Ok(None),
            serde_json::Value::String(s) => s.parse().map(Some),
            serde_json::Value::Number(n) => n
                .as_u64()
                .map(|v| Some(Amount::from(v)))
                .ok_or_else(|| AmountParseError(n.to_string())),
            other => Err(AmountParseError(other.to_string())),
        }
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // BigUint's parser tolerates `+` and `_`; the wire format does not.
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountParseError(s.to_string()));
        }
        BigUint::from_str(s)
            .map(Amount)
            .map_err(|_| AmountParseError(s.to_string()))
    }
}

impl From<u64> for Amount {
    fn from(v: u64) -> Self {
        Self(BigUint::from(v))
    }
}

impl From<BigUint> for Amount {
    fn from(v: BigUint) -> Self {
        Self(v)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── PaginatedCollection ─────────────────────────────────────────────────────

/// One page of an SRA collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedCollection<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    pub records: Vec<T>,
}
