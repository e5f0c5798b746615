//! Custom serde helpers for relayer wire formats.

/// Serializes a `BigUint` as a decimal string and accepts either a decimal
/// string or a non-negative JSON integer on the way in.
///
/// SRA payloads carry every quantity as a string because JSON numbers cannot
/// hold uint256 values; some relayers still send small values as numbers.
/// Numeric input is capped at `u64::MAX`: serde_json reads larger integers as
/// `f64`, which cannot represent every base-unit amount, so they are rejected
/// and must be sent as strings.
pub mod base_units {
    use num_bigint::BigUint;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;
    use std::str::FromStr;

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BaseUnitsVisitor)
    }

    struct BaseUnitsVisitor;

    impl<'de> Visitor<'de> for BaseUnitsVisitor {
        type Value = BigUint;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an unsigned integer or a decimal string of digits")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(BigUint::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            u64::try_from(v)
                .map(BigUint::from)
                .map_err(|_| E::custom(format!("Negative amount: {}", v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if v.is_finite() && v.fract() == 0.0 && v >= 0.0 {
                Err(E::custom(format!(
                    "Amount {} exceeds u64 as a JSON number; send it as a decimal string",
                    v
                )))
            } else {
                Err(E::custom(format!("Non-integral amount: {}", v)))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
                return Err(E::custom(format!("Invalid amount: {:?}", v)));
            }
            BigUint::from_str(v).map_err(|e| E::custom(format!("Invalid amount {:?}: {}", v, e)))
        }
    }
}
