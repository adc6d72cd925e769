//! serde support: every integer type serializes as its 64-digit hex string.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{BigInt, BigIntF255, HexError};

struct HexVisitor<T>(PhantomData<T>);

impl<T: FromStr<Err = HexError>> Visitor<'_> for HexVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a 64-digit big-endian hex string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        v.parse().map_err(E::custom)
    }
}

impl<const L: usize, const W: u32> Serialize for BigInt<L, W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, const L: usize, const W: u32> Deserialize<'de> for BigInt<L, W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor(PhantomData))
    }
}

impl Serialize for BigIntF255 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BigIntF255 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{BigInt256, BigInt270, BigIntF255, FieldPreset};

    #[test]
    fn serializes_as_hex_string() {
        let p = FieldPreset::Bls12_377Fr.get_params();
        let json = serde_json::to_string(&p.p256).unwrap();
        assert_eq!(json, format!("\"{}\"", FieldPreset::Bls12_377Fr.modulus_hex()));
        assert_eq!(serde_json::to_string(&p.pf255).unwrap(), json);
        assert_eq!(serde_json::from_str::<BigInt270>(&json).unwrap(), p.p270);
        assert_eq!(serde_json::from_str::<BigIntF255>(&json).unwrap(), p.pf255);
    }

    #[test]
    fn accepts_upper_case_input() {
        let json = format!("\"{}\"", FieldPreset::Bls12_377Fr.modulus_hex().to_uppercase());
        let p = serde_json::from_str::<BigInt256>(&json).unwrap();
        assert_eq!(p, FieldPreset::Bls12_377Fr.get_params().p256);
    }

    #[test]
    fn rejects_malformed_hex() {
        let err = serde_json::from_str::<BigInt256>("\"1234\"").unwrap_err();
        assert!(err.to_string().contains("invalid hex length"));
        let err = serde_json::from_str::<BigIntF255>("42").unwrap_err();
        assert!(err.to_string().contains("hex string"));
    }
}
