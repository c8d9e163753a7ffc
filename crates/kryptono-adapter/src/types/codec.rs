/*
[INPUT]:  Loosely typed JSON values (decimal strings, tuple arrays, nullable objects)
[OUTPUT]: Strongly typed field codecs shared by request/response structs
[POS]:    Data layer - wire-format helpers
[UPDATE]: When the exchange introduces a new field encoding
*/

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// Parse a decimal from its wire text. Accepts plain and scientific notation.
pub fn parse_decimal(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    let raw = raw.trim();
    if raw.contains(['e', 'E']) {
        Decimal::from_scientific(raw)
    } else {
        Decimal::from_str(raw)
    }
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal encoded as a string or number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
        parse_decimal(value).map_err(|err| E::custom(format!("invalid decimal {value:?}: {err}")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
        // f64 Display yields the shortest round-trip form without an exponent
        Decimal::from_str(&value.to_string()).map_err(E::custom)
    }
}

/// Decimal transmitted as a JSON string.
///
/// Encodes with `Decimal`'s `Display` (scale preserved, so `"0.00001230"`
/// re-encodes byte-for-byte). Decodes from a string or a bare JSON number.
pub mod decimal_str {
    use super::*;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

/// Optional variant of [`decimal_str`]; `null` and `""` decode to `None`.
pub mod decimal_str_option {
    use super::*;

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.collect_str(value),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) if raw.trim().is_empty() => Ok(None),
            Some(Value::String(raw)) => parse_decimal(&raw)
                .map(Some)
                .map_err(|err| de::Error::custom(format!("invalid decimal {raw:?}: {err}"))),
            Some(Value::Number(number)) => decimal_from_number(&number)
                .map(Some)
                .map_err(de::Error::custom),
            Some(other) => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a decimal encoded as a string or number",
            )),
        }
    }
}

fn decimal_from_number(number: &Number) -> Result<Decimal, rust_decimal::Error> {
    if let Some(value) = number.as_i64() {
        return Ok(Decimal::from(value));
    }
    if let Some(value) = number.as_u64() {
        return Ok(Decimal::from(value));
    }
    parse_decimal(&number.to_string())
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Null => de::Unexpected::Unit,
        Value::Bool(flag) => de::Unexpected::Bool(*flag),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::String(raw) => de::Unexpected::Str(raw),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
    }
}

/// Decimal element inside a positional array.
struct LenientDecimal(Decimal);

impl<'de> Deserialize<'de> for LenientDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor).map(LenientDecimal)
    }
}

/// One order-book level, transmitted as a `[price, quantity]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLevel {
    pub price: Decimal,
    pub quantity: Decimal,
}

impl PriceLevel {
    pub fn new(price: Decimal, quantity: Decimal) -> Self {
        Self { price, quantity }
    }

    /// Notional value of the level (`price * quantity`).
    pub fn notional(&self) -> Decimal {
        self.price * self.quantity
    }
}

impl From<(Decimal, Decimal)> for PriceLevel {
    fn from((price, quantity): (Decimal, Decimal)) -> Self {
        Self { price, quantity }
    }
}

impl Serialize for PriceLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.price.to_string())?;
        tuple.serialize_element(&self.quantity.to_string())?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for PriceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PriceLevelVisitor;

        impl<'de> Visitor<'de> for PriceLevelVisitor {
            type Value = PriceLevel;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a [price, quantity] array of exactly two numbers")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<PriceLevel, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let LenientDecimal(price) = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let LenientDecimal(quantity) = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;

                let mut extra = 0usize;
                while seq.next_element::<IgnoredAny>()?.is_some() {
                    extra += 1;
                }
                if extra > 0 {
                    return Err(de::Error::invalid_length(2 + extra, &self));
                }

                Ok(PriceLevel { price, quantity })
            }
        }

        deserializer.deserialize_seq(PriceLevelVisitor)
    }
}

/// Amount followed by its currency code, e.g. `"0.09565710 ETH"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedAmount {
    pub value: Decimal,
    pub currency: Option<String>,
}

impl QuotedAmount {
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: Some(currency.into()),
        }
    }

    pub fn bare(value: Decimal) -> Self {
        Self {
            value,
            currency: None,
        }
    }
}

impl fmt::Display for QuotedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.currency {
            Some(currency) => write!(f, "{} {}", self.value, currency),
            None => write!(f, "{}", self.value),
        }
    }
}

impl FromStr for QuotedAmount {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split_whitespace();
        let value = parts
            .next()
            .ok_or_else(|| "empty amount".to_string())?;
        let value = parse_decimal(value).map_err(|err| format!("invalid amount {raw:?}: {err}"))?;
        let currency = parts.next().map(str::to_string);
        if parts.next().is_some() {
            return Err(format!("unexpected trailing text in amount {raw:?}"));
        }
        Ok(Self { value, currency })
    }
}

impl Serialize for QuotedAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for QuotedAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct QuotedAmountVisitor;

        impl<'de> Visitor<'de> for QuotedAmountVisitor {
            type Value = QuotedAmount;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an amount string such as \"1.5 BTC\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<QuotedAmount, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<QuotedAmount, E> {
                DecimalVisitor.visit_i64(value).map(QuotedAmount::bare)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<QuotedAmount, E> {
                DecimalVisitor.visit_u64(value).map(QuotedAmount::bare)
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<QuotedAmount, E> {
                DecimalVisitor.visit_f64(value).map(QuotedAmount::bare)
            }
        }

        deserializer.deserialize_any(QuotedAmountVisitor)
    }
}

/// Field whose JSON type depends on account state (`null`, scalar or object).
///
/// Declare as `Option<DynamicValue>` with `#[serde(default)]`: `null` and a
/// missing key both decode to `None`. Lists of them use
/// `Vec<Option<DynamicValue>>` with [`null_as_default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DynamicValue {
    Bool(bool),
    Number(Number),
    Text(String),
    List(Vec<Value>),
    Object(Map<String, Value>),
}

impl DynamicValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            DynamicValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            DynamicValue::Bool(flag) => Value::Bool(flag),
            DynamicValue::Number(number) => Value::Number(number),
            DynamicValue::Text(text) => Value::String(text),
            DynamicValue::List(items) => Value::Array(items),
            DynamicValue::Object(map) => Value::Object(map),
        }
    }
}

/// `null` decodes to the type's default (an empty list for `Vec`).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// List where both the list and its entries may be `null`; null entries are dropped.
pub fn skip_null_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(entries.unwrap_or_default().into_iter().flatten().collect())
}

/// Count transmitted as a JSON number, integral but possibly written as a
/// float (`8` or `8.0`).
pub mod integral_u32 {
    use super::*;
    use rust_decimal::prelude::ToPrimitive;

    pub fn serialize<S>(value: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IntegralVisitor;

        impl<'de> Visitor<'de> for IntegralVisitor {
            type Value = u32;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-negative integral number")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<u32, E> {
                u32::try_from(value)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<u32, E> {
                u32::try_from(value)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<u32, E> {
                if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
                    return Err(E::invalid_value(de::Unexpected::Float(value), &self));
                }
                Ok(value as u32)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<u32, E> {
                parse_decimal(value)
                    .ok()
                    .filter(|decimal| decimal.fract().is_zero())
                    .and_then(|decimal| decimal.to_u32())
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(IntegralVisitor)
    }
}
