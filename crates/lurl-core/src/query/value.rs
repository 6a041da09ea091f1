//! Per-key query value: one string, or every value of a repeated key.

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Multi(Vec<String>),
}

impl QueryValue {
    /// All values for this key, in order.
    pub fn values(&self) -> &[String] {
        match self {
            QueryValue::Single(v) => std::slice::from_ref(v),
            QueryValue::Multi(vs) => vs,
        }
    }

    /// The first value, if any.
    pub fn first(&self) -> Option<&str> {
        self.values().first().map(String::as_str)
    }

    pub(crate) fn push(&mut self, value: String) {
        match self {
            QueryValue::Single(prev) => {
                let prev = std::mem::take(prev);
                *self = QueryValue::Multi(vec![prev, value]);
            }
            QueryValue::Multi(vs) => vs.push(value),
        }
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Single(v)
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Single(v.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(vs: Vec<String>) -> Self {
        QueryValue::Multi(vs)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(vs: Vec<&str>) -> Self {
        QueryValue::Multi(vs.into_iter().map(str::to_string).collect())
    }
}

/// Scalars are stringified the way the legacy querystring module does it:
/// numbers and booleans by their text form, non-finite numbers and null as "".
fn float_text(v: f64) -> String {
    if v.is_finite() {
        v.to_string()
    } else {
        String::new()
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(float_text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }
}

struct Scalar(String);

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor).map(Scalar)
    }
}

struct QueryValueVisitor;

impl<'de> Visitor<'de> for QueryValueVisitor {
    type Value = QueryValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar or a sequence of scalars")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<QueryValue, E> {
        ScalarVisitor.visit_str(v).map(QueryValue::Single)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<QueryValue, E> {
        Ok(QueryValue::Single(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<QueryValue, E> {
        ScalarVisitor.visit_bool(v).map(QueryValue::Single)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<QueryValue, E> {
        ScalarVisitor.visit_i64(v).map(QueryValue::Single)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<QueryValue, E> {
        ScalarVisitor.visit_u64(v).map(QueryValue::Single)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<QueryValue, E> {
        ScalarVisitor.visit_f64(v).map(QueryValue::Single)
    }

    fn visit_unit<E: de::Error>(self) -> Result<QueryValue, E> {
        Ok(QueryValue::Single(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<QueryValue, E> {
        Ok(QueryValue::Single(String::new()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<QueryValue, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(Scalar(v)) = seq.next_element()? {
            values.push(v);
        }
        Ok(QueryValue::Multi(values))
    }
}

impl<'de> Deserialize<'de> for QueryValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QueryValueVisitor)
    }
}
