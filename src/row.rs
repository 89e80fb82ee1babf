//! The records that make up a paged collection.

use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};

/// A scalar field value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A missing value, rendered as an empty string.
    Null,
    /// A boolean.
    Bool(bool),
    /// A whole number.
    Integer(i64),
    /// A number with a fractional part.
    Float(f64),
    /// Text, which may hold a date.
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// A record of named fields, kept in the order they were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing the value of an existing field with the same name.
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name.to_owned(), value.into());
        self
    }

    /// Set a field, keeping its position if it already exists.
    pub fn insert(&mut self, name: String, value: Value) {
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Get the value of the field `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Iterate over the fields in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// The number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = Row::new();
        for (key, value) in iter {
            row.insert(key.into(), value.into());
        }
        row
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = Row;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of field names to scalar values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut row = Row {
                    fields: Vec::with_capacity(map.size_hint().unwrap_or_default()),
                };

                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    row.insert(key, value);
                }

                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::{Row, Value};

    #[test]
    fn deserialize_keeps_field_order() {
        let json = r#"{"zeta": "last letter", "alpha": 1, "mid": 2.5, "flag": true, "none": null}"#;

        let row: Row = serde_json::from_str(json).unwrap();

        let got: Vec<(&str, &Value)> = row.iter().collect();
        assert_eq!(
            got,
            [
                ("zeta", &Value::Text("last letter".to_owned())),
                ("alpha", &Value::Integer(1)),
                ("mid", &Value::Float(2.5)),
                ("flag", &Value::Bool(true)),
                ("none", &Value::Null),
            ]
        );
    }

    #[test]
    fn deserialize_rejects_nested_values() {
        let json = r#"{"tags": ["a", "b"]}"#;

        let result = serde_json::from_str::<Row>(json);

        assert!(result.is_err(), "want error for nested value, got {result:?}");
    }

    #[test]
    fn insert_replaces_existing_field_in_place() {
        let row = Row::new()
            .with_field("id", 1_i64)
            .with_field("name", "first")
            .with_field("id", 2_i64);

        let keys: Vec<&str> = row.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["id", "name"]);
        assert_eq!(row.get("id"), Some(&Value::Integer(2)));
    }

    #[test]
    fn display_values() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Integer(-3).to_string(), "-3");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::from("text").to_string(), "text");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }
}
