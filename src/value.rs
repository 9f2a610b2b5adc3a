use crate::compare::{Comparison, Structural, ensure_comparable};
use std::collections::HashMap;

/// # A value of any shape
///
/// For comparing data whose shape is only known at runtime, like decoded
/// documents. [`Value::Opaque`] stands for things without equality, such as
/// functions, and makes any comparison it takes part in fail
#[derive(Clone, Debug)]
pub enum Value {
    Unit,
    Bool(bool),
    Num(i64),
    Float(f64),
    Char(char),
    Str(String),
    Array(Vec<Value>),
    Map(HashMap<String, Value>),
    Record {
        name: String,
        fields: Vec<(String, Value)>,
    },
    Opaque(String),
}

impl Value {
    #[must_use]
    pub fn record(name: impl Into<String>, fields: impl IntoIterator<Item = (&'static str, Value)>) -> Self {
        Value::Record {
            name: name.into(),
            fields: fields.into_iter().map(|(k, v)| (k.to_owned(), v)).collect(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Num(_) => "num",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "str",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Record { .. } => "record",
            Value::Opaque(_) => "opaque",
        }
    }

    fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record { fields, .. } => fields.iter().find(|(k, _)| k == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Every field of `self` has a matching field of the same name in `other`
    fn fields_found_in(&self, other: &Value) -> Comparison {
        let Value::Record { fields, .. } = self else {
            return Ok(false);
        };
        for (k, v) in fields {
            match other.field(k) {
                Some(w) if v.structural_eq(w)? => {}
                _ => return Ok(false),
            }
        }
        Ok(true)
    }
}

impl Structural for Value {
    fn structural_eq(&self, other: &Self) -> Comparison {
        use Value as V;
        ensure_comparable(self, other)?;
        Ok(match (self, other) {
            (V::Unit, V::Unit) => true,
            (V::Bool(a), V::Bool(b)) => a == b,
            (V::Num(a), V::Num(b)) => a == b,
            (V::Float(a), V::Float(b)) => a == b,
            (V::Char(a), V::Char(b)) => a == b,
            (V::Str(a), V::Str(b)) => a == b,
            (V::Array(a), V::Array(b)) => a.structural_eq(b)?,
            (V::Map(a), V::Map(b)) => a.structural_eq(b)?,
            (
                V::Record { name, fields },
                V::Record {
                    name: other_name,
                    fields: other_fields,
                },
            ) => {
                // both ways, duplicate names must not make it one-sided
                name == other_name
                    && fields.len() == other_fields.len()
                    && self.fields_found_in(other)?
                    && other.fields_found_in(self)?
            }
            _ => false,
        })
    }

    fn uncomparable(&self) -> Option<String> {
        match self {
            Value::Opaque(_) => Some(format!("{self:?}")),
            Value::Array(items) => items.iter().find_map(Value::uncomparable),
            Value::Map(entries) => entries.values().find_map(Value::uncomparable),
            Value::Record { fields, .. } => fields.iter().find_map(|(_, v)| v.uncomparable()),
            _ => None,
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Unit
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Num(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Num(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<HashMap<String, T>> for Value {
    fn from(v: HashMap<String, T>) -> Self {
        Value::Map(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
