use {
    core::{
        fmt::{self, Display},
        hash::{Hash, Hasher},
        mem,
    },
    serde::{Deserialize, Serialize},
};

/// A scalar produced by the query engine.
///
/// Values never coerce across variants: `Integer(2)` and `Float(2.0)` are
/// different values, and `Null` only equals `Null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(v1), Self::Boolean(v2)) => v1 == v2,
            (Self::Integer(v1), Self::Integer(v2)) => v1 == v2,
            // NaN equals itself so every value stays reflexive
            (Self::Float(v1), Self::Float(v2)) => v1 == v2 || (v1.is_nan() && v2.is_nan()),
            (Self::Text(v1), Self::Text(v2)) => v1 == v2,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);

        match self {
            Self::Null => {}
            Self::Boolean(v) => v.hash(state),
            Self::Integer(v) => v.hash(state),
            // equal floats must hash alike: one NaN, one zero
            Self::Float(v) if v.is_nan() => f64::NAN.to_bits().hash(state),
            Self::Float(v) if *v == 0.0 => 0.0f64.to_bits().hash(state),
            Self::Float(v) => v.to_bits().hash(state),
            Self::Text(v) => v.hash(state),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Boolean(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            // keep the fractional part so 2.0 never reads like the integer 2
            Self::Float(v) => write!(f, "{:?}", v),
            Self::Text(v) => write!(f, "'{}'", v.replace('\'', "''")),
        }
    }
}

macro_rules! value_conversions {
    ($(($raw:ty, $val:ident),)*) => {
        $(
            impl From<$raw> for Value {
                fn from(raw: $raw) -> Self {
                    Value::$val(raw.into())
                }
            }
        )*
    };
}

value_conversions! {
    (bool, Boolean),
    (i32, Integer),
    (i64, Integer),
    (u32, Integer),
    (f32, Float),
    (f64, Float),
    (String, Text),
    (&str, Text),
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(raw: Option<T>) -> Self {
        raw.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod test {
    use {super::*, std::collections::HashSet};

    #[test]
    fn no_cross_type_equality() {
        assert_ne!(Value::Integer(2), Value::Float(2.0));
        assert_ne!(Value::Text("2".into()), Value::Integer(2));
        assert_ne!(Value::Boolean(true), Value::Integer(1));
        assert_ne!(Value::Null, Value::Text(String::new()));
        assert_ne!(Value::Null, Value::Integer(0));
        assert_eq!(Value::Null, Value::Null);
    }

    #[test]
    fn float_equality() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_eq!(Value::Float(0.0), Value::Float(-0.0));
        assert_ne!(Value::Float(0.0), Value::Float(f64::MIN_POSITIVE));
        assert_eq!(Value::from(1.5f64), Value::Float(1.5));
    }

    #[test]
    fn hash_agrees_with_eq() {
        let set: HashSet<Value> = [
            Value::Float(f64::NAN),
            Value::Float(-f64::NAN),
            Value::Float(0.0),
            Value::Float(-0.0),
            Value::Integer(7),
            Value::from(7i32),
            Value::Null,
            Value::from(None::<i64>),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 4);
    }

    #[test]
    fn display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::Integer(2).to_string(), "2");
        assert_eq!(Value::from("O'Brien").to_string(), "'O''Brien'");
        assert_eq!(Value::Boolean(false).to_string(), "false");
    }

    #[test]
    fn decode_json_scalars() {
        let values: Vec<Value> =
            serde_json::from_str(r#"[null, true, 3, 3.0, "3", -4]"#).unwrap();

        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Boolean(true),
                Value::Integer(3),
                Value::Float(3.0),
                Value::Text("3".into()),
                Value::Integer(-4),
            ]
        );
    }
}
