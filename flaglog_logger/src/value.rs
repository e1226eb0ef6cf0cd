use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A value prepared for rendering into a log record.
///
/// Each variant has exactly one rendering rule:
/// * `Scalar`: the text, verbatim.
/// * `Bool`: `true` or `false`.
/// * `Sequence` and `Set`: `[a, b, c]`.
/// * `Mapping`: `{k -> v, k -> v}`.
/// * `Pair`: `[ a,\tb ]`.
///
/// Containers recurse under the same rules.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Any value rendered through its natural textual form (numbers, strings, chars).
    Scalar(String),
    /// A boolean; never rendered as a digit.
    Bool(bool),
    /// An ordered sequence.
    Sequence(Vec<Value>),
    /// A set, in its own iteration order.
    Set(Vec<Value>),
    /// A key to value mapping, in its own iteration order.
    Mapping(Vec<(Value, Value)>),
    /// A two element tuple.
    Pair(Box<Value>, Box<Value>),
}

impl Value {
    /// Render into a new string.
    pub fn render(&self) -> String {
        let mut out = String::default();
        self.render_into(&mut out);
        out
    }

    /// Render, appending to `out`.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Value::Scalar(text) => out.push_str(text),
            Value::Bool(true) => out.push_str("true"),
            Value::Bool(false) => out.push_str("false"),
            Value::Sequence(items) | Value::Set(items) => {
                out.push('[');

                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }

                    item.render_into(out);
                }

                out.push(']');
            }
            Value::Mapping(entries) => {
                out.push('{');

                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }

                    key.render_into(out);
                    out.push_str(" -> ");
                    value.render_into(out);
                }

                out.push('}');
            }
            Value::Pair(first, second) => {
                out.push_str("[ ");
                first.render_into(out);
                out.push_str(",\t");
                second.render_into(out);
                out.push_str(" ]");
            }
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Behaviour for values that can be appended to a [`LogRecord`](crate::LogRecord).
///
/// Implemented for the primitive scalars, `bool`, strings, the std sequence/set/map containers, and pairs.
/// Implement it for your own types by converting into the closest [`Value`] variant.
pub trait Loggable {
    /// Convert into the tagged rendering model.
    fn to_value(&self) -> Value;
}

macro_rules! scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Loggable for $t {
                fn to_value(&self) -> Value {
                    Value::Scalar(self.to_string())
                }
            }
        )*
    };
}

scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, str, String,
);

impl Loggable for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Loggable for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: Loggable + ?Sized> Loggable for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: Loggable + ?Sized> Loggable for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: Loggable> Loggable for [T] {
    fn to_value(&self) -> Value {
        Value::Sequence(self.iter().map(Loggable::to_value).collect())
    }
}

impl<T: Loggable, const N: usize> Loggable for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: Loggable> Loggable for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: Loggable> Loggable for VecDeque<T> {
    fn to_value(&self) -> Value {
        Value::Sequence(self.iter().map(Loggable::to_value).collect())
    }
}

impl<T: Loggable> Loggable for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::Set(self.iter().map(Loggable::to_value).collect())
    }
}

impl<T: Loggable, S> Loggable for HashSet<T, S> {
    fn to_value(&self) -> Value {
        Value::Set(self.iter().map(Loggable::to_value).collect())
    }
}

impl<K: Loggable, V: Loggable> Loggable for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Mapping(self.iter().map(|(k, v)| (k.to_value(), v.to_value())).collect())
    }
}

impl<K: Loggable, V: Loggable, S> Loggable for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Mapping(self.iter().map(|(k, v)| (k.to_value(), v.to_value())).collect())
    }
}

impl<A: Loggable, B: Loggable> Loggable for (A, B) {
    fn to_value(&self) -> Value {
        Value::Pair(Box::new(self.0.to_value()), Box::new(self.1.to_value()))
    }
}
