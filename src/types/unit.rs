// Physical unit value: a magnitude tagged with a dimension name.

use std::fmt;

/// A magnitude carrying a dimension tag, e.g. `5 mm`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    value: f64,
    name: String,
}

impl Unit {
    pub fn new(value: f64, name: impl Into<String>) -> Self {
        Self { value, name: name.into() }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Dimension tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// New unit with the magnitude multiplied by `factor`; `self` is left untouched.
    pub fn scaled(&self, factor: f64) -> Self {
        Self { value: self.value * factor, name: self.name.clone() }
    }

    /// New unit with `other`'s magnitude added, or `None` if the tags differ.
    pub fn checked_add(&self, other: &Unit) -> Option<Self> {
        (self.name == other.name).then(|| Self { value: self.value + other.value, name: self.name.clone() })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.name)
    }
}
