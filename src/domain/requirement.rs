//! Requirement entries parsed from a dependency manifest

use serde::Serialize;
use std::fmt;

/// A single package line from the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    /// Package name (text before the first version operator)
    pub name: String,
    /// Version constraint as written, e.g. `==0.1` or `>=1.0,<2.0`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
}

impl Requirement {
    /// Creates a requirement without a version constraint
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
        }
    }

    /// Sets the version constraint (builder pattern)
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }

    /// Returns true if the line carried a version constraint
    pub fn is_constrained(&self) -> bool {
        self.constraint.is_some()
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(constraint) => write!(f, "{}{}", self.name, constraint),
            None => write!(f, "{}", self.name),
        }
    }
}
