use serde::{Deserialize, Serialize};

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::ValidationError;

/// Server-assigned identifier of a customer row.
///
/// Serialized as a bare integer so the wire shape stays `{"id": 1, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

impl CustomerId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A stored customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub age: i64,
}

/// A customer that has not been persisted yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub age: i64,
}

/// Decoded body of a create or update request.
///
/// Every field is optional. Absent and `null` fields both decode to `None`;
/// unknown fields are ignored. `id` is accepted so clients can echo a full
/// record back, but it never decides which row is written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
}

impl CustomerPayload {
    /// Build a fresh record from the payload. Missing fields take their zero
    /// values (`""` and `0`), which validation then rejects.
    pub fn into_new_customer(self) -> NewCustomer {
        NewCustomer {
            name: self.name.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
        }
    }

    /// Overwrite the fields present in the payload onto an existing record.
    ///
    /// Fields the payload omits keep their stored values. The record's id is
    /// never touched.
    pub fn merge_into(self, customer: &mut Customer) {
        if let Some(name) = self.name {
            customer.name = name;
        }
        if let Some(age) = self.age {
            customer.age = age;
        }
    }
}

/// Check the record invariant: a non-empty name and a strictly positive age.
///
/// Applied identically before every create and every update.
///
/// # Examples
///
/// ```
/// use customerd_types::customer::validate;
/// use customerd_types::error::ValidationError;
///
/// assert!(validate("Alice", 28).is_ok());
/// assert_eq!(validate("", 28), Err(ValidationError::EmptyName));
/// assert_eq!(validate("Alice", 0), Err(ValidationError::NonPositiveAge(0)));
/// ```
pub fn validate(name: &str, age: i64) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if age <= 0 {
        return Err(ValidationError::NonPositiveAge(age));
    }
    Ok(())
}

impl NewCustomer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.name, self.age)
    }
}

impl Customer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.name, self.age)
    }
}
