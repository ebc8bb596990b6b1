//! User record models
//!
//! Defines the structure of user records returned by the users API.
//! Only the fields the aggregation reads are required; everything else
//! the API sends is ignored.

use serde::{Deserialize, Deserializer};

/// Envelope returned by the users endpoint: `{ "users": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// A single user record.
///
/// Treated as immutable input by the aggregation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Not read by the aggregation; records without one decode as 0
    #[serde(default)]
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    /// Passed through unvalidated; zero and negative ages are kept
    pub age: i64,
    /// Only exact "male" / "female" are counted
    pub gender: String,
    pub hair: Hair,
    pub address: Address,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hair {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    /// Absent or null departments decode as "" and still form a group
    #[serde(default, deserialize_with = "null_as_empty")]
    pub department: String,
}

/// Decodes a string field, treating `null` like a missing value.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl User {
    /// Key used by the address map: first and last name, no separator.
    pub fn full_name_key(&self) -> String {
        format!("{}{}", self.first_name, self.last_name)
    }
}

/// Builds a user with just the fields the aggregation reads.
#[cfg(test)]
pub(crate) fn sample_user(
    department: &str,
    gender: &str,
    age: i64,
    hair_color: &str,
    first_name: &str,
    last_name: &str,
    postal_code: &str,
) -> User {
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT_ID: AtomicU64 = AtomicU64::new(1);

    User {
        id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        age,
        gender: gender.to_string(),
        hair: Hair {
            color: hair_color.to_string(),
        },
        address: Address {
            postal_code: postal_code.to_string(),
        },
        company: Company {
            department: department.to_string(),
        },
    }
}
