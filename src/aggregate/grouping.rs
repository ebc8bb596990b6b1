//! Grouping Module
//!
//! Derives the department key of a user and partitions users by it.

use std::collections::BTreeMap;

use crate::models::User;

// == Department Key ==
/// Returns the grouping key for a user: its company department.
///
/// No validation is applied; an empty department is a key like any other.
pub fn department_key(user: &User) -> &str {
    &user.company.department
}

// == Partition ==
/// Splits users into per-department partitions in a single pass.
///
/// Users keep their input order inside each partition, which the address
/// map relies on for last-write-wins.
pub fn partition(users: &[User]) -> BTreeMap<&str, Vec<&User>> {
    let mut partitions: BTreeMap<&str, Vec<&User>> = BTreeMap::new();
    for user in users {
        partitions.entry(department_key(user)).or_default().push(user);
    }
    partitions
}
