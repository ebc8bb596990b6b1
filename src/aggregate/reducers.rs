//! Reducers Module
//!
//! Pure functions that each derive one summary field from the users of a
//! single department.

use std::collections::BTreeMap;

use crate::models::{GenderCount, User};

const MALE: &str = "male";
const FEMALE: &str = "female";

// == Gender Counter ==
/// Counts users whose gender is exactly "male" or "female".
///
/// Any other value lands in neither bucket, so `male + female` may be less
/// than the number of users.
pub fn count_genders<'a, I>(users: I) -> GenderCount
where
    I: IntoIterator<Item = &'a User>,
{
    users
        .into_iter()
        .fold(GenderCount::default(), |mut count, user| {
            match user.gender.as_str() {
                MALE => count.male += 1,
                FEMALE => count.female += 1,
                _ => {}
            }
            count
        })
}

// == Age Range ==
/// Formats the youngest and oldest age as "min-max".
///
/// Returns an empty string when there are no users.
pub fn age_range<'a, I>(users: I) -> String
where
    I: IntoIterator<Item = &'a User>,
{
    let bounds = users
        .into_iter()
        .map(|user| user.age)
        .fold(None, |bounds: Option<(i64, i64)>, age| match bounds {
            Some((min, max)) => Some((min.min(age), max.max(age))),
            None => Some((age, age)),
        });

    match bounds {
        Some((min, max)) => format!("{}-{}", min, max),
        None => String::new(),
    }
}

// == Hair Histogram ==
/// Counts users per hair color.
pub fn hair_histogram<'a, I>(users: I) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = &'a User>,
{
    let mut histogram = BTreeMap::new();
    for user in users {
        *histogram.entry(user.hair.color.clone()).or_insert(0) += 1;
    }
    histogram
}

// == Address Map ==
/// Maps "FirstLast" to postal code.
///
/// Users sharing a full name collapse into one entry; the last one seen wins.
pub fn address_map<'a, I>(users: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a User>,
{
    users
        .into_iter()
        .map(|user| (user.full_name_key(), user.address.postal_code.clone()))
        .collect()
}
