//! Department summary models
//!
//! Defines the per-department statistics produced by the aggregation.

use std::collections::BTreeMap;

use serde::Serialize;

/// Mapping from department name to its summary.
///
/// One entry per department observed in the input, none for any other.
pub type GroupedData = BTreeMap<String, DepartmentSummary>;

/// Counts of users whose gender is exactly "male" or "female".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenderCount {
    pub male: u64,
    pub female: u64,
}

/// Summary statistics for the users of one department.
///
/// Serializes with the field names `male`, `female`, `ageRange`, `hair`
/// and `addressUser`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub male: u64,
    pub female: u64,
    /// "min-max", or empty when no users were summarized
    pub age_range: String,
    /// Hair color to number of users with that color
    pub hair: BTreeMap<String, u64>,
    /// "FirstLast" to postal code
    pub address_user: BTreeMap<String, String>,
}

impl DepartmentSummary {
    /// Assembles a summary from the individual reducer outputs.
    pub fn new(
        genders: GenderCount,
        age_range: String,
        hair: BTreeMap<String, u64>,
        address_user: BTreeMap<String, String>,
    ) -> Self {
        Self {
            male: genders.male,
            female: genders.female,
            age_range,
            hair,
            address_user,
        }
    }
}
