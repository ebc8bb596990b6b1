//! Aggregation Module
//!
//! Groups users by department and reduces each group to a summary.

mod grouping;
mod reducers;


use tracing::debug;

use crate::models::{DepartmentSummary, GroupedData, User};

// Re-export public functions
pub use grouping::{department_key, partition};
pub use reducers::{address_map, age_range, count_genders, hair_histogram};

// == Aggregate ==
/// Builds one summary per department present in `users`.
///
/// Users are partitioned in a single pass, then each partition is run
/// through the four reducers. Empty input yields an empty map.
pub fn aggregate(users: &[User]) -> GroupedData {
    let partitions = partition(users);
    debug!(
        "Partitioned {} users into {} departments",
        users.len(),
        partitions.len()
    );

    partitions
        .into_iter()
        .map(|(department, members)| (department.to_string(), summarize(&members)))
        .collect()
}

// == Summarize ==
/// Reduces the users of one department to its summary.
pub fn summarize(members: &[&User]) -> DepartmentSummary {
    DepartmentSummary::new(
        count_genders(members.iter().copied()),
        age_range(members.iter().copied()),
        hair_histogram(members.iter().copied()),
        address_map(members.iter().copied()),
    )
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::sample_user;

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_aggregate_groups_by_department() {
        let users = vec![
            sample_user("Engineering", "male", 30, "brown", "John", "Doe", "12345"),
            sample_user("Engineering", "female", 25, "blonde", "Jane", "Smith", "67890"),
            sample_user("Sales", "male", 45, "brown", "Bob", "Wilson", "11111"),
        ];

        let result = aggregate(&users);

        assert_eq!(result.len(), 2);

        let engineering = &result["Engineering"];
        assert_eq!(engineering.male, 1);
        assert_eq!(engineering.female, 1);
        assert_eq!(engineering.age_range, "25-30");
        assert_eq!(engineering.hair.len(), 2);
        assert_eq!(engineering.address_user["JohnDoe"], "12345");
        assert_eq!(engineering.address_user["JaneSmith"], "67890");

        let sales = &result["Sales"];
        assert_eq!(sales.male, 1);
        assert_eq!(sales.female, 0);
        assert_eq!(sales.age_range, "45-45");
        assert_eq!(sales.hair["brown"], 1);
        assert_eq!(sales.address_user["BobWilson"], "11111");
    }

    #[test]
    fn test_aggregate_does_not_mutate_input() {
        let users = vec![sample_user("Sales", "male", 45, "brown", "Bob", "Wilson", "11111")];
        let before = users.clone();
        let _ = aggregate(&users);
        assert_eq!(users, before);
    }

    #[test]
    fn test_summarize_empty_partition() {
        let summary = summarize(&[]);
        assert_eq!(summary.male + summary.female, 0);
        assert_eq!(summary.age_range, "");
        assert!(summary.hair.is_empty());
        assert!(summary.address_user.is_empty());
    }
}
