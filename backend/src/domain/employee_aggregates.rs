//! In-memory views over one fetched employee collection.
//!
//! Every function here is pure: it takes the collection a request fetched and
//! never caches it. Upstream order is meaningful and preserved wherever the
//! result is a sub-sequence.

use std::cmp::Reverse;

use super::Employee;

/// Number of names returned by the top-earners view.
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Case-insensitive containment test used by name search.
///
/// # Examples
/// ```
/// use employee_facade::domain::name_matches;
///
/// assert!(name_matches("Richard Test", "TEST"));
/// assert!(name_matches("Richard Test", ""));
/// assert!(!name_matches("Richard Test", "alice"));
/// ```
pub fn name_matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Keep the employees whose name contains `query`, in upstream order.
pub fn search_by_name(employees: Vec<Employee>, query: &str) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|employee| name_matches(&employee.name, query))
        .collect()
}

/// Largest salary in the collection, or `0` when it is empty.
pub fn highest_salary(employees: &[Employee]) -> u32 {
    employees
        .iter()
        .map(|employee| employee.salary)
        .max()
        .unwrap_or(0)
}

/// Names of the `limit` best-paid employees, highest salary first.
///
/// `sort_by_key` is stable, so employees with equal salaries keep their
/// upstream relative order and repeated calls over an unchanged collection
/// agree.
pub fn top_earning_names(mut employees: Vec<Employee>, limit: usize) -> Vec<String> {
    employees.sort_by_key(|employee| Reverse(employee.salary));
    employees
        .into_iter()
        .take(limit)
        .map(|employee| employee.name)
        .collect()
}

/// How many employees currently carry `name`, ignoring case.
pub fn count_sharing_name(employees: &[Employee], name: &str) -> usize {
    let name = name.to_lowercase();
    employees
        .iter()
        .filter(|employee| employee.name.to_lowercase() == name)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmployeeId;
    use rstest::{fixture, rstest};

    fn employee(index: usize, name: &str, salary: u32) -> Employee {
        Employee {
            id: EmployeeId::new(format!("id-{index}")).expect("valid id"),
            name: name.to_owned(),
            salary,
            age: 30,
            title: "Engineer".to_owned(),
            email: format!("employee{index}@company.com"),
        }
    }

    #[fixture]
    fn fifteen_ranked() -> Vec<Employee> {
        (0..15)
            .map(|index| {
                let salary = 190 + u32::try_from(index).expect("small index");
                employee(index, &format!("Name {index}"), salary)
            })
            .collect()
    }

    fn names(employees: &[Employee]) -> Vec<&str> {
        employees.iter().map(|e| e.name.as_str()).collect()
    }

    #[rstest]
    fn top_earning_names_returns_ten_descending(fifteen_ranked: Vec<Employee>) {
        let names = top_earning_names(fifteen_ranked, TOP_EARNERS_LIMIT);
        let expected: Vec<String> = (5..15).rev().map(|i| format!("Name {i}")).collect();
        assert_eq!(names, expected);
    }

    #[rstest]
    #[case(3, 3)]
    #[case(10, 5)]
    #[case(0, 0)]
    fn top_earning_names_length_is_min_of_limit_and_size(
        #[case] limit: usize,
        #[case] expected: usize,
    ) {
        let employees: Vec<Employee> = (0..5).map(|i| employee(i, "n", 100)).collect();
        assert_eq!(top_earning_names(employees, limit).len(), expected);
    }

    #[rstest]
    fn top_earning_names_keeps_upstream_order_for_ties() {
        let employees = vec![
            employee(0, "first", 100),
            employee(1, "rich", 500),
            employee(2, "second", 100),
            employee(3, "third", 100),
        ];
        assert_eq!(
            top_earning_names(employees, 10),
            vec!["rich", "first", "second", "third"]
        );
    }

    #[rstest]
    fn highest_salary_defaults_to_zero_for_empty_collection() {
        assert_eq!(highest_salary(&[]), 0);
    }

    #[rstest]
    fn highest_salary_returns_maximum(fifteen_ranked: Vec<Employee>) {
        assert_eq!(highest_salary(&fifteen_ranked), 204);
    }

    #[rstest]
    fn search_matches_case_insensitively_in_upstream_order() {
        let employees = vec![
            employee(0, "Richard Test", 1),
            employee(1, "Alice", 2),
            employee(2, "TESTER", 3),
        ];
        let matched = search_by_name(employees, "tEsT");
        assert_eq!(names(&matched), vec!["Richard Test", "TESTER"]);
    }

    #[rstest]
    fn empty_query_matches_everything(fifteen_ranked: Vec<Employee>) {
        let expected = fifteen_ranked.clone();
        assert_eq!(search_by_name(fifteen_ranked, ""), expected);
    }

    #[rstest]
    #[case("ÉMILE", "émile", true)]
    #[case("Richard", "chard", true)]
    #[case("Richard", "richards", false)]
    fn name_matches_handles_unicode_case(
        #[case] name: &str,
        #[case] query: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(name_matches(name, query), expected);
    }

    #[rstest]
    fn count_sharing_name_ignores_case() {
        let employees = vec![
            employee(0, "Richard Test", 1),
            employee(1, "richard test", 2),
            employee(2, "Richard Tester", 3),
        ];
        assert_eq!(count_sharing_name(&employees, "RICHARD TEST"), 2);
        assert_eq!(count_sharing_name(&employees, "Nobody"), 0);
    }
}
