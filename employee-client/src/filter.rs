//! Local search over a fetched employee list

use shared::Employee;

/// Records whose name, email or position contains `query`, ignoring case.
///
/// A blank query matches everything. Order of `employees` is preserved.
pub fn filter_employees<'a>(employees: &'a [Employee], query: &str) -> Vec<&'a Employee> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return employees.iter().collect();
    }
    employees
        .iter()
        .filter(|e| e.matches_lowercase(&needle))
        .collect()
}
