//! Employee records owned by the upstream directory.
//!
//! The facade never mutates an [`Employee`]; it only reads what the upstream
//! directory returns and forwards validated [`NewEmployee`] payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Youngest accepted age for a new employee.
pub const MIN_EMPLOYEE_AGE: u32 = 16;
/// Oldest accepted age for a new employee.
pub const MAX_EMPLOYEE_AGE: u32 = 75;
/// Largest salary the upstream directory stores (a signed 32-bit integer).
pub const MAX_EMPLOYEE_SALARY: u32 = 2_147_483_647;

/// Opaque upstream-assigned employee identifier.
///
/// # Examples
/// ```
/// use employee_facade::domain::EmployeeId;
///
/// let id = EmployeeId::new("4a3a170b-22cd-4ac2-aad1-9bb5b34a1507").expect("valid id");
/// assert_eq!(id.as_ref(), "4a3a170b-22cd-4ac2-aad1-9bb5b34a1507");
/// assert!(EmployeeId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(String);

/// Validation errors returned by [`EmployeeId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeIdValidationError {
    /// Identifier was empty or whitespace.
    #[error("employee id must not be empty")]
    Empty,
}

impl EmployeeId {
    /// Validate and wrap an identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, EmployeeIdValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EmployeeIdValidationError::Empty);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = EmployeeIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmployeeId> for String {
    fn from(value: EmployeeId) -> Self {
        value.0
    }
}

/// Read-only view of an upstream employee record.
///
/// Serialises with the public field names `{id, name, salary, age, title, email}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Upstream-assigned identifier.
    pub id: EmployeeId,
    /// Display name; not unique across the directory.
    pub name: String,
    /// Annual salary.
    pub salary: u32,
    /// Age in years.
    pub age: u32,
    /// Job title.
    pub title: String,
    /// Contact email issued by the upstream directory.
    pub email: String,
}

/// Unvalidated creation payload as received from a caller.
///
/// Numeric fields are wide and signed so that out-of-range values surface as
/// field violations instead of decode failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEmployeeDraft {
    /// Requested name.
    pub name: Option<String>,
    /// Requested salary.
    pub salary: Option<i64>,
    /// Requested age.
    pub age: Option<i64>,
    /// Requested title.
    pub title: Option<String>,
}

/// One violated constraint on a [`NewEmployeeDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NewEmployeeViolation {
    /// Name missing or blank.
    #[error("Name must be provided")]
    MissingName,
    /// Salary missing.
    #[error("Salary must be provided")]
    MissingSalary,
    /// Salary zero or negative.
    #[error("Salary must be positive")]
    NonPositiveSalary,
    /// Salary does not fit the upstream integer range.
    #[error("Salary must not exceed {max}")]
    SalaryTooLarge {
        /// Largest accepted salary.
        max: u32,
    },
    /// Age missing.
    #[error("Age must be provided")]
    MissingAge,
    /// Age under the minimum.
    #[error("Minimum age is {min}")]
    AgeBelowMinimum {
        /// Youngest accepted age.
        min: u32,
    },
    /// Age over the maximum.
    #[error("Maximum age is {max}")]
    AgeAboveMaximum {
        /// Oldest accepted age.
        max: u32,
    },
    /// Title missing or blank.
    #[error("Title must be provided")]
    MissingTitle,
}

impl NewEmployeeViolation {
    /// Public payload field the violation refers to.
    pub fn field(self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::MissingSalary | Self::NonPositiveSalary | Self::SalaryTooLarge { .. } => "salary",
            Self::MissingAge | Self::AgeBelowMinimum { .. } | Self::AgeAboveMaximum { .. } => "age",
            Self::MissingTitle => "title",
        }
    }
}

/// Every violation found in a rejected draft, in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("new employee payload has {} violation(s)", .0.len())]
pub struct NewEmployeeValidationErrors(Vec<NewEmployeeViolation>);

impl NewEmployeeValidationErrors {
    /// Borrow the individual violations.
    pub fn violations(&self) -> &[NewEmployeeViolation] {
        &self.0
    }
}

/// Creation request that satisfied every field constraint.
///
/// # Examples
/// ```
/// use employee_facade::domain::{NewEmployee, NewEmployeeDraft};
///
/// let draft = NewEmployeeDraft {
///     name: Some("Richard Test".to_owned()),
///     salary: Some(12_345),
///     age: Some(32),
///     title: Some("Dr".to_owned()),
/// };
/// let employee = NewEmployee::try_from(draft).expect("valid draft");
/// assert_eq!(employee.salary(), 12_345);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    name: String,
    salary: u32,
    age: u32,
    title: String,
}

impl NewEmployee {
    /// Requested name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Requested salary.
    pub fn salary(&self) -> u32 {
        self.salary
    }

    /// Requested age.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Requested title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
}

fn required_text(
    value: Option<String>,
    violation: NewEmployeeViolation,
    violations: &mut Vec<NewEmployeeViolation>,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            violations.push(violation);
            None
        }
    }
}

fn validate_salary(
    salary: Option<i64>,
    violations: &mut Vec<NewEmployeeViolation>,
) -> Option<u32> {
    let Some(salary) = salary else {
        violations.push(NewEmployeeViolation::MissingSalary);
        return None;
    };
    if salary <= 0 {
        violations.push(NewEmployeeViolation::NonPositiveSalary);
        return None;
    }
    match u32::try_from(salary) {
        Ok(value) if value <= MAX_EMPLOYEE_SALARY => Some(value),
        _ => {
            violations.push(NewEmployeeViolation::SalaryTooLarge {
                max: MAX_EMPLOYEE_SALARY,
            });
            None
        }
    }
}

fn validate_age(age: Option<i64>, violations: &mut Vec<NewEmployeeViolation>) -> Option<u32> {
    let Some(age) = age else {
        violations.push(NewEmployeeViolation::MissingAge);
        return None;
    };
    if age < i64::from(MIN_EMPLOYEE_AGE) {
        violations.push(NewEmployeeViolation::AgeBelowMinimum {
            min: MIN_EMPLOYEE_AGE,
        });
        return None;
    }
    if age > i64::from(MAX_EMPLOYEE_AGE) {
        violations.push(NewEmployeeViolation::AgeAboveMaximum {
            max: MAX_EMPLOYEE_AGE,
        });
        return None;
    }
    u32::try_from(age).ok()
}

impl TryFrom<NewEmployeeDraft> for NewEmployee {
    type Error = NewEmployeeValidationErrors;

    fn try_from(draft: NewEmployeeDraft) -> Result<Self, Self::Error> {
        let NewEmployeeDraft {
            name,
            salary,
            age,
            title,
        } = draft;
        let mut violations = Vec::new();

        let name = required_text(name, NewEmployeeViolation::MissingName, &mut violations);
        let salary = validate_salary(salary, &mut violations);
        let age = validate_age(age, &mut violations);
        let title = required_text(title, NewEmployeeViolation::MissingTitle, &mut violations);

        match (name, salary, age, title) {
            (Some(name), Some(salary), Some(age), Some(title)) if violations.is_empty() => {
                Ok(Self {
                    name,
                    salary,
                    age,
                    title,
                })
            }
            _ => Err(NewEmployeeValidationErrors(violations)),
        }
    }
}
