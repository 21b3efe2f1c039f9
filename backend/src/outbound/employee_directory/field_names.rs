//! Wire field-name table for upstream employee records.
//!
//! The upstream directory prefixes every employee field with `employee_`
//! except the identifier. Requests to the directory use plain names, so only
//! response decoding (and test stubs rendering responses) consults this table.

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::Employee;

/// Logical employee field known to the wire table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    /// Upstream-assigned identifier.
    Id,
    /// Display name.
    Name,
    /// Annual salary.
    Salary,
    /// Age in years.
    Age,
    /// Job title.
    Title,
    /// Contact email.
    Email,
}

struct FieldRow {
    field: EmployeeField,
    logical: &'static str,
    wire: &'static str,
}

/// One row per employee field, in [`EmployeeField`] declaration order.
const FIELD_TABLE: [FieldRow; 6] = [
    FieldRow { field: EmployeeField::Id, logical: "id", wire: "id" },
    FieldRow { field: EmployeeField::Name, logical: "name", wire: "employee_name" },
    FieldRow { field: EmployeeField::Salary, logical: "salary", wire: "employee_salary" },
    FieldRow { field: EmployeeField::Age, logical: "age", wire: "employee_age" },
    FieldRow { field: EmployeeField::Title, logical: "title", wire: "employee_title" },
    FieldRow { field: EmployeeField::Email, logical: "email", wire: "employee_email" },
];

impl EmployeeField {
    /// Every field in table order.
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Name,
        Self::Salary,
        Self::Age,
        Self::Title,
        Self::Email,
    ];

    fn row(self) -> &'static FieldRow {
        &FIELD_TABLE[self as usize]
    }

    /// Name used by the public API and the domain type.
    ///
    /// # Examples
    /// ```
    /// use employee_facade::outbound::employee_directory::EmployeeField;
    ///
    /// assert_eq!(EmployeeField::Salary.logical_name(), "salary");
    /// ```
    pub fn logical_name(self) -> &'static str {
        self.row().logical
    }

    /// Name carried on the upstream wire.
    ///
    /// # Examples
    /// ```
    /// use employee_facade::outbound::employee_directory::EmployeeField;
    ///
    /// assert_eq!(EmployeeField::Salary.wire_name(), "employee_salary");
    /// assert_eq!(EmployeeField::Id.wire_name(), "id");
    /// ```
    pub fn wire_name(self) -> &'static str {
        self.row().wire
    }

    /// Look up a field by its wire name.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        FIELD_TABLE
            .iter()
            .find(|row| row.wire == name)
            .map(|row| row.field)
    }

    /// Look up a field by its logical name.
    pub fn from_logical_name(name: &str) -> Option<Self> {
        FIELD_TABLE
            .iter()
            .find(|row| row.logical == name)
            .map(|row| row.field)
    }
}

/// Rename wire keys to logical keys. Keys outside the table are dropped.
pub(super) fn wire_to_logical(object: Map<String, Value>) -> Map<String, Value> {
    let received = object.len();
    let renamed: Map<String, Value> = object
        .into_iter()
        .filter_map(|(key, value)| {
            EmployeeField::from_wire_name(&key)
                .map(|field| (field.logical_name().to_owned(), value))
        })
        .collect();
    debug!(
        received,
        mapped = renamed.len(),
        "translated upstream employee fields"
    );
    renamed
}

/// Rename logical keys to wire keys. Keys outside the table are dropped.
pub(super) fn logical_to_wire(object: Map<String, Value>) -> Map<String, Value> {
    object
        .into_iter()
        .filter_map(|(key, value)| {
            EmployeeField::from_logical_name(&key)
                .map(|field| (field.wire_name().to_owned(), value))
        })
        .collect()
}

/// Render an employee the way the upstream directory sends it.
///
/// # Examples
/// ```
/// use employee_facade::domain::{Employee, EmployeeId};
/// use employee_facade::outbound::employee_directory::employee_to_wire;
///
/// let employee = Employee {
///     id: EmployeeId::new("id-1").expect("valid id"),
///     name: "Tiger Nixon".to_owned(),
///     salary: 320_800,
///     age: 61,
///     title: "Vice Chair Executive Principal of Chief Operations".to_owned(),
///     email: "tnixon@company.com".to_owned(),
/// };
/// let wire = employee_to_wire(&employee);
/// assert_eq!(wire["employee_name"], "Tiger Nixon");
/// assert_eq!(wire["id"], "id-1");
/// ```
pub fn employee_to_wire(employee: &Employee) -> Value {
    let object = Map::from_iter([
        logical_entry(EmployeeField::Id, employee.id.to_string()),
        logical_entry(EmployeeField::Name, employee.name.as_str()),
        logical_entry(EmployeeField::Salary, employee.salary),
        logical_entry(EmployeeField::Age, employee.age),
        logical_entry(EmployeeField::Title, employee.title.as_str()),
        logical_entry(EmployeeField::Email, employee.email.as_str()),
    ]);
    Value::Object(logical_to_wire(object))
}

fn logical_entry(field: EmployeeField, value: impl Into<Value>) -> (String, Value) {
    (field.logical_name().to_owned(), value.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn table_rows_follow_declaration_order() {
        for (row, field) in FIELD_TABLE.iter().zip(EmployeeField::ALL) {
            assert_eq!(row.field, field);
        }
    }

    #[rstest]
    fn table_round_trips_every_field() {
        for field in EmployeeField::ALL {
            assert_eq!(EmployeeField::from_wire_name(field.wire_name()), Some(field));
            assert_eq!(
                EmployeeField::from_logical_name(field.logical_name()),
                Some(field)
            );
        }
    }

    #[rstest]
    fn only_identifier_is_unprefixed() {
        for field in EmployeeField::ALL {
            let prefixed = field.wire_name().starts_with("employee_");
            assert_eq!(prefixed, field != EmployeeField::Id, "{field:?}");
        }
    }

    #[rstest]
    #[case("name")]
    #[case("salary")]
    #[case("employee_id")]
    fn unknown_wire_names_are_rejected(#[case] name: &str) {
        assert_eq!(EmployeeField::from_wire_name(name), None);
    }

    #[rstest]
    fn wire_to_logical_renames_and_drops_unknown_keys() {
        let wire = json!({
            "id": "4a3a170b",
            "employee_name": "Tiger Nixon",
            "employee_salary": 320_800,
            "profile_image": "",
        });
        let Value::Object(object) = wire else {
            panic!("object literal");
        };
        let logical = Value::Object(wire_to_logical(object));
        assert_eq!(
            logical,
            json!({ "id": "4a3a170b", "name": "Tiger Nixon", "salary": 320_800 })
        );
    }

    #[rstest]
    fn logical_to_wire_mirrors_wire_to_logical() {
        let Value::Object(wire) = json!({ "employee_age": 61, "id": "x" }) else {
            panic!("object literal");
        };
        let logical = wire_to_logical(wire.clone());
        assert_eq!(logical_to_wire(logical), wire);
    }
}
