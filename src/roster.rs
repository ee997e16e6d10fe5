//! The fixed team roster.
//!
//! The roster is loaded once at startup and never mutated. It provides
//! id lookup for validation and the ordered list served by `/employees`.

use std::collections::HashMap;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Employee, Role};

/// The standard team, in display order: (id, name, short name, role, color).
const STANDARD_TEAM: [(&str, &str, &str, Role, &str); 12] = [
    ("ayca_cisem", "AYÇA ÇİSEM ÇOBAN", "AYÇA Ç.", Role::TeamLead, "#E91E63"),
    ("enis", "ENİS USLU", "ENİS U.", Role::TeamLead, "#2196F3"),
    ("onur", "ONUR KARAGÜLER", "ONUR K.", Role::TeamLead, "#FF5722"),
    ("busra", "BÜŞRA PARILTI", "BÜŞRA P.", Role::Agent, "#9C27B0"),
    ("sila", "SILA USTA", "SILA U.", Role::Agent, "#00BCD4"),
    ("nergiz", "NERGİZ OZĞAN", "NERGİZ O.", Role::Agent, "#4CAF50"),
    ("aysun", "AYSUN KUL", "AYSUN K.", Role::Agent, "#CDDC39"),
    ("elif", "ELİF ERKAN", "ELİF E.", Role::Agent, "#FF9800"),
    ("ebru", "EBRU FİDAN", "EBRU F.", Role::Agent, "#795548"),
    ("ayca_demir", "AYÇA DEMİR", "AYÇA D.", Role::Agent, "#607D8B"),
    ("kader", "KADER MÜREN", "KADER M.", Role::Agent, "#F44336"),
    ("rabia", "RABİA BATUK", "RABİA B.", Role::Agent, "#673AB7"),
];

/// An immutable, ordered set of employees indexed by id.
///
/// # Example
///
/// ```
/// use leave_tracker::roster::Roster;
///
/// let roster = Roster::standard();
/// assert_eq!(roster.list().len(), 12);
/// assert_eq!(roster.lookup("busra").unwrap().short_name, "BÜŞRA P.");
/// assert!(roster.lookup("nobody").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Roster {
    employees: Vec<Employee>,
    index: HashMap<String, usize>,
}

impl Roster {
    /// Builds a roster from employees in display order.
    ///
    /// Later duplicates of an id are ignored.
    pub fn new(employees: Vec<Employee>) -> Self {
        let mut unique = Vec::with_capacity(employees.len());
        let mut index = HashMap::with_capacity(employees.len());
        for employee in employees {
            if index.contains_key(&employee.id) {
                continue;
            }
            index.insert(employee.id.clone(), unique.len());
            unique.push(employee);
        }
        Self {
            employees: unique,
            index,
        }
    }

    /// Returns the standard twelve-person team.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_TEAM
                .iter()
                .map(|&(id, name, short_name, role, color)| Employee {
                    id: id.to_string(),
                    name: name.to_string(),
                    short_name: short_name.to_string(),
                    role,
                    color: color.to_string(),
                })
                .collect(),
        )
    }

    /// Looks up an employee by id.
    pub fn lookup(&self, employee_id: &str) -> Option<&Employee> {
        self.index.get(employee_id).map(|&i| &self.employees[i])
    }

    /// Looks up an employee, failing with `InvalidEmployee` if absent.
    pub fn require(&self, employee_id: &str) -> TrackerResult<&Employee> {
        self.lookup(employee_id)
            .ok_or_else(|| TrackerError::InvalidEmployee {
                employee_id: employee_id.to_string(),
            })
    }

    /// Returns true if the id belongs to a roster member.
    pub fn contains(&self, employee_id: &str) -> bool {
        self.index.contains_key(employee_id)
    }

    /// All employees in display order.
    pub fn list(&self) -> &[Employee] {
        &self.employees
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::standard()
    }
}
