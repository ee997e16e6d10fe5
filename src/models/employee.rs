//! Employee model and related types.
//!
//! This module defines the Employee struct and Role enum for the
//! members of the team roster.

use serde::{Deserialize, Serialize};

/// The position an employee holds in the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Team lead.
    #[serde(rename = "TL")]
    TeamLead,
    /// Agent.
    Agent,
}

/// A member of the team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable unique key (e.g., "busra").
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Abbreviated display name.
    pub short_name: String,
    /// The employee's role.
    pub role: Role,
    /// Display color tag (e.g., "#9C27B0").
    pub color: String,
}

impl Employee {
    /// Returns true if the employee is a team lead.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_tracker::models::{Employee, Role};
    ///
    /// let lead = Employee {
    ///     id: "enis".to_string(),
    ///     name: "ENİS USLU".to_string(),
    ///     short_name: "ENİS U.".to_string(),
    ///     role: Role::TeamLead,
    ///     color: "#2196F3".to_string(),
    /// };
    /// assert!(lead.is_team_lead());
    /// ```
    pub fn is_team_lead(&self) -> bool {
        self.role == Role::TeamLead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(role: Role) -> Employee {
        Employee {
            id: "busra".to_string(),
            name: "BÜŞRA PARILTI".to_string(),
            short_name: "BÜŞRA P.".to_string(),
            role,
            color: "#9C27B0".to_string(),
        }
    }

    #[test]
    fn test_deserialize_agent() {
        let json = r##"{
            "id": "sila",
            "name": "SILA USTA",
            "short_name": "SILA U.",
            "role": "Agent",
            "color": "#00BCD4"
        }"##;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "sila");
        assert_eq!(employee.role, Role::Agent);
        assert_eq!(employee.color, "#00BCD4");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::TeamLead).unwrap(), "\"TL\"");
        assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), "\"Agent\"");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result: Result<Role, _> = serde_json::from_str("\"Manager\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_team_lead() {
        assert!(create_test_employee(Role::TeamLead).is_team_lead());
        assert!(!create_test_employee(Role::Agent).is_team_lead());
    }
}
