use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    OnLeave,
    Inactive,
}

impl EmployeeStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Ustr,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub status: EmployeeStatus,
    pub joined: NaiveDate,
}

/// Payload of the create mutation. Passed through unchecked from the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
}

/// Hard-coded directory contents used to seed the mock service.
pub fn mock_employees() -> Vec<Employee> {
    let raw: [(&str, &str, &str, &str, &str, EmployeeStatus, (i32, u32, u32)); 8] = [
        ("emp-1", "Amelia Santos", "amelia.santos@depot.test", "Warehouse Manager", "Operations", EmployeeStatus::Active, (2019, 3, 11)),
        ("emp-2", "Ben Okafor", "ben.okafor@depot.test", "Inventory Clerk", "Operations", EmployeeStatus::Active, (2021, 7, 2)),
        ("emp-3", "Carmen Reyes", "carmen.reyes@depot.test", "Dispatcher", "Logistics", EmployeeStatus::OnLeave, (2020, 1, 20)),
        ("emp-4", "Diego Marchetti", "diego.marchetti@depot.test", "Driver", "Logistics", EmployeeStatus::Active, (2022, 9, 5)),
        ("emp-5", "Ella Novak", "ella.novak@depot.test", "Procurement Lead", "Purchasing", EmployeeStatus::Active, (2018, 11, 30)),
        ("emp-6", "Farid Haddad", "farid.haddad@depot.test", "Accountant", "Finance", EmployeeStatus::Inactive, (2017, 5, 16)),
        ("emp-7", "Grace Lin", "grace.lin@depot.test", "Receiving Clerk", "Operations", EmployeeStatus::Active, (2023, 2, 13)),
        ("emp-8", "Hugo Lindqvist", "hugo.lindqvist@depot.test", "Safety Officer", "Operations", EmployeeStatus::OnLeave, (2021, 10, 8)),
    ];

    raw.into_iter()
        .filter_map(
            |(id, name, email, role, department, status, (year, month, day))| {
                Some(Employee {
                    id: Ustr::from(id),
                    name: name.to_owned(),
                    email: email.to_owned(),
                    role: role.to_owned(),
                    department: department.to_owned(),
                    status,
                    joined: NaiveDate::from_ymd_opt(year, month, day)?,
                })
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_data_is_complete() {
        let employees = mock_employees();
        assert_eq!(employees.len(), 8, "every mock date literal must be valid");
        assert!(employees.iter().any(|e| e.status == EmployeeStatus::OnLeave));
        assert!(employees.iter().any(|e| e.status == EmployeeStatus::Inactive));
    }

    #[test]
    fn status_labels_are_human() {
        assert_eq!(EmployeeStatus::OnLeave.label(), "On Leave");
    }
}
