//! Derived stats over the fetched employee list.

use std::any::{Any, TypeId};
use std::collections::BTreeSet;

use depot_states::{Compute, ComputeDeps, Dep, Updater, assign_impl};

use crate::employees::{Employee, EmployeeStatus, FetchEmployeesCompute};
use crate::stats::{StatCard, StatConfig};

/// Stats row of the employees management page.
pub const EMPLOYEE_STATS: &[StatConfig<Employee>] = &[
    StatConfig {
        title: "Total Employees",
        icon: "👥",
        description: "All records on file",
        derive: |employees| employees.len() as u64,
    },
    StatConfig {
        title: "Active",
        icon: "✔",
        description: "Currently on duty",
        derive: |employees| {
            employees
                .iter()
                .filter(|e| e.status == EmployeeStatus::Active)
                .count() as u64
        },
    },
    StatConfig {
        title: "Departments",
        icon: "🏢",
        description: "Distinct departments",
        derive: |employees| {
            employees
                .iter()
                .map(|e| e.department.as_str())
                .collect::<BTreeSet<_>>()
                .len() as u64
        },
    },
];

/// Derived compute: re-applies [`EMPLOYEE_STATS`] whenever the fetched list
/// changes. A missing collection counts as empty.
#[derive(Debug, Clone, Default)]
pub struct EmployeeStatsCompute {
    pub cards: Vec<StatCard>,
}

impl Compute for EmployeeStatsCompute {
    fn deps(&self) -> ComputeDeps {
        const STATES: [TypeId; 0] = [];
        const COMPUTES: [TypeId; 1] = [TypeId::of::<FetchEmployeesCompute>()];
        (&STATES, &COMPUTES)
    }

    fn compute(&self, deps: Dep, updater: Updater) {
        let fetched = deps.compute::<FetchEmployeesCompute>();
        let employees = fetched.employees().unwrap_or(&[]);
        updater.set(Self {
            cards: EMPLOYEE_STATS
                .iter()
                .map(|config| config.card(employees))
                .collect(),
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
