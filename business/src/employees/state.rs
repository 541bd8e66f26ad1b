//! Page state for the employees management template.
//!
//! Lives in business so UI code stays "dumb": the page reads this state,
//! renders, and dispatches commands.

use std::any::Any;

use depot_states::{State, state_assign_impl};

use crate::TableQuery;
use crate::employees::{CreateEmployeeResult, NewEmployee};

/// Create-form inputs. Passed through unchecked on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
}

impl EmployeeForm {
    pub fn to_request(&self) -> NewEmployee {
        NewEmployee {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            department: self.department.clone(),
        }
    }
}

/// Phase of the create workflow as last observed by the page; comparing
/// against the live compute detects settlement exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CreatePhase {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl CreatePhase {
    pub fn of(result: &CreateEmployeeResult) -> Self {
        match result {
            CreateEmployeeResult::Idle => Self::Idle,
            CreateEmployeeResult::Pending => Self::Pending,
            CreateEmployeeResult::Success(_) => Self::Success,
            CreateEmployeeResult::Error(_) => Self::Error,
        }
    }
}

#[derive(Debug, Default)]
pub struct EmployeesState {
    pub query: TableQuery,
    pub form: EmployeeForm,
    /// Loading toast for the in-flight mutation, resolved on settlement.
    pub pending_toast: Option<u64>,
    last_phase: CreatePhase,
}

impl EmployeesState {
    /// Record the phase seen this frame; returns it when it changed since
    /// the last frame, which is the page's edge trigger for toasts and
    /// route updates.
    pub fn phase_transition(&mut self, current: CreatePhase) -> Option<CreatePhase> {
        if current == self.last_phase {
            return None;
        }
        self.last_phase = current;
        Some(current)
    }

    pub fn reset_form(&mut self) {
        self.form = EmployeeForm::default();
    }
}

impl State for EmployeesState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_fires_once_per_change() {
        let mut state = EmployeesState::default();

        assert_eq!(state.phase_transition(CreatePhase::Idle), None);
        assert_eq!(
            state.phase_transition(CreatePhase::Pending),
            Some(CreatePhase::Pending)
        );
        assert_eq!(state.phase_transition(CreatePhase::Pending), None);
        assert_eq!(
            state.phase_transition(CreatePhase::Success),
            Some(CreatePhase::Success)
        );
    }

    #[test]
    fn form_maps_to_request() {
        let mut state = EmployeesState::default();
        state.form.name = "Rosa Diaz".to_owned();
        state.form.department = "Logistics".to_owned();

        let request = state.form.to_request();
        assert_eq!(request.name, "Rosa Diaz");
        assert_eq!(request.department, "Logistics");
        assert_eq!(request.email, "");
    }
}
