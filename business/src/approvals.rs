//! Approval requests and the approvals page state. Decisions only flip local
//! state; nothing is persisted.

use std::any::Any;

use depot_states::{State, state_assign_impl};
use ustr::Ustr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approval {
    pub id: Ustr,
    pub title: String,
    pub description: String,
    pub requester: String,
    pub status: ApprovalStatus,
}

pub fn mock_approvals() -> Vec<Approval> {
    let raw: [(&str, &str, &str, &str); 5] = [
        ("apr-1", "Delivery Request #DR-2025-001", "Request for 50 syringes, due tomorrow", "Pharmacy"),
        ("apr-2", "Delivery Request #DR-2025-004", "Request for ventilator parts, urgent", "Laboratory"),
        ("apr-3", "Delivery Request #DR-2025-005", "Request for pediatric medications", "Hemodialysis"),
        ("apr-4", "Delivery Order #DO-2025-003", "No receipt generated yet (Margin: 25%)", "Radiology"),
        ("apr-5", "Delivery Request #DR-2025-007", "Request for imaging supplies", "PPP Office"),
    ];

    raw.into_iter()
        .map(|(id, title, description, requester)| Approval {
            id: Ustr::from(id),
            title: title.to_owned(),
            description: description.to_owned(),
            requester: requester.to_owned(),
            status: ApprovalStatus::Pending,
        })
        .collect()
}

#[derive(Debug)]
pub struct ApprovalsState {
    pub items: Vec<Approval>,
}

impl Default for ApprovalsState {
    fn default() -> Self {
        Self {
            items: mock_approvals(),
        }
    }
}

impl ApprovalsState {
    pub fn approve(&mut self, id: Ustr) {
        self.decide(id, ApprovalStatus::Approved);
    }

    pub fn reject(&mut self, id: Ustr) {
        self.decide(id, ApprovalStatus::Rejected);
    }

    fn decide(&mut self, id: Ustr, status: ApprovalStatus) {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => item.status = status,
            None => log::warn!("approvals: unknown id {id}"),
        }
    }

    pub fn pending_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.status == ApprovalStatus::Pending)
            .count()
    }
}

impl State for ApprovalsState {
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
    fn decisions_flip_status() {
        let mut state = ApprovalsState::default();
        let first = state.items[0].id;
        let second = state.items[1].id;
        let initial_pending = state.pending_count();

        state.approve(first);
        state.reject(second);

        assert_eq!(state.items[0].status, ApprovalStatus::Approved);
        assert_eq!(state.items[1].status, ApprovalStatus::Rejected);
        assert_eq!(state.pending_count(), initial_pending - 2);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut state = ApprovalsState::default();
        let before = state.items.clone();
        state.approve(Ustr::from("apr-999"));
        assert_eq!(state.items, before);
    }
}
