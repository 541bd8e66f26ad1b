//! Approvals page: decide pending requests. Decisions only flip local
//! state.

use depot_business::{ApprovalStatus, ApprovalsState};
use egui::{Frame, Margin, RichText, Ui};
use ustr::Ustr;

use crate::state::State;
use crate::utils::colors::approval_status_color;
use crate::widgets::status_badge;

pub fn approvals_page(state: &mut State, ui: &mut Ui) {
    let ctx = &mut state.ctx;

    let pending = ctx.state::<ApprovalsState>().pending_count();
    ui.heading(format!("Approvals ({pending})"));
    ui.weak("Review and decide pending delivery requests.");
    ui.add_space(12.0);

    if pending == 0 {
        ui.label("✔ All caught up, no pending approvals.");
        ui.add_space(8.0);
    }

    let mut decision: Option<(Ustr, bool)> = None;

    let approvals = ctx.state::<ApprovalsState>();
    for item in &approvals.items {
        Frame::group(ui.style())
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&item.title).strong());
                        ui.weak(format!("{} - {}", item.requester, item.description));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        match item.status {
                            ApprovalStatus::Pending => {
                                if ui.button("Reject").clicked() {
                                    decision = Some((item.id, false));
                                }
                                if ui.button("Approve").clicked() {
                                    decision = Some((item.id, true));
                                }
                            }
                            status => {
                                status_badge(ui, status.label(), approval_status_color(status));
                            }
                        }
                    });
                });
            });
        ui.add_space(6.0);
    }

    if let Some((id, approved)) = decision {
        let approvals = ctx.state_mut::<ApprovalsState>();
        if approved {
            approvals.approve(id);
        } else {
            approvals.reject(id);
        }
    }
}
