//! Toast overlay, anchored top-right.
//!
//! Mirrors `toast.promise` semantics: the create workflow pushes a loading
//! toast and resolves it in place on settlement. Settled toasts expire
//! against the virtual clock; the loading spinner also keeps frames flowing
//! while a mutation is in flight.

use chrono::Duration;
use depot_business::{AppConfig, Toast, ToastKind, ToastsState};
use depot_states::{StateCtx, Time};
use egui::{Align2, Area, Frame, Order, Ui};

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};

pub fn toasts_overlay(state_ctx: &mut StateCtx, ctx: &egui::Context) {
    let now = *state_ctx.state::<Time>().as_ref();
    let ttl = Duration::seconds(state_ctx.state::<AppConfig>().toast_ttl_secs);
    state_ctx.state_mut::<ToastsState>().expire(now, ttl);

    let toasts: Vec<Toast> = state_ctx.state::<ToastsState>().toasts().to_vec();
    if toasts.is_empty() {
        return;
    }

    let mut dismissed = None;
    Area::new(egui::Id::new("toasts_overlay"))
        .anchor(Align2::RIGHT_TOP, egui::vec2(-12.0, 40.0))
        .order(Order::Foreground)
        .show(ctx, |ui| {
            for toast in &toasts {
                if toast_entry(ui, toast) {
                    dismissed = Some(toast.id);
                }
            }
        });

    if let Some(id) = dismissed {
        state_ctx.state_mut::<ToastsState>().dismiss(id);
    }
}

/// Returns true when the toast's dismiss button was clicked.
fn toast_entry(ui: &mut Ui, toast: &Toast) -> bool {
    let mut dismissed = false;
    Frame::popup(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            match toast.kind {
                ToastKind::Loading => {
                    ui.spinner();
                }
                ToastKind::Success => {
                    ui.colored_label(COLOR_GREEN, "✔");
                }
                ToastKind::Error => {
                    ui.colored_label(COLOR_RED, "✖");
                }
                ToastKind::Info => {
                    ui.colored_label(COLOR_AMBER, "ℹ");
                }
            }
            ui.label(&toast.message);
            if ui.small_button("✖").clicked() {
                dismissed = true;
            }
        });
    });
    ui.add_space(4.0);
    dismissed
}
