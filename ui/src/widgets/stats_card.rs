//! Stat cards and the skeleton placeholders shown while data loads.

use depot_business::StatCard;
use egui::{Frame, Margin, RichText, Sense, Ui, vec2};

const CARD_MIN_WIDTH: f32 = 180.0;

pub fn stats_card(ui: &mut Ui, card: &StatCard) {
    Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(CARD_MIN_WIDTH);
            ui.horizontal(|ui| {
                ui.label(RichText::new(card.title).small().strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(card.icon);
                });
            });
            ui.label(RichText::new(&card.value).heading().strong());
            ui.weak(RichText::new(&card.description).small());
        });
}

/// Placeholder with the same footprint as a stats card.
pub fn stats_skeleton(ui: &mut Ui) {
    Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(CARD_MIN_WIDTH);
            skeleton_block(ui, vec2(90.0, 10.0));
            ui.add_space(6.0);
            skeleton_block(ui, vec2(48.0, 22.0));
            ui.add_space(6.0);
            skeleton_block(ui, vec2(130.0, 8.0));
        });
}

/// Placeholder rows shown instead of the table while loading.
/// `col_widths` are fractions of the available width.
pub fn table_skeleton(ui: &mut Ui, rows: usize, col_widths: &[f32]) {
    let total = ui.available_width() - 16.0 * col_widths.len() as f32;
    for _ in 0..rows {
        ui.horizontal(|ui| {
            for width in col_widths {
                skeleton_block(ui, vec2(total * width, 14.0));
            }
        });
        ui.add_space(8.0);
    }
}

fn skeleton_block(ui: &mut Ui, size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    ui.painter()
        .rect_filled(rect, 4.0, ui.visuals().faint_bg_color);
}
