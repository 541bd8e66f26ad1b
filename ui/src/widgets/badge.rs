use egui::{Color32, Frame, Margin, Response, Ui};

/// Small status pill: tinted background, colored text.
pub fn status_badge(ui: &mut Ui, text: &str, color: Color32) -> Response {
    Frame::NONE
        .fill(color.gamma_multiply(0.15))
        .corner_radius(8.0)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| ui.colored_label(color, text))
        .response
}
