//! Top bar: sidebar toggle, org name, avatar initials and env/version label.

use depot_business::{AppConfig, LayoutState};
use depot_states::StateCtx;
use egui::{Align, Color32, Layout, RichText, Sense, Stroke, Ui, vec2};

const AVATAR_RADIUS: f32 = 12.0;

pub fn top_bar(state_ctx: &mut StateCtx, ctx: &egui::Context) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .button("☰")
                .on_hover_text("Toggle sidebar")
                .clicked()
            {
                state_ctx.update::<LayoutState>(|layout| layout.toggle_sidebar());
            }

            let config = state_ctx.state::<AppConfig>();
            ui.label(RichText::new(&config.org_name).strong());

            let initials = config.operator_initials.clone();
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                avatar(ui, &initials);
                super::env_version(ui);
            });
        });
    });
}

fn avatar(ui: &mut Ui, initials: &str) {
    let (rect, response) =
        ui.allocate_exact_size(vec2(AVATAR_RADIUS * 2.0, AVATAR_RADIUS * 2.0), Sense::hover());
    let center = rect.center();
    ui.painter().circle(
        center,
        AVATAR_RADIUS,
        ui.visuals().faint_bg_color,
        Stroke::new(1.0, Color32::GRAY),
    );
    ui.painter().text(
        center,
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(10.0),
        ui.visuals().text_color(),
    );
    response.on_hover_text("Signed in operator");
}
