//! Sign-in page, rendered without the admin shell. There is no real
//! authentication; signing in just routes into the console.

use depot_business::{AppConfig, LoginState, Page, RouteState};
use egui::{Frame, Margin, RichText, TextEdit, Ui};

use crate::state::State;

pub fn login_page(state: &mut State, ui: &mut Ui) {
    let ctx = &mut state.ctx;
    let org_name = ctx.state::<AppConfig>().org_name.clone();

    let mut sign_in = false;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);

        Frame::group(ui.style())
            .inner_margin(Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(300.0);
                ui.label(RichText::new(org_name).heading().strong());
                ui.weak("Sign in to the operator console");
                ui.add_space(16.0);

                let login = ctx.state_mut::<LoginState>();
                ui.add(
                    TextEdit::singleline(&mut login.username)
                        .hint_text("Username")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(6.0);
                ui.add(
                    TextEdit::singleline(&mut login.password)
                        .hint_text("Password")
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(16.0);

                if ui.button(RichText::new("Sign In").strong()).clicked() {
                    sign_in = true;
                }
            });
    });

    if sign_in {
        log::info!("signed in, routing to the dashboard");
        ctx.update::<RouteState>(|route| route.goto(Page::Dashboard));
    }
}
