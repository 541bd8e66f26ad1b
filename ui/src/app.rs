use chrono::Utc;
use depot_business::{
    FetchEmployeesCommand, FetchEmployeesCompute, LayoutState, Page, RouteState,
};
use depot_states::Time;

use crate::{pages, state::State, widgets};

pub struct DepotApp {
    state: State,
}

impl DepotApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for DepotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance the virtual clock, then apply queued command results and
        // settle derived computes before anything renders.
        self.state.ctx.state_mut::<Time>().set(Utc::now());
        self.state.ctx.sync_computes();

        // Initial data load; re-dispatch is latched while in flight.
        if self
            .state
            .ctx
            .cached::<FetchEmployeesCompute>()
            .is_some_and(|fetched| fetched.is_idle())
            && !self.state.ctx.command_in_flight::<FetchEmployeesCommand>()
        {
            self.state.ctx.dispatch::<FetchEmployeesCommand>();
        }

        let page = self.state.ctx.state::<RouteState>().current.page;

        // Login renders without the admin shell.
        if page == Page::Login {
            egui::CentralPanel::default().show(ctx, |ui| {
                pages::login_page(&mut self.state, ui);
            });
            widgets::toasts_overlay(&mut self.state.ctx, ctx);
            return;
        }

        widgets::top_bar(&mut self.state.ctx, ctx);

        if self.state.ctx.state::<LayoutState>().sidebar_open {
            egui::SidePanel::left("sidebar")
                .resizable(false)
                .exact_width(200.0)
                .show(ctx, |ui| {
                    widgets::sidebar(&mut self.state.ctx, ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match page {
                Page::Dashboard => pages::dashboard_page(&mut self.state, ui),
                Page::Approvals => pages::approvals_page(&mut self.state, ui),
                Page::Products => pages::products_page(&mut self.state, ui),
                Page::Employees => pages::employees_page(&mut self.state, ui),
                Page::Reports => pages::reports_page(&mut self.state, ui),
                Page::Settings => pages::settings_page(&mut self.state, ui),
                Page::Login => unreachable!("login renders without the shell"),
            });
        });

        widgets::toasts_overlay(&mut self.state.ctx, ctx);
    }
}
