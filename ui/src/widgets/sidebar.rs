//! Sidebar navigation: brand header, nav list with active highlight, Sign
//! Out pinned at the bottom.

use depot_business::{AppConfig, LoginState, NAV_ITEMS, Page, RouteState};
use depot_states::StateCtx;
use egui::{Align, Layout, RichText, Ui};

pub fn sidebar(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let org_name = state_ctx.state::<AppConfig>().org_name.clone();
    let current_page = state_ctx.state::<RouteState>().current.page;

    let mut nav_target: Option<Page> = None;

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("▣").heading());
        ui.label(RichText::new(org_name).strong());
    });
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(4.0);

    for item in NAV_ITEMS {
        let selected = current_page == item.page;
        if ui
            .selectable_label(selected, format!("{}  {}", item.icon, item.label))
            .clicked()
        {
            nav_target = Some(item.page);
        }
    }

    ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
        ui.add_space(8.0);
        if ui.button("🚪  Sign Out").clicked() {
            nav_target = Some(Page::Login);
        }
    });

    if let Some(page) = nav_target {
        if page == Page::Login {
            state_ctx.state_mut::<LoginState>().clear();
        }
        state_ctx.update::<RouteState>(|route| route.goto(page));
    }
}

#[cfg(test)]
mod sidebar_tests {
    use super::*;
    use depot_business::LayoutState;
    use egui_kittest::Harness;
    use kittest::Queryable;

    fn test_ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(AppConfig::default());
        ctx.add_state(RouteState::default());
        ctx.add_state(LayoutState::default());
        ctx.add_state(LoginState::default());
        ctx.state_mut::<RouteState>().goto(Page::Dashboard);
        ctx
    }

    #[test]
    fn all_nav_items_render() {
        let ctx = test_ctx();
        let harness = Harness::new_ui_state(
            |ui, state_ctx| {
                sidebar(state_ctx, ui);
            },
            ctx,
        );

        for item in NAV_ITEMS {
            assert!(
                harness.query_by_label_contains(item.label).is_some(),
                "nav item '{}' should render",
                item.label
            );
        }
        assert!(harness.query_by_label_contains("Sign Out").is_some());
    }

    #[test]
    fn clicking_an_item_navigates() {
        let ctx = test_ctx();
        let mut harness = Harness::new_ui_state(
            |ui, state_ctx| {
                sidebar(state_ctx, ui);
            },
            ctx,
        );
        harness.step();

        if let Some(products) = harness.query_by_label_contains("Products") {
            products.click();
        }
        harness.step();

        assert_eq!(
            harness.state().state::<RouteState>().current.page,
            Page::Products
        );
    }

    #[test]
    fn sign_out_routes_to_login() {
        let ctx = test_ctx();
        let mut harness = Harness::new_ui_state(
            |ui, state_ctx| {
                sidebar(state_ctx, ui);
            },
            ctx,
        );
        harness.step();

        if let Some(sign_out) = harness.query_by_label_contains("Sign Out") {
            sign_out.click();
        }
        harness.step();

        assert_eq!(
            harness.state().state::<RouteState>().current.page,
            Page::Login
        );
    }
}
