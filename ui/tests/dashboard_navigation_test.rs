//! Dashboard widgets and quick-action navigation.

mod common;

use common::state_at;
use depot_business::{DASHBOARD_STATS, DirectoryState, Page, RouteState};
use depot_ui::pages::dashboard_page;
use depot_ui::state::State;
use egui_kittest::Harness;
use kittest::Queryable;

fn page_harness(state: State) -> Harness<'static, State> {
    Harness::new_ui_state(
        |ui, state: &mut State| {
            dashboard_page(state, ui);
        },
        state,
    )
}

#[tokio::test]
async fn stats_and_activity_widgets_render() {
    let state = state_at(Page::Dashboard, DirectoryState::default());
    let harness = page_harness(state);

    for stat in DASHBOARD_STATS {
        assert!(
            harness.query_by_label_contains(stat.title).is_some(),
            "stat '{}' should render",
            stat.title
        );
    }
    assert!(harness.query_by_label_contains("Action Items").is_some());
    assert!(harness.query_by_label_contains("Quick Actions").is_some());
    assert!(harness.query_by_label_contains("Inventory Activities").is_some());
}

#[tokio::test]
async fn quick_action_navigates_to_products() {
    let state = state_at(Page::Dashboard, DirectoryState::default());
    let mut harness = page_harness(state);
    harness.step();

    if let Some(action) = harness.query_by_label_contains("Manage Products") {
        action.click();
    }
    harness.step();

    assert_eq!(
        harness.state().ctx.state::<RouteState>().current.page,
        Page::Products
    );
}

#[tokio::test]
async fn action_item_routes_to_approvals() {
    let state = state_at(Page::Dashboard, DirectoryState::default());
    let mut harness = page_harness(state);
    harness.step();

    if let Some(approve) = harness.query_all_by_label("Approve").next() {
        approve.click();
    }
    harness.step();

    assert_eq!(
        harness.state().ctx.state::<RouteState>().current.page,
        Page::Approvals
    );
}
