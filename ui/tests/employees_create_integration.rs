//! Integration tests for the employees management template's create
//! workflow: dialog derived from the route query parameter, success closes
//! and refreshes, failure keeps the dialog open for a retry.

mod common;

use common::state_at;
use depot_business::{
    DirectoryState, EmployeesState, FetchEmployeesCommand, FetchEmployeesCompute, Page,
    RejectingDirectory, RouteAction, RouteState, ToastKind, ToastsState,
};
use depot_ui::pages::employees_page;
use depot_ui::state::State;
use egui_kittest::Harness;
use kittest::Queryable;

fn page_harness(state: State) -> Harness<'static, State> {
    Harness::new_ui_state(
        |ui, state: &mut State| {
            state.ctx.sync_computes();
            employees_page(state, ui);
        },
        state,
    )
}

/// Harness with the directory already fetched.
async fn loaded_harness(directory: DirectoryState) -> Harness<'static, State> {
    let mut state = state_at(Page::Employees, directory);
    state.ctx.dispatch::<FetchEmployeesCommand>();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let mut harness = page_harness(state);
    harness.step();
    harness
}

async fn settle(harness: &mut Harness<'_, State>) {
    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    harness.step();
    harness.step();
}

#[tokio::test]
async fn loading_state_shows_skeletons_not_table() {
    // No fetch dispatched: the collection is still loading.
    let state = state_at(Page::Employees, DirectoryState::default());
    let mut harness = page_harness(state);
    harness.step();

    assert!(
        harness.query_by_label_contains("Department").is_none(),
        "table headers should not render while loading"
    );
    assert!(
        harness.query_by_label_contains("Add Employee").is_some(),
        "the Add action is available even while loading"
    );
}

#[tokio::test]
async fn fetched_employees_render_with_stats() {
    let mut harness = loaded_harness(DirectoryState::default()).await;
    harness.step();

    assert!(harness.query_by_label_contains("Amelia Santos").is_some());
    assert!(harness.query_by_label_contains("Total Employees").is_some());
    assert!(harness.query_by_label_contains("Joined").is_some());
}

#[tokio::test]
async fn add_button_sets_the_create_query_param() {
    let mut harness = loaded_harness(DirectoryState::default()).await;

    // Dialog closed initially: no action query param.
    assert!(
        !harness
            .state()
            .ctx
            .state::<RouteState>()
            .action_is(RouteAction::Create)
    );
    assert!(harness.query_by_label_contains("employee directory").is_none());

    if let Some(add) = harness.query_by_label_contains("Add Employee") {
        add.click();
    }
    harness.step();

    assert!(
        harness
            .state()
            .ctx
            .state::<RouteState>()
            .action_is(RouteAction::Create),
        "Add must set action=create"
    );
    assert_eq!(
        harness.state().ctx.state::<RouteState>().current.to_path(),
        "/admin/employees?action=create"
    );

    harness.step();
    assert!(
        harness.query_by_label_contains("employee directory").is_some(),
        "the dialog opens with the query param"
    );
}

#[tokio::test]
async fn create_success_closes_dialog_and_refreshes() {
    let mut harness = loaded_harness(DirectoryState::default()).await;

    // Open the dialog and fill the form through state, like a user typing.
    harness
        .state_mut()
        .ctx
        .update::<RouteState>(|route| route.set_action(RouteAction::Create));
    {
        let employees = harness.state_mut().ctx.state_mut::<EmployeesState>();
        employees.form.name = "Rosa Diaz".to_owned();
        employees.form.email = "rosa@depot.test".to_owned();
        employees.form.role = "Dispatcher".to_owned();
        employees.form.department = "Logistics".to_owned();
    }
    harness.step();

    if let Some(create) = harness.query_by_label("Create") {
        create.click();
    }
    settle(&mut harness).await;

    // Promise resolved: query param cleared, dialog closed.
    assert!(
        !harness
            .state()
            .ctx
            .state::<RouteState>()
            .action_is(RouteAction::Create),
        "success must clear the query param"
    );
    harness.step();
    assert!(harness.query_by_label_contains("employee directory").is_none());

    // Toast settled to success.
    let toasts = harness.state().ctx.state::<ToastsState>();
    assert!(
        toasts
            .toasts()
            .iter()
            .any(|t| t.kind == ToastKind::Success && t.message == "Employee Created"),
        "success toast expected, got {:?}",
        toasts.toasts()
    );

    // The list is refreshed from the directory.
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    harness.step();
    harness.step();
    let fetched = harness
        .state()
        .ctx
        .cached::<FetchEmployeesCompute>()
        .unwrap();
    assert!(
        fetched
            .employees()
            .unwrap_or(&[])
            .iter()
            .any(|e| e.name == "Rosa Diaz"),
        "refetch should include the created employee"
    );
}

#[tokio::test]
async fn create_failure_keeps_dialog_open() {
    let directory = DirectoryState::new(RejectingDirectory::new("quota full"));
    let mut harness = loaded_harness(directory).await;

    harness
        .state_mut()
        .ctx
        .update::<RouteState>(|route| route.set_action(RouteAction::Create));
    harness.state_mut().ctx.state_mut::<EmployeesState>().form.name = "Rosa Diaz".to_owned();
    harness.step();

    if let Some(create) = harness.query_by_label("Create") {
        create.click();
    }
    settle(&mut harness).await;

    // Promise rejected: no query-parameter change, dialog stays open.
    assert!(
        harness
            .state()
            .ctx
            .state::<RouteState>()
            .action_is(RouteAction::Create),
        "failure must not clear the query param"
    );
    harness.step();
    assert!(
        harness.query_by_label_contains("employee directory").is_some(),
        "dialog remains open after a failure"
    );
    assert!(
        harness.query_by_label_contains("quota full").is_some(),
        "the error is shown inline"
    );

    let toasts = harness.state().ctx.state::<ToastsState>();
    assert!(
        toasts
            .toasts()
            .iter()
            .any(|t| t.kind == ToastKind::Error && t.message == "Employee Creation Failed"),
        "error toast expected, got {:?}",
        toasts.toasts()
    );
}

#[tokio::test]
async fn cancel_clears_the_query_param() {
    let mut harness = loaded_harness(DirectoryState::default()).await;

    harness
        .state_mut()
        .ctx
        .update::<RouteState>(|route| route.set_action(RouteAction::Create));
    harness.step();
    harness.step();

    if let Some(cancel) = harness.query_by_label("Cancel") {
        cancel.click();
    }
    harness.step();

    assert!(
        !harness
            .state()
            .ctx
            .state::<RouteState>()
            .action_is(RouteAction::Create)
    );
}
