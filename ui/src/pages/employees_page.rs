//! Employees page: the management template instance.
//!
//! The create workflow is route-driven: `?action=create` opens the dialog,
//! submit dispatches the create command (latched), success clears the query
//! parameter and refreshes the list, failure leaves the dialog open for a
//! retry. Toasts mirror the mutation's lifecycle.

use depot_business::{
    AppConfig, CellValue, Column, CreateEmployeeCommand, CreateEmployeeCompute,
    CreateEmployeeInput, CreatePhase, Employee, EmployeeForm, EmployeeStatsCompute,
    EmployeesState, FetchEmployeesCommand, FetchEmployeesCompute, FilterOption, Page, RouteAction,
    RouteState, SettingsState, ToastKind, ToastsState,
};
use depot_states::Time;
use egui::Ui;

use crate::state::State;
use crate::utils::colors::employee_status_color;
use crate::widgets::{
    CreateDialog, ManagementConfig, ManagementData, management_page, status_badge,
};

const DEPARTMENT_FILTERS: &[FilterOption] = &[
    FilterOption {
        label: "Operations",
        value: "Operations",
    },
    FilterOption {
        label: "Logistics",
        value: "Logistics",
    },
    FilterOption {
        label: "Purchasing",
        value: "Purchasing",
    },
    FilterOption {
        label: "Finance",
        value: "Finance",
    },
];

const STATUS_FILTERS: &[FilterOption] = &[
    FilterOption {
        label: "Active",
        value: "Active",
    },
    FilterOption {
        label: "On Leave",
        value: "On Leave",
    },
    FilterOption {
        label: "Inactive",
        value: "Inactive",
    },
];

fn employee_columns() -> Vec<Column<Employee>> {
    vec![
        Column::new("name", "Name", |e: &Employee| {
            CellValue::Text(e.name.clone())
        })
        .sortable()
        .searchable()
        .render(|e, ui| {
            ui.strong(&e.name);
        }),
        Column::new("email", "Email", |e: &Employee| {
            CellValue::Text(e.email.clone())
        })
        .searchable(),
        Column::new("role", "Role", |e: &Employee| {
            CellValue::Text(e.role.clone())
        })
        .sortable(),
        Column::new("department", "Department", |e: &Employee| {
            CellValue::Text(e.department.clone())
        })
        .sortable()
        .filterable(DEPARTMENT_FILTERS),
        Column::new("status", "Status", |e: &Employee| {
            CellValue::Badge(e.status.label().to_owned())
        })
        .sortable()
        .filterable(STATUS_FILTERS)
        .render(|e, ui| {
            status_badge(ui, e.status.label(), employee_status_color(e.status));
        }),
        Column::new("joined", "Joined", |e: &Employee| {
            CellValue::Text(e.joined.format("%Y-%m-%d").to_string())
        })
        .sortable(),
    ]
}

pub fn employees_page(state: &mut State, ui: &mut Ui) {
    let ctx = &mut state.ctx;
    let now = *ctx.state::<Time>().as_ref();

    let fetched = ctx
        .cached::<FetchEmployeesCompute>()
        .cloned()
        .unwrap_or_default();
    let stats = ctx
        .cached::<EmployeeStatsCompute>()
        .cloned()
        .unwrap_or_default();
    let create = ctx
        .cached::<CreateEmployeeCompute>()
        .cloned()
        .unwrap_or_default();

    // Settle the create workflow exactly once per phase change.
    let phase = CreatePhase::of(&create.result);
    if let Some(transition) = ctx.state_mut::<EmployeesState>().phase_transition(phase) {
        match transition {
            CreatePhase::Success => {
                if let Some(toast) = ctx.state_mut::<EmployeesState>().pending_toast.take() {
                    ctx.state_mut::<ToastsState>().resolve(
                        toast,
                        ToastKind::Success,
                        "Employee Created",
                        now,
                    );
                }
                ctx.update::<RouteState>(|route| route.clear_action());
                ctx.update_compute::<CreateEmployeeCompute>(|compute| compute.reset());
                ctx.state_mut::<EmployeesState>().reset_form();
                // The list is refreshed by the upstream source, not by an
                // optimistic insertion.
                ctx.dispatch::<FetchEmployeesCommand>();
            }
            CreatePhase::Error => {
                if let Some(toast) = ctx.state_mut::<EmployeesState>().pending_toast.take() {
                    ctx.state_mut::<ToastsState>().resolve(
                        toast,
                        ToastKind::Error,
                        "Employee Creation Failed",
                        now,
                    );
                }
            }
            CreatePhase::Idle | CreatePhase::Pending => {}
        }
    }

    // Dialog visibility is derived from the route, never a separate flag.
    let route = *ctx.state::<RouteState>();
    let dialog = if route.current.page != Page::Employees || !route.action_is(RouteAction::Create)
    {
        CreateDialog::Closed
    } else if create.is_pending() {
        CreateDialog::Submitting
    } else if let Some(error) = create.error_message() {
        CreateDialog::Failed(error)
    } else {
        CreateDialog::Open
    };

    let currency = ctx.state::<AppConfig>().currency.clone();
    let compact = ctx.state::<SettingsState>().compact_tables;

    let mut query = std::mem::take(&mut ctx.state_mut::<EmployeesState>().query);
    let mut form = std::mem::take(&mut ctx.state_mut::<EmployeesState>().form);

    let columns = employee_columns();
    let config = ManagementConfig {
        title: "Employees",
        description: "Manage your team across departments.",
        search_placeholder: "Search by name or email...",
        add_button_label: "Add Employee",
        dialog_title: "New Employee",
        dialog_description: "Create a record in the employee directory.",
        columns: &columns,
        currency: &currency,
        compact,
    };
    let data = ManagementData {
        rows: fetched.employees(),
        is_loading: fetched.is_loading(),
        fetch_error: fetched.error_message(),
        stats: &stats.cards,
    };

    let response = management_page(ui, &config, &data, &mut query, dialog, &mut |ui| {
        employee_form(ui, &mut form);
    });

    if let Some(employee) = response.row_clicked {
        // No detail pages exist; record the would-be navigation.
        log::info!(
            "navigate to {}",
            Page::Employees.detail_path(employee.id.as_str())
        );
    }

    if response.add_clicked {
        ctx.update_compute::<CreateEmployeeCompute>(|compute| compute.reset());
        ctx.update::<RouteState>(|route| route.set_action(RouteAction::Create));
    }

    if response.cancel_clicked {
        ctx.update::<RouteState>(|route| route.clear_action());
        ctx.update_compute::<CreateEmployeeCompute>(|compute| compute.reset());
        form = EmployeeForm::default();
    }

    if response.submit_clicked {
        // Form data is passed through unchecked; exactly one mutation per
        // submit, enforced by the dispatch latch.
        let request = form.to_request();
        ctx.update::<CreateEmployeeInput>(|input| input.request = Some(request));
        if ctx.dispatch::<CreateEmployeeCommand>() {
            let toast = ctx
                .state_mut::<ToastsState>()
                .push_loading("Creating Employee...", now);
            ctx.state_mut::<EmployeesState>().pending_toast = Some(toast);
        }
    }

    let employees_state = ctx.state_mut::<EmployeesState>();
    employees_state.query = query;
    employees_state.form = form;
}

fn employee_form(ui: &mut Ui, form: &mut EmployeeForm) {
    egui::Grid::new("employee_form")
        .num_columns(2)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut form.name);
            ui.end_row();

            ui.label("Email:");
            ui.text_edit_singleline(&mut form.email);
            ui.end_row();

            ui.label("Role:");
            ui.text_edit_singleline(&mut form.role);
            ui.end_row();

            ui.label("Department:");
            ui.text_edit_singleline(&mut form.department);
            ui.end_row();
        });
}
