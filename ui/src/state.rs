use depot_business::{
    AppConfig, ApprovalsState, CreateEmployeeCommand, CreateEmployeeCompute, CreateEmployeeInput,
    DirectoryState, EmployeeStatsCompute, EmployeesState, FetchEmployeesCommand,
    FetchEmployeesCompute, LayoutState, LoginState, ProductsState, ReportsState, RouteState,
    SettingsState, ToastsState,
};
use depot_states::{StateCtx, Time};

/// The main application state: one [`StateCtx`] with every page state,
/// compute and command registered.
pub struct State {
    pub ctx: StateCtx,
}

impl State {
    pub fn new(config: AppConfig) -> Self {
        Self::with_directory(config, DirectoryState::default())
    }

    /// Test constructor with an injected employee directory.
    pub fn test(directory: DirectoryState) -> Self {
        Self::with_directory(AppConfig::default(), directory)
    }

    fn with_directory(config: AppConfig, directory: DirectoryState) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(RouteState::default());
        ctx.add_state(LayoutState::default());
        ctx.add_state(ToastsState::default());
        ctx.add_state(SettingsState::default());
        ctx.add_state(LoginState::default());

        ctx.add_state(ProductsState::default());
        ctx.add_state(ApprovalsState::default());
        ctx.add_state(ReportsState::default());
        ctx.add_state(EmployeesState::default());
        ctx.add_state(CreateEmployeeInput::default());
        ctx.add_state(directory);

        ctx.record_compute(FetchEmployeesCompute::default());
        ctx.record_compute(CreateEmployeeCompute::default());
        ctx.record_compute(EmployeeStatsCompute::default());

        ctx.record_command(FetchEmployeesCommand);
        ctx.record_command(CreateEmployeeCommand);

        if let Err(err) = ctx.verify_deps() {
            log::error!("state setup: dependency graph is broken: {err}");
        }

        Self { ctx }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
