//! Employee management: model, page state, fetch/create commands and the
//! derived stats compute behind the management template.

mod create_compute;
mod fetch_compute;
mod model;
mod state;
mod stats_compute;

pub use create_compute::{
    CreateEmployeeCommand, CreateEmployeeCompute, CreateEmployeeInput, CreateEmployeeResult,
};
pub use fetch_compute::{FetchEmployeesCommand, FetchEmployeesCompute, FetchEmployeesResult};
pub use model::{Employee, EmployeeStatus, NewEmployee, mock_employees};
pub use state::{CreatePhase, EmployeeForm, EmployeesState};
pub use stats_compute::{EMPLOYEE_STATS, EmployeeStatsCompute};
