//! Fetch employees command + compute cache.
//!
//! Fetching is a side effect, so it must not live in a derived compute
//! (computes can run implicitly). Instead:
//! - `FetchEmployeesCompute` is a compute-shaped cache holding the latest
//!   list,
//! - `FetchEmployeesCommand` is a manual-only command that asks the injected
//!   directory and updates the cache via `Updater`.
//!
//! Register both during app setup, dispatch at startup / on refresh / after
//! a successful create, and let `StateCtx::sync_computes()` apply results.

use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use depot_states::{
    Command, CommandSnapshot, Compute, Updater, assign_impl,
};
use log::{error, info};
use tokio_util::sync::CancellationToken;

use crate::DirectoryState;
use crate::employees::Employee;

#[derive(Debug, Clone, Default)]
pub enum FetchEmployeesResult {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// Fetch in progress.
    Pending,
    /// Latest directory contents.
    Success(Vec<Employee>),
    /// Fetch failed with an error message.
    Error(String),
}

/// Compute-shaped cache for the fetched employee list. Its `compute()` is a
/// deliberate no-op; content arrives from [`FetchEmployeesCommand`].
#[derive(Debug, Clone, Default)]
pub struct FetchEmployeesCompute {
    pub result: FetchEmployeesResult,
}

impl FetchEmployeesCompute {
    pub fn employees(&self) -> Option<&[Employee]> {
        if let FetchEmployeesResult::Success(ref employees) = self.result {
            Some(employees)
        } else {
            None
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        if let FetchEmployeesResult::Error(ref message) = self.result {
            Some(message)
        } else {
            None
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.result, FetchEmployeesResult::Idle)
    }

    /// True until the first fetch settles; drives the skeleton placeholders.
    pub fn is_loading(&self) -> bool {
        matches!(
            self.result,
            FetchEmployeesResult::Idle | FetchEmployeesResult::Pending
        )
    }
}

impl Compute for FetchEmployeesCompute {
    fn compute(&self, _deps: depot_states::Dep, _updater: Updater) {
        // Intentionally no-op: updated by FetchEmployeesCommand.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Manual-only command performing the directory list call.
#[derive(Debug, Default)]
pub struct FetchEmployeesCommand;

impl Command for FetchEmployeesCommand {
    fn run(
        &self,
        snapshot: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let directory = snapshot.state::<DirectoryState>().clone();

        Box::pin(async move {
            updater.set(FetchEmployeesCompute {
                result: FetchEmployeesResult::Pending,
            });

            match directory.directory().list().await {
                Ok(employees) => {
                    info!("fetch employees: {} records", employees.len());
                    updater.set(FetchEmployeesCompute {
                        result: FetchEmployeesResult::Success(employees),
                    });
                }
                Err(err) => {
                    error!("fetch employees failed: {err}");
                    updater.set(FetchEmployeesCompute {
                        result: FetchEmployeesResult::Error(err.to_string()),
                    });
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_states::StateCtx;

    fn setup() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(DirectoryState::default());
        ctx.record_compute(FetchEmployeesCompute::default());
        ctx.record_command(FetchEmployeesCommand);
        ctx
    }

    #[tokio::test]
    async fn fetch_fills_the_cache() {
        let mut ctx = setup();
        assert!(ctx.cached::<FetchEmployeesCompute>().unwrap().is_idle());

        ctx.dispatch::<FetchEmployeesCommand>();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        ctx.sync_computes();

        let fetched = ctx.cached::<FetchEmployeesCompute>().unwrap();
        let employees = fetched.employees().expect("fetch should succeed");
        assert_eq!(employees.len(), crate::mock_employees().len());
        assert!(!fetched.is_loading());
    }
}
