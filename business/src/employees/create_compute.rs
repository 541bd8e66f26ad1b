//! Create employee command + compute cache.
//!
//! Creating an employee is a side effect (a mutation against the injected
//! directory), so it runs only from a manual command dispatched when the
//! user submits the create form:
//! - `CreateEmployeeInput` holds the form payload; `None` means "no request
//!   intended" and the command skips without touching the cache,
//! - `CreateEmployeeCompute` caches the latest attempt
//!   (Idle/Pending/Success/Error),
//! - `CreateEmployeeCommand` performs exactly one directory call per
//!   dispatch. No retry, no optimistic insertion; the employees list is
//!   refreshed by a separate fetch after success.

use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use depot_states::{
    Command, CommandSnapshot, Compute, State, Updater, assign_impl, state_assign_impl,
};
use log::{error, info};
use tokio_util::sync::CancellationToken;

use crate::DirectoryState;
use crate::employees::{Employee, NewEmployee};

/// Input to the command; set right before dispatching.
#[derive(Debug, Clone, Default)]
pub struct CreateEmployeeInput {
    pub request: Option<NewEmployee>,
}

impl State for CreateEmployeeInput {
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
        state_assign_impl(self, new_self);
    }
}

#[derive(Debug, Clone, Default)]
pub enum CreateEmployeeResult {
    /// No creation attempted yet.
    #[default]
    Idle,
    /// Mutation in flight.
    Pending,
    /// The directory accepted the record.
    Success(Employee),
    /// The mutation failed; the dialog stays open for a retry.
    Error(String),
}

/// Compute-shaped cache for the latest create attempt. `compute()` is a
/// deliberate no-op; updates come from [`CreateEmployeeCommand`].
#[derive(Debug, Clone, Default)]
pub struct CreateEmployeeCompute {
    pub result: CreateEmployeeResult,
}

impl CreateEmployeeCompute {
    pub fn is_pending(&self) -> bool {
        matches!(self.result, CreateEmployeeResult::Pending)
    }

    pub fn created(&self) -> Option<&Employee> {
        if let CreateEmployeeResult::Success(ref employee) = self.result {
            Some(employee)
        } else {
            None
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        if let CreateEmployeeResult::Error(ref message) = self.result {
            Some(message)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.result = CreateEmployeeResult::Idle;
    }
}

impl Compute for CreateEmployeeCompute {
    fn compute(&self, _deps: depot_states::Dep, _updater: Updater) {
        // Intentionally no-op: updated by CreateEmployeeCommand.
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

/// Manual-only command performing the create mutation.
#[derive(Debug, Default)]
pub struct CreateEmployeeCommand;

impl Command for CreateEmployeeCommand {
    fn run(
        &self,
        snapshot: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let input = snapshot.state::<CreateEmployeeInput>().clone();
        let directory = snapshot.state::<DirectoryState>().clone();

        Box::pin(async move {
            let Some(request) = input.request else {
                info!("create employee: no request set, skipping");
                return;
            };

            info!("create employee: submitting '{}'", request.name);
            updater.set(CreateEmployeeCompute {
                result: CreateEmployeeResult::Pending,
            });

            // The form's payload is passed through unchecked; whatever the
            // directory says is the outcome.
            match directory.directory().create(request).await {
                Ok(employee) => {
                    info!("create employee: '{}' stored as {}", employee.name, employee.id);
                    updater.set(CreateEmployeeCompute {
                        result: CreateEmployeeResult::Success(employee),
                    });
                }
                Err(err) => {
                    error!("create employee failed: {err}");
                    updater.set(CreateEmployeeCompute {
                        result: CreateEmployeeResult::Error(err.to_string()),
                    });
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryDirectory, RejectingDirectory};
    use depot_states::StateCtx;

    fn setup(directory: DirectoryState) -> StateCtx {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut ctx = StateCtx::new();
        ctx.add_state(directory);
        ctx.add_state(CreateEmployeeInput::default());
        ctx.record_compute(CreateEmployeeCompute::default());
        ctx.record_command(CreateEmployeeCommand);
        ctx
    }

    fn request() -> NewEmployee {
        NewEmployee {
            name: "Rosa Diaz".to_owned(),
            email: "rosa@depot.test".to_owned(),
            role: "Dispatcher".to_owned(),
            department: "Logistics".to_owned(),
        }
    }

    #[tokio::test]
    async fn success_lands_in_the_cache() {
        let mut ctx = setup(DirectoryState::new(InMemoryDirectory::empty()));

        ctx.update::<CreateEmployeeInput>(|input| input.request = Some(request()));
        ctx.dispatch::<CreateEmployeeCommand>();

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        ctx.sync_computes();

        let compute = ctx.cached::<CreateEmployeeCompute>().unwrap();
        let created = compute.created().expect("create should succeed");
        assert_eq!(created.name, "Rosa Diaz");
    }

    #[tokio::test]
    async fn rejection_lands_as_error() {
        let mut ctx = setup(DirectoryState::new(RejectingDirectory::new("quota full")));

        ctx.update::<CreateEmployeeInput>(|input| input.request = Some(request()));
        ctx.dispatch::<CreateEmployeeCommand>();

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        ctx.sync_computes();

        let compute = ctx.cached::<CreateEmployeeCompute>().unwrap();
        let message = compute.error_message().expect("create should fail");
        assert!(message.contains("quota full"));
    }

    #[tokio::test]
    async fn missing_input_is_skipped() {
        let mut ctx = setup(DirectoryState::new(InMemoryDirectory::empty()));

        ctx.dispatch::<CreateEmployeeCommand>();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        ctx.sync_computes();

        let compute = ctx.cached::<CreateEmployeeCompute>().unwrap();
        assert!(matches!(compute.result, CreateEmployeeResult::Idle));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut compute = CreateEmployeeCompute {
            result: CreateEmployeeResult::Error("boom".to_owned()),
        };
        compute.reset();
        assert!(matches!(compute.result, CreateEmployeeResult::Idle));
    }
}
