//! Typed application-state runtime for the Depot admin console.
//!
//! The runtime stores three kinds of registrations in a [`StateCtx`]:
//!
//! - [`State`]: plain mutable application state (page state, config, inputs)
//! - [`Compute`]: derived or command-updated caches, read via `cached()`
//! - [`Command`]: manual-only side effects returning a boxed future
//!
//! Commands and computes publish replacement values through an [`Updater`]
//! channel; [`StateCtx::sync_computes`] applies them at the start of each
//! frame and recomputes dirty derived computes in dependency order.

mod basic_state;
mod command;
mod compute;
mod ctx;
mod dep;
mod graph;
mod snapshot;
mod state;
mod status;
mod task;
mod updater;

pub use basic_state::Time;
pub use command::Command;
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use graph::{DepRoute, Graph, TopologyError};
pub use snapshot::{CommandSnapshot, ComputeSnapshot, StateSnapshot};
pub use state::{State, state_assign_impl};
pub use status::StateSyncStatus;
pub use task::{TaskHandle, TaskId};
pub use updater::Updater;
