use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use flume::{Receiver, Sender};
use tokio_util::sync::CancellationToken;

use crate::{
    Command, CommandSnapshot, Compute, ComputeSnapshot, Dep, Graph, State, StateSnapshot,
    StateSyncStatus, TaskHandle, TaskId, TopologyError, Updater,
};

/// Derived computes may publish values that dirty further computes; each
/// `sync_computes` call settles at most this many propagation passes.
const MAX_SYNC_PASSES: usize = 8;

/// Registry and scheduler for [`State`]s, [`Compute`]s and [`Command`]s.
///
/// Owned by the UI thread. Commands are spawned onto a tokio runtime (the
/// ambient one inside `#[tokio::test]`, an owned background runtime
/// otherwise) and publish results through the updater channel;
/// [`StateCtx::sync_computes`] applies them at the start of each frame.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Arc<dyn Command>>,
    status: BTreeMap<TypeId, StateSyncStatus>,
    graph: Graph<TypeId>,

    send: Sender<(TypeId, Box<dyn Any + Send>)>,
    recv: Receiver<(TypeId, Box<dyn Any + Send>)>,

    tasks: BTreeMap<TypeId, TaskHandle>,
    generation: u64,

    spawner: Spawner,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            status: BTreeMap::new(),
            graph: Graph::new(),
            send,
            recv,
            tasks: BTreeMap::new(),
            generation: 0,
            spawner: Spawner::current(),
        }
    }

    // =====================
    // Registration
    // =====================

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.states.insert(id, Box::new(state));
        self.status.insert(id, StateSyncStatus::BeforeInit);
    }

    /// Register a compute and record its dependency edges. Derived computes
    /// start dirty so they settle on the first `sync_computes`.
    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let (state_deps, compute_deps) = compute.deps();
        for dep in state_deps.iter().chain(compute_deps) {
            self.graph.route_to(*dep, id);
        }
        let initial = if state_deps.is_empty() && compute_deps.is_empty() {
            // Command-updated cache; nothing to derive.
            StateSyncStatus::Clean
        } else {
            StateSyncStatus::Dirty
        };
        self.computes.insert(id, Box::new(compute));
        self.status.insert(id, initial);
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Arc::new(command));
    }

    /// Check the recorded dependency graph is acyclic with unique edges.
    /// Call once after registration; a broken graph is a programming error.
    pub fn verify_deps(&self) -> Result<(), TopologyError<TypeId>> {
        self.graph.verify()
    }

    // =====================
    // Access
    // =====================

    /// # Panics
    /// Panics if `T` was never registered via `add_state`.
    pub fn state<T: State>(&self) -> &T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("state {} is not registered", type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never registered via `add_state`.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|slot| slot.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("state {} is not registered", type_name::<T>()))
    }

    /// Mutate a state in place and dirty its dependents.
    pub fn update<T: State>(&mut self, mutate: impl FnOnce(&mut T)) {
        mutate(self.state_mut::<T>());
        self.mark_dependents_dirty(TypeId::of::<T>());
    }

    /// Latest content of a compute cache, if registered.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.as_any().downcast_ref::<T>())
    }

    /// Mutate a compute cache in place (reset to idle, etc.) and dirty its
    /// dependents. Prefer commands + `Updater` for anything non-trivial.
    pub fn update_compute<T: Compute>(&mut self, mutate: impl FnOnce(&mut T)) {
        let id = TypeId::of::<T>();
        let Some(slot) = self
            .computes
            .get_mut(&id)
            .and_then(|slot| slot.as_any_mut().downcast_mut::<T>())
        else {
            log::error!("update_compute: {} is not registered", type_name::<T>());
            return;
        };
        mutate(slot);
        self.mark_dependents_dirty(id);
    }

    pub fn mark_dirty(&mut self, id: &TypeId) {
        self.status.insert(*id, StateSyncStatus::Dirty);
    }

    pub fn mark_clean(&mut self, id: &TypeId) {
        self.status.insert(*id, StateSyncStatus::Clean);
    }

    /// True while a previously dispatched `T` has not finished.
    pub fn command_in_flight<T: Command>(&self) -> bool {
        self.tasks
            .get(&TypeId::of::<T>())
            .is_some_and(|task| !task.is_done())
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    // =====================
    // Commands
    // =====================

    /// Dispatch a registered command.
    ///
    /// Latched: while a previous run of the same command type is in flight
    /// the dispatch is refused and `false` is returned.
    pub fn dispatch<T: Command>(&mut self) -> bool {
        let id = TypeId::of::<T>();

        if self.command_in_flight::<T>() {
            log::warn!(
                "dispatch {}: previous run still in flight, ignoring",
                type_name::<T>()
            );
            return false;
        }

        let Some(command) = self.commands.get(&id).cloned() else {
            log::error!("dispatch {}: command is not registered", type_name::<T>());
            return false;
        };

        self.generation += 1;
        let handle = TaskHandle::new(TaskId::new(id, self.generation), CancellationToken::new());
        let token = handle.cancellation_token();
        let done = handle.done_flag();

        let future = command.run(self.command_snapshot(), self.updater(), token);
        self.tasks.insert(id, handle);

        self.spawner.spawn(async move {
            future.await;
            done.store(true, Ordering::Release);
        });

        true
    }

    fn command_snapshot(&self) -> CommandSnapshot {
        let mut states = StateSnapshot::new();
        for (id, state) in &self.states {
            if let Some(cloned) = state.snapshot() {
                states.insert_cloned(*id, cloned);
            }
        }

        let mut computes = ComputeSnapshot::new();
        for (id, compute) in &self.computes {
            if let Some(cloned) = compute.snapshot() {
                computes.insert_cloned(*id, cloned);
            }
        }

        CommandSnapshot::new(states, computes)
    }

    // =====================
    // Sync
    // =====================

    /// Apply queued command/compute results and settle derived computes.
    /// Call at the start of every frame, before any widget reads state.
    pub fn sync_computes(&mut self) {
        self.drain_updates();

        for _ in 0..MAX_SYNC_PASSES {
            let dirty: Vec<TypeId> = self
                .computes
                .keys()
                .filter(|id| self.status.get(id) == Some(&StateSyncStatus::Dirty))
                .copied()
                .collect();
            if dirty.is_empty() {
                break;
            }

            for id in dirty {
                self.status.insert(id, StateSyncStatus::Pending);
                let dep = self.dep_for(id);
                let updater = self.updater();
                if let Some(compute) = self.computes.get(&id) {
                    compute.compute(dep, updater);
                }
                // Only promote Pending -> Clean; the drain below may have
                // re-dirtied this compute through a dependency edge.
                if self.status.get(&id) == Some(&StateSyncStatus::Pending) {
                    self.status.insert(id, StateSyncStatus::Clean);
                }
                self.drain_updates();
            }
        }
    }

    fn drain_updates(&mut self) {
        while let Ok((id, value)) = self.recv.try_recv() {
            if let Some(state) = self.states.get_mut(&id) {
                state.assign_box(value);
            } else if let Some(compute) = self.computes.get_mut(&id) {
                compute.assign_box(value);
                self.status.insert(id, StateSyncStatus::Clean);
            } else {
                log::warn!("sync: no slot registered for published value {id:?}");
                continue;
            }
            self.mark_dependents_dirty(id);
        }
    }

    fn mark_dependents_dirty(&mut self, id: TypeId) {
        let dependents: Vec<TypeId> = self.graph.dependents(id).iter().copied().collect();
        for dependent in dependents {
            if dependent != id {
                self.status.insert(dependent, StateSyncStatus::Dirty);
            }
        }
    }

    fn dep_for(&self, id: TypeId) -> Dep {
        let mut dep = Dep::new();
        let Some(compute) = self.computes.get(&id) else {
            return dep;
        };
        let (state_deps, compute_deps) = compute.deps();
        for state_id in state_deps {
            match self.states.get(state_id).and_then(|slot| slot.snapshot()) {
                Some(cloned) => dep.insert(*state_id, cloned),
                None => log::warn!("dep: state {state_id:?} missing or not snapshot-able"),
            }
        }
        for compute_id in compute_deps {
            match self
                .computes
                .get(compute_id)
                .and_then(|slot| slot.snapshot())
            {
                Some(cloned) => dep.insert(*compute_id, cloned),
                None => log::warn!("dep: compute {compute_id:?} missing or not snapshot-able"),
            }
        }
        dep
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("in_flight", &self.tasks.values().filter(|t| !t.is_done()).count())
            .finish()
    }
}

/// Where command futures run.
///
/// Inside `#[tokio::test]` the ambient handle is reused so `tokio::time`
/// based settlement waits drive the spawned futures; the GUI binary has no
/// ambient runtime and gets a small owned one instead.
enum Spawner {
    Ambient(tokio::runtime::Handle),
    Owned(tokio::runtime::Runtime),
}

impl Spawner {
    fn current() -> Self {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => Self::Ambient(handle),
            Err(_) => {
                let runtime = tokio::runtime::Builder::new_multi_thread()
                    .worker_threads(2)
                    .enable_all()
                    .build()
                    .expect("failed to start the command runtime");
                Self::Owned(runtime)
            }
        }
    }

    fn spawn(&self, future: impl std::future::Future<Output = ()> + Send + 'static) {
        match self {
            Self::Ambient(handle) => {
                handle.spawn(future);
            }
            Self::Owned(runtime) => {
                runtime.spawn(future);
            }
        }
    }
}
