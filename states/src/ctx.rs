use std::{
    any::{Any, TypeId},
    collections::BTreeMap,
    fmt::{Debug, Formatter},
};

use flume::{Receiver, Sender};
use log::{debug, warn};

use crate::{
    Compute, ComputeStage, Dep, Error, Graph, Reg, State, StateSyncStatus, Updater,
};

pub(crate) struct ComputeSlot {
    pub(crate) compute: Box<dyn Compute>,
    pub(crate) status: StateSyncStatus,
}

/// Owner of every state and compute of a view.
///
/// Mutating a state through [`StateCtx::state_mut`] or [`StateCtx::update`]
/// marks the computes depending on it dirty; [`StateCtx::run_all_dirty`] then
/// re-runs them in dependency order.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, ComputeSlot>,

    graph: Graph<Reg>,
    // computes in dependency order, rebuilt after `record_compute`
    order: Option<Vec<Reg>>,

    send: Sender<(TypeId, Box<dyn Any + Send>)>,
    recv: Receiver<(TypeId, Box<dyn Any + Send>)>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for StateCtx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("order", &self.order)
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            graph: Graph::new(),
            order: None,
            send,
            recv,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.graph.add_node(Reg::of::<T>());
        self.states.insert(TypeId::of::<T>(), Box::new(state));
        self.mark_dependents_dirty(TypeId::of::<T>());
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let reg = Reg::of::<T>();
        let (state_deps, compute_deps) = compute.deps();

        self.graph.add_node(reg);
        for dep in state_deps.into_iter().chain(compute_deps) {
            self.graph.route_to(dep, reg);
        }
        self.order = None;

        self.computes.insert(
            reg.id(),
            ComputeSlot {
                compute: Box::new(compute),
                status: StateSyncStatus::Init,
            },
        );
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    /// # Panics
    /// Panics if `T` was never added with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        match self.try_state::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Mutable access; computes depending on `T` are marked dirty.
    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        if !self.states.contains_key(&TypeId::of::<T>()) {
            return Err(Error::state_not_found::<T>());
        }
        self.mark_dependents_dirty(TypeId::of::<T>());

        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    /// # Panics
    /// Panics if `T` was never added with [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        match self.try_state_mut::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        match self.try_state_mut::<T>() {
            Ok(state) => f(state),
            Err(err) => warn!("Skipping update: {err}"),
        }
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.compute.as_any().downcast_ref::<T>())
    }

    pub fn status<T: Compute>(&self) -> Option<StateSyncStatus> {
        self.computes
            .get(&TypeId::of::<T>())
            .map(|slot| slot.status)
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    pub fn mark_dirty(&mut self, id: &TypeId) {
        if let Some(slot) = self.computes.get_mut(id) {
            slot.status = StateSyncStatus::Dirty;
        }
    }

    /// Checks the compute dependency graph for cycles.
    pub fn verify_deps(&mut self) -> Result<(), Error> {
        self.compute_order().map(|_| ())
    }

    /// Runs every dirty compute in dependency order.
    ///
    /// Published values are applied right after each compute runs, so a
    /// compute always sees the fresh value of the computes it depends on.
    pub fn run_all_dirty(&mut self) -> Result<(), Error> {
        for reg in self.compute_order()? {
            let Some(slot) = self.computes.get(&reg.id()) else {
                continue;
            };
            if !slot.status.needs_run() {
                continue;
            }

            debug!("Running compute {reg:?}");
            let deps = Dep::new(&self.states, &self.computes);
            let stage = slot.compute.compute(deps, self.updater());

            if let Some(slot) = self.computes.get_mut(&reg.id()) {
                slot.status = match stage {
                    ComputeStage::Finished => StateSyncStatus::Clean,
                    ComputeStage::Pending => StateSyncStatus::Pending,
                };
            }
            self.sync_computes();
        }
        Ok(())
    }

    /// Applies every value published through an [`Updater`].
    pub fn sync_computes(&mut self) {
        while let Ok((id, value)) = self.recv.try_recv() {
            let Some(slot) = self.computes.get_mut(&id) else {
                warn!("Dropping update for unregistered compute {id:?}");
                continue;
            };
            slot.compute.assign_box(value);
            slot.status = StateSyncStatus::Clean;
            self.mark_dependents_dirty(id);
        }
    }

    fn mark_dependents_dirty(&mut self, id: TypeId) {
        let Some(reg) = self.reg_of(id) else {
            return;
        };
        let dependents: Vec<Reg> = self.graph.dependents(reg).collect();
        for dependent in dependents {
            self.mark_dirty(&dependent.id());
        }
    }

    fn reg_of(&self, id: TypeId) -> Option<Reg> {
        self.graph.nodes().find(|reg| reg.id() == id)
    }

    fn compute_order(&mut self) -> Result<Vec<Reg>, Error> {
        if let Some(order) = &self.order {
            return Ok(order.clone());
        }

        let order: Vec<Reg> = self
            .graph
            .topology_sort()?
            .into_iter()
            .filter(|reg| self.computes.contains_key(&reg.id()))
            .collect();
        debug!("Compute order resolved: {order:?}");
        self.order = Some(order.clone());
        Ok(order)
    }
}
