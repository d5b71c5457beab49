use std::any::{Any, TypeId, type_name};
use std::fmt::{Debug, Formatter};

use flume::Sender;
use log::warn;

use crate::Dep;

/// Registration key of a state or compute inside [`crate::StateCtx`].
///
/// Carries the type name next to the `TypeId` so dependency errors stay readable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reg {
    id: TypeId,
    name: &'static str,
}

impl Reg {
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Debug for Reg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // strip the module path, `roster_business::filter::FilterState` -> `FilterState`
        let short = self.name.rsplit("::").next().unwrap_or(self.name);
        write!(f, "{short}")
    }
}

/// `(state deps, compute deps)`
pub type ComputeDeps = (Vec<Reg>, Vec<Reg>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeStage {
    /// Result was (or will be) published through the [`Updater`] later.
    Pending,
    Finished,
}

/// A value derived from other states and computes.
///
/// `compute` reads its inputs through [`Dep`] and publishes the new value
/// through [`Updater::set`]; `StateCtx` applies it with `assign_box` and then
/// marks every dependent compute dirty.
pub trait Compute: Any {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater) -> ComputeStage;

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Replace `target` with the boxed value if the types line up.
pub fn assign_impl<T: Any>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => warn!("Ignoring update with mismatched type for {}", type_name::<T>()),
    }
}

#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<(TypeId, Box<dyn Any + Send>)>,
}

impl Updater {
    pub(crate) fn new(send: Sender<(TypeId, Box<dyn Any + Send>)>) -> Self {
        Self { send }
    }

    pub fn set<T: Compute + Send>(&self, value: T) {
        if self
            .send
            .send((TypeId::of::<T>(), Box::new(value)))
            .is_err()
        {
            warn!(
                "State context dropped before update of {} arrived",
                type_name::<T>()
            );
        }
    }
}
