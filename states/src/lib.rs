//! Typed state container for immediate-mode views.
//!
//! A view keeps its inputs as [`State`]s and everything derived from them as
//! [`Compute`]s inside one [`StateCtx`]. Touching a state marks the computes
//! that depend on it dirty, and [`StateCtx::run_all_dirty`] brings them up to
//! date in dependency order before the next render.

mod basic_state;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod state;
mod state_sync_status;

pub use basic_state::Time;
pub use compute::{Compute, ComputeDeps, ComputeStage, Reg, Updater, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use state::State;
pub use state_sync_status::StateSyncStatus;
