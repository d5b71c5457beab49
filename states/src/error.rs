use std::any::type_name;

use thiserror::Error;

use crate::{Reg, TopologyError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not found: {name}")]
    StateNotFound { name: &'static str },
    #[error("Compute not found: {name}")]
    ComputeNotFound { name: &'static str },
    #[error(transparent)]
    Topology(#[from] TopologyError<Reg>),
}

impl Error {
    pub fn state_not_found<T>() -> Self {
        Self::StateNotFound {
            name: type_name::<T>(),
        }
    }

    pub fn compute_not_found<T>() -> Self {
        Self::ComputeNotFound {
            name: type_name::<T>(),
        }
    }
}
