use std::any::Any;

use chrono::{DateTime, Duration, Utc};

use crate::State;

/// Virtual clock.
///
/// The app writes the wall clock into it once per frame; tests move it by
/// hand so time-gated behavior (like the search debounce) stays deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { virt: now }
    }

    pub fn advance(&mut self, by: Duration) {
        self.virt += by;
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
