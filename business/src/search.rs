//! Debounced name search.

use std::any::Any;

use chrono::{DateTime, Duration, Utc};
use log::debug;
use roster_states::{State, StateCtx, Time};

use crate::{Debouncer, FilterState};

/// What the search field shows, plus the not-yet-committed value.
///
/// The text buffer follows every keystroke; [`FilterState`] only sees the
/// value once typing has paused for the quiet period.
#[derive(Debug, Clone)]
pub struct NameSearch {
    text: String,
    debouncer: Debouncer<String>,
}

impl Default for NameSearch {
    fn default() -> Self {
        Self::new(Duration::milliseconds(crate::config::DEFAULT_SEARCH_QUIET_MS))
    }
}

impl NameSearch {
    pub fn new(quiet: Duration) -> Self {
        Self {
            text: String::new(),
            debouncer: Debouncer::new(quiet),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn on_input(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.text = text.into();
        self.debouncer.push(self.text.clone(), now);
    }

    pub fn poll_commit(&mut self, now: DateTime<Utc>) -> Option<String> {
        self.debouncer.poll(now)
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.debouncer.remaining(now)
    }
}

impl State for NameSearch {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Moves a due search value into [`FilterState`].
///
/// Returns `true` when the filter changed. Reads the clock from [`Time`].
pub fn commit_name_search(ctx: &mut StateCtx) -> bool {
    let now = *ctx.state::<Time>().as_ref();
    if !ctx.state::<NameSearch>().is_pending() {
        return false;
    }
    let Some(name) = ctx.state_mut::<NameSearch>().poll_commit(now) else {
        return false;
    };

    debug!("Committing name filter {name:?}");
    ctx.update::<FilterState>(|filter| filter.set_name(name));
    true
}
