//! Screens own their state exclusively.
//!
//! A screen starts out [`ScreenState::Loading`] and settles into either
//! [`ScreenState::Loaded`] or [`ScreenState::Failed`] once its single
//! request completed. Results of requests started before the screen was
//! left or restarted are discarded.
use core::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::{error::Result, print_json};

mod detail;
mod list;
#[cfg(test)]
mod tests;

pub use self::{detail::DetailScreen, list::ListScreen};

/// State of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState<T> {
    Loading,
    Loaded(T),
    /// A human readable description of what went wrong.
    Failed(String),
}

/// Handed out for every started load.
///
/// Only the ticket of the latest load is able to settle the screen.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct Ticket {
    generation: u64,
}

#[derive(Debug)]
pub struct Screen<T> {
    state: ScreenState<T>,
    generation: u64,
}

impl<T> Screen<T> {
    pub fn new() -> Self {
        Self {
            state: ScreenState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ScreenState<T> {
        &self.state
    }

    /// Start a new load, invalidating all previous tickets.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = ScreenState::Loading;
        Ticket {
            generation: self.generation,
        }
    }

    /// Apply the result of the load identified by `ticket`.
    ///
    /// Failures are prefixed with `context`. Returns `false` and leaves the
    /// state untouched if the ticket is stale.
    pub fn settle<C>(&mut self, ticket: Ticket, result: Result<T>, context: C) -> bool
    where
        C: fmt::Display,
    {
        if ticket.generation != self.generation {
            debug!(
                "Discarding result of load {}, screen is at {}",
                ticket.generation, self.generation
            );
            return false;
        }
        self.state = match result {
            Ok(value) => ScreenState::Loaded(value),
            Err(why) => {
                info!("{}: {}", context, why);
                ScreenState::Failed(format!("{}: {}", context, why))
            }
        };
        true
    }

    /// Tear the screen down, outstanding loads will be discarded.
    pub fn leave(&mut self) {
        self.generation += 1;
    }
}

impl<T> Default for Screen<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct Failure<'m> {
    error: &'m str,
}

fn print_failure_json(why: &str) -> Result<()> {
    print_json(&Failure { error: why })
}
