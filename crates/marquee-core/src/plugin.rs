// File: crates/marquee-core/src/plugin.rs
// Summary: Interaction trait and the dispatch set with one explicit teardown call.

use crate::chart::Chart;
use crate::event::InputEvent;

/// An interaction reacts to host input and mutates the chart model (scales,
/// options, overlay). Pure state machine: no timers, no host handles.
pub trait Interaction {
    fn id(&self) -> &'static str;
    /// Handle one input event. Events arrive in host order; the interaction
    /// filters for the ones it cares about.
    fn on_input(&mut self, event: &InputEvent, chart: &mut Chart);
}

/// Ordered set of interactions a host feeds events to. Disposal is a single
/// explicit call; there is no per-handler unsubscribe.
#[derive(Default)]
pub struct InteractionSet {
    handlers: Vec<Box<dyn Interaction>>,
    disposed: bool,
}

impl InteractionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler at the end of the dispatch order. Registration after
    /// `dispose` is ignored.
    pub fn register(&mut self, handler: Box<dyn Interaction>) {
        if self.disposed {
            log::debug!("interaction {} registered after dispose, ignoring", handler.id());
            return;
        }
        self.handlers.push(handler);
    }

    /// Forward one event to every handler in registration order.
    pub fn dispatch(&mut self, event: &InputEvent, chart: &mut Chart) {
        if self.disposed {
            return;
        }
        for handler in &mut self.handlers {
            handler.on_input(event, chart);
        }
    }

    /// Tear down every handler at once. Idempotent; the set stays empty and
    /// inert afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        log::debug!("disposing {} interaction(s)", self.handlers.len());
        self.handlers.clear();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
