//! Click counter with one private state cell

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{Component, Node};
use crate::constants::{COUNT_PREFIX, INCREMENT_LABEL};

/// Invoked by a stateful component right after it mutates its state
pub trait RenderTrigger {
    fn request_render(&self);
}

/// Pending-redraw flag shared between the app state and its components
#[derive(Clone, Debug, Default)]
pub struct RedrawFlag(Arc<AtomicBool>);

impl RedrawFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a pending request, returning whether there was one
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

impl RenderTrigger for RedrawFlag {
    fn request_render(&self) {
        self.0.store(true, Ordering::Release);
    }
}

/// Counter component; the count lives exactly as long as the instance
#[derive(Debug)]
pub struct Counter<T: RenderTrigger> {
    count: u64,
    trigger: T,
}

impl<T: RenderTrigger> Counter<T> {
    pub fn mount(trigger: T) -> Self {
        tracing::info!("counter mounted");
        Counter { count: 0, trigger }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Activation of the increment control
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
        tracing::debug!(count = self.count, "counter incremented");
        self.trigger.request_render();
    }

    pub fn label(&self) -> String {
        format!("{} {}", COUNT_PREFIX, self.count)
    }
}

impl<T: RenderTrigger> Drop for Counter<T> {
    fn drop(&mut self) {
        tracing::info!(count = self.count, "counter unmounted");
    }
}

impl<T: RenderTrigger> Component for Counter<T> {
    fn name(&self) -> &'static str {
        "Counter"
    }

    fn body(&self) -> Node {
        Node::Fragment(vec![
            Node::text(self.label()),
            Node::Button(INCREMENT_LABEL.to_string()),
        ])
    }
}
