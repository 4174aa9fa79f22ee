use crate::navigation::NavigationOperation;
use std::cell::Cell;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InteractionOutcome {
    Finished,
    Cancelled,
}

#[derive(Debug, Default)]
pub struct InteractiveTransition {
    active: Cell<bool>,
    claimed: Cell<bool>,
    percent_complete: Cell<f64>,
    outcome: Cell<Option<InteractionOutcome>>,
}

impl InteractiveTransition {
    pub(crate) fn begin(&self) {
        self.active.set(true);
        self.claimed.set(false);
        self.percent_complete.set(0.0);
        self.outcome.set(None);
    }

    pub(crate) fn abandon(&self) {
        self.active.set(false);
        self.claimed.set(false);
        self.percent_complete.set(0.0);
        self.outcome.set(None);
    }

    pub(crate) fn update(&self, percent_complete: f64) {
        if self.active.get() {
            self.percent_complete.set(percent_complete.clamp(0.0, 1.0));
        }
    }

    pub(crate) fn finish(&self) {
        self.end(InteractionOutcome::Finished);
    }

    pub(crate) fn cancel(&self) {
        self.end(InteractionOutcome::Cancelled);
    }

    fn end(&self, outcome: InteractionOutcome) {
        if !self.active.get() {
            return;
        }
        if self.claimed.get() {
            self.active.set(false);
            self.outcome.set(Some(outcome));
        } else {
            // no host transition picked the interaction up
            self.abandon();
        }
    }

    /// Called by the host when it starts a transition driven by this
    /// interaction. Returns false when there is nothing to claim.
    pub fn claim(&self) -> bool {
        if self.active.get() && !self.claimed.get() {
            self.claimed.set(true);
            true
        } else {
            false
        }
    }

    pub fn take_outcome(&self) -> Option<InteractionOutcome> {
        let outcome = self.outcome.take();
        if outcome.is_some() {
            self.claimed.set(false);
        }
        outcome
    }

    pub(crate) fn is_claimed(&self) -> bool {
        self.claimed.get()
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn is_busy(&self) -> bool {
        self.active.get() || self.outcome.get().is_some()
    }

    pub fn percent_complete(&self) -> f64 {
        self.percent_complete.get()
    }
}

#[derive(Debug)]
pub struct TransitionDelegate {
    interaction: InteractiveTransition,
    interactive_push: bool,
}

impl TransitionDelegate {
    pub(crate) fn new(interactive_push: bool) -> Self {
        TransitionDelegate {
            interaction: InteractiveTransition::default(),
            interactive_push,
        }
    }

    pub fn interaction_for(&self, operation: NavigationOperation) -> Option<&InteractiveTransition> {
        let supported = match operation {
            NavigationOperation::Pop => true,
            NavigationOperation::Push => self.interactive_push,
        };
        if supported && self.interaction.is_active() && !self.interaction.claimed.get() {
            Some(&self.interaction)
        } else {
            None
        }
    }

    pub fn interaction(&self) -> &InteractiveTransition {
        &self.interaction
    }
}
