use crate::navigation::TransitionDelegate;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use uuid::Uuid;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ControllerId(Uuid);

impl ControllerId {
    pub fn new() -> Self {
        ControllerId(Uuid::new_v4())
    }
}

impl Default for ControllerId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ControllerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NavigationOperation {
    Push,
    Pop,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TransitionContext {
    cancelled: bool,
}

impl TransitionContext {
    pub fn completed() -> Self {
        TransitionContext { cancelled: false }
    }

    pub fn cancelled() -> Self {
        TransitionContext { cancelled: true }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

pub type TransitionCompletion = Box<dyn FnOnce(TransitionContext)>;

#[cfg_attr(test, mockall::automock(type Screen = u32;))]
pub trait NavigationController {
    type Screen: Clone + 'static;

    fn push_screen(&mut self, screen: Self::Screen, animated: bool);

    /// Returns `None` when there is nothing above the root to pop.
    fn pop_screen(&mut self, animated: bool) -> Option<Self::Screen>;

    /// Registers `completion` with the transition that is currently running.
    /// Returns false, dropping `completion` without calling it, when no
    /// animated transition is in progress.
    fn on_transition_end(&mut self, completion: TransitionCompletion) -> bool;

    fn delegate(&self) -> Option<Rc<TransitionDelegate>>;

    fn set_delegate(&mut self, delegate: Option<Rc<TransitionDelegate>>);
}
