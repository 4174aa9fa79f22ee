mod configuration;
mod controller;
mod coordinator;
mod delegate;
mod error;
pub mod host;
mod transition_helper;
mod unpop_stack;

pub use configuration::{Configuration, UnpopConfiguration, DEFAULT_UNPOP_DEPTH};
pub use controller::{
    ControllerId, NavigationController, NavigationOperation, TransitionCompletion,
    TransitionContext,
};
pub use coordinator::{NavigationCoordinator, Navigator, PopPolicy};
pub use delegate::{InteractionOutcome, InteractiveTransition, TransitionDelegate};
pub use error::{ConfigurationError, NavigationError};
pub use transition_helper::{
    Decision, GestureEvent, GestureKind, TransitionHelper, COMPLETION_THRESHOLD,
};
pub use unpop_stack::UnpopStack;
