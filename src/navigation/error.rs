use crate::navigation::ControllerId;
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum NavigationError {
    #[error("A transition is still in flight on controller {0}")]
    TransitionInFlight(ControllerId),
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ConfigurationError {
    #[error("The maximum unpop depth must be a positive number")]
    ZeroUnpopDepth,
}
