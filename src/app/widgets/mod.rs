mod stack_view;

pub use stack_view::{StackView, TransitionState};
