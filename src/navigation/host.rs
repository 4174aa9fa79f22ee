use crate::navigation::{
    InteractionOutcome, NavigationController, NavigationOperation, TransitionCompletion,
    TransitionContext, TransitionDelegate,
};
use log::{debug, warn};
use std::rc::Rc;

pub struct Transition<S> {
    operation: NavigationOperation,
    screen: S,
    progress: f64,
    interactive: bool,
    completions: Vec<TransitionCompletion>,
}

impl<S> Transition<S> {
    pub fn operation(&self) -> NavigationOperation {
        self.operation
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// The stack reflects an animated operation as soon as it starts;
/// cancelling the transition reverts it.
pub struct StackController<S> {
    root: S,
    stack: Vec<S>,
    delegate: Option<Rc<TransitionDelegate>>,
    transition: Option<Transition<S>>,
}

impl<S: Clone + 'static> StackController<S> {
    pub fn new(root: S) -> Self {
        StackController {
            root,
            stack: vec![],
            delegate: None,
            transition: None,
        }
    }

    pub fn len(&self) -> usize {
        self.stack.len() + 1
    }

    // excludes the root
    pub fn top(&self) -> Option<&S> {
        self.stack.last()
    }

    pub fn visible(&self) -> &S {
        self.stack.last().unwrap_or(&self.root)
    }

    pub fn screens(&self) -> impl Iterator<Item = &S> {
        std::iter::once(&self.root).chain(self.stack.iter())
    }

    pub fn transition(&self) -> Option<&Transition<S>> {
        self.transition.as_ref()
    }

    fn begin(&mut self, operation: NavigationOperation, screen: S) {
        if self.transition.is_some() {
            warn!("Starting a {:?} while another transition is pending, completing it first", operation);
            self.complete_transition();
        }
        let interactive = self
            .delegate
            .as_ref()
            .and_then(|delegate| delegate.interaction_for(operation))
            .is_some_and(|interaction| interaction.claim());
        debug!("Beginning {:?} transition (interactive: {})", operation, interactive);
        self.transition = Some(Transition {
            operation,
            screen,
            progress: 0.0,
            interactive,
            completions: vec![],
        });
    }

    /// Non-interactive transitions advance by `delta`; interactive ones
    /// follow the gesture and settle once it has been released.
    pub fn advance(&mut self, delta: f64) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        if transition.interactive {
            let Some(interaction) = self.delegate.as_ref().map(|d| d.interaction()) else {
                // delegate was removed mid-gesture
                self.cancel_transition();
                return;
            };
            transition.progress = interaction.percent_complete();
            match interaction.take_outcome() {
                Some(InteractionOutcome::Finished) => self.complete_transition(),
                Some(InteractionOutcome::Cancelled) => self.cancel_transition(),
                None => {}
            }
        } else {
            transition.progress = (transition.progress + delta).min(1.0);
            if transition.progress >= 1.0 {
                self.complete_transition();
            }
        }
    }

    pub fn complete_transition(&mut self) {
        self.settle(TransitionContext::completed());
    }

    pub fn cancel_transition(&mut self) {
        self.settle(TransitionContext::cancelled());
    }

    fn settle(&mut self, context: TransitionContext) {
        let Some(transition) = self.transition.take() else {
            return;
        };
        if context.is_cancelled() {
            match transition.operation {
                NavigationOperation::Push => {
                    self.stack.pop();
                }
                NavigationOperation::Pop => self.stack.push(transition.screen.clone()),
            }
        }
        debug!(
            "{:?} transition settled (cancelled: {})",
            transition.operation,
            context.is_cancelled()
        );
        for completion in transition.completions {
            completion(context);
        }
    }
}

impl<S: Clone + 'static> NavigationController for StackController<S> {
    type Screen = S;

    fn push_screen(&mut self, screen: S, animated: bool) {
        self.stack.push(screen.clone());
        if animated {
            self.begin(NavigationOperation::Push, screen);
        }
    }

    fn pop_screen(&mut self, animated: bool) -> Option<S> {
        let screen = self.stack.pop()?;
        if animated {
            self.begin(NavigationOperation::Pop, screen.clone());
        }
        Some(screen)
    }

    fn on_transition_end(&mut self, completion: TransitionCompletion) -> bool {
        match self.transition.as_mut() {
            Some(transition) => {
                transition.completions.push(completion);
                true
            }
            None => false,
        }
    }

    fn delegate(&self) -> Option<Rc<TransitionDelegate>> {
        self.delegate.clone()
    }

    fn set_delegate(&mut self, delegate: Option<Rc<TransitionDelegate>>) {
        self.delegate = delegate;
    }
}
