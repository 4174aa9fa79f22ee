use crate::navigation::{Configuration, ControllerId, TransitionDelegate};
use log::{debug, warn};
use std::rc::Rc;

pub const COMPLETION_THRESHOLD: f64 = 0.5;

pub type Decision = Box<dyn FnMut() -> bool>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GestureKind {
    Dismiss,
    Unpop,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    Began(GestureKind),
    Changed(GestureKind, f64),
    Ended(GestureKind),
    Cancelled(GestureKind),
}

impl GestureEvent {
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureEvent::Began(kind)
            | GestureEvent::Changed(kind, _)
            | GestureEvent::Ended(kind)
            | GestureEvent::Cancelled(kind) => *kind,
        }
    }
}

struct Attachment {
    controller: ControllerId,
    decide: Decision,
}

pub struct TransitionHelper {
    configuration: Configuration,
    delegate: Rc<TransitionDelegate>,
    dismiss: Option<Attachment>,
    unpop: Option<Attachment>,
    live: Option<GestureKind>,
}

impl Default for TransitionHelper {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl TransitionHelper {
    pub fn new(configuration: Configuration) -> Self {
        TransitionHelper {
            configuration,
            delegate: Rc::new(TransitionDelegate::new(configuration.is_unpop_enabled())),
            dismiss: None,
            unpop: None,
            live: None,
        }
    }

    pub fn configuration(&self) -> Configuration {
        self.configuration
    }

    pub fn delegate(&self) -> Rc<TransitionDelegate> {
        self.delegate.clone()
    }

    pub fn attach_dismiss_gestures<F>(&mut self, controller: ControllerId, on_should_pop: F)
    where
        F: FnMut() -> bool + 'static,
    {
        Self::attach(&mut self.dismiss, GestureKind::Dismiss, controller, Box::new(on_should_pop));
    }

    pub fn attach_unpop_gesture<F>(&mut self, controller: ControllerId, on_should_unpop: F)
    where
        F: FnMut() -> bool + 'static,
    {
        Self::attach(&mut self.unpop, GestureKind::Unpop, controller, Box::new(on_should_unpop));
    }

    fn attach(slot: &mut Option<Attachment>, kind: GestureKind, controller: ControllerId, decide: Decision) {
        if let Some(existing) = slot {
            warn!(
                "{:?} gesture is already attached to controller {}, ignoring attachment to {}",
                kind, existing.controller, controller
            );
            return;
        }
        debug!("Attaching {:?} gesture to controller {}", kind, controller);
        *slot = Some(Attachment { controller, decide });
    }

    pub fn detach_dismiss_gestures(&mut self) {
        self.detach(GestureKind::Dismiss);
    }

    pub fn detach_unpop_gesture(&mut self) {
        self.detach(GestureKind::Unpop);
    }

    fn detach(&mut self, kind: GestureKind) {
        if self.live == Some(kind) {
            self.live = None;
            self.delegate.interaction().cancel();
        }
        if self.slot_mut(kind).take().is_some() {
            debug!("Detached {:?} gesture", kind);
        }
    }

    pub fn is_dismiss_attached(&self) -> bool {
        self.dismiss.is_some()
    }

    pub fn is_unpop_attached(&self) -> bool {
        self.unpop.is_some()
    }

    fn slot_mut(&mut self, kind: GestureKind) -> &mut Option<Attachment> {
        match kind {
            GestureKind::Dismiss => &mut self.dismiss,
            GestureKind::Unpop => &mut self.unpop,
        }
    }

    pub fn handle_gesture(&mut self, event: GestureEvent) -> bool {
        let delegate = self.delegate.clone();
        let interaction = delegate.interaction();
        match event {
            GestureEvent::Began(kind) => {
                if self.live.is_some() || interaction.is_busy() {
                    debug!("Ignoring {:?} gesture, another interaction is running", kind);
                    return false;
                }
                let Some(attachment) = self.slot_mut(kind).as_mut() else {
                    return false;
                };
                interaction.begin();
                if (attachment.decide)() {
                    if interaction.is_claimed() {
                        self.live = Some(kind);
                    } else {
                        // accepted without starting a transition; nothing to drive
                        debug!("{:?} gesture started no transition", kind);
                        interaction.abandon();
                    }
                    true
                } else {
                    debug!("{:?} gesture was refused", kind);
                    interaction.abandon();
                    false
                }
            }
            GestureEvent::Changed(kind, progress) if self.live == Some(kind) => {
                interaction.update(progress);
                true
            }
            GestureEvent::Ended(kind) if self.live == Some(kind) => {
                self.live = None;
                if interaction.percent_complete() >= COMPLETION_THRESHOLD {
                    interaction.finish();
                } else {
                    interaction.cancel();
                }
                true
            }
            GestureEvent::Cancelled(kind) if self.live == Some(kind) => {
                self.live = None;
                interaction.cancel();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::navigation::{
        Configuration, ControllerId, GestureEvent, GestureKind, InteractionOutcome,
        NavigationOperation, TransitionDelegate, TransitionHelper,
    };
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_decision(result: bool) -> (Rc<Cell<u32>>, impl FnMut() -> bool + 'static) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        (calls, move || {
            counter.set(counter.get() + 1);
            result
        })
    }

    #[test]
    fn test_began_invokes_the_decision_of_the_matching_gesture() {
        let mut sut = TransitionHelper::default();
        let (calls, decide) = counting_decision(true);
        sut.attach_dismiss_gestures(ControllerId::new(), decide);
        assert!(sut.handle_gesture(GestureEvent::Began(GestureKind::Dismiss)));
        assert_eq!(1, calls.get());
    }

    #[test]
    fn test_gesture_that_is_not_attached_is_ignored() {
        let mut sut = TransitionHelper::default();
        let (calls, decide) = counting_decision(true);
        sut.attach_dismiss_gestures(ControllerId::new(), decide);
        assert!(!sut.handle_gesture(GestureEvent::Began(GestureKind::Unpop)));
        assert_eq!(0, calls.get());
    }

    #[test]
    fn test_second_attachment_is_ignored() {
        let mut sut = TransitionHelper::default();
        let (first_calls, first) = counting_decision(true);
        let (second_calls, second) = counting_decision(true);
        sut.attach_dismiss_gestures(ControllerId::new(), first);
        sut.attach_dismiss_gestures(ControllerId::new(), second);
        sut.handle_gesture(GestureEvent::Began(GestureKind::Dismiss));
        assert_eq!(1, first_calls.get());
        assert_eq!(0, second_calls.get());
    }

    #[test]
    fn test_detach_without_attach_is_a_no_op() {
        let mut sut = TransitionHelper::default();
        sut.detach_dismiss_gestures();
        sut.detach_unpop_gesture();
        sut.detach_unpop_gesture();
        assert!(!sut.is_dismiss_attached());
        assert!(!sut.is_unpop_attached());
    }

    #[test]
    fn test_refused_gesture_does_not_start_an_interaction() {
        let mut sut = TransitionHelper::default();
        let (_, decide) = counting_decision(false);
        sut.attach_dismiss_gestures(ControllerId::new(), decide);
        assert!(!sut.handle_gesture(GestureEvent::Began(GestureKind::Dismiss)));
        assert!(!sut.delegate().interaction().is_active());
        assert!(!sut.handle_gesture(GestureEvent::Ended(GestureKind::Dismiss)));
    }

    fn claiming_decision(delegate: Rc<TransitionDelegate>) -> (Rc<Cell<u32>>, impl FnMut() -> bool + 'static) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        (calls, move || {
            counter.set(counter.get() + 1);
            delegate.interaction_for(NavigationOperation::Pop).is_some_and(|i| i.claim())
        })
    }

    fn claiming_helper() -> (TransitionHelper, Rc<Cell<u32>>) {
        let mut sut = TransitionHelper::default();
        let (calls, decide) = claiming_decision(sut.delegate());
        sut.attach_dismiss_gestures(ControllerId::new(), decide);
        (sut, calls)
    }

    #[test]
    fn test_release_past_threshold_finishes_the_interaction() {
        let (mut sut, _) = claiming_helper();
        let delegate = sut.delegate();
        assert!(sut.handle_gesture(GestureEvent::Began(GestureKind::Dismiss)));
        assert!(sut.handle_gesture(GestureEvent::Changed(GestureKind::Dismiss, 0.7)));
        assert!(sut.handle_gesture(GestureEvent::Ended(GestureKind::Dismiss)));
        assert_eq!(Some(InteractionOutcome::Finished), delegate.interaction().take_outcome());
    }

    #[test]
    fn test_release_before_threshold_cancels_the_interaction() {
        let (mut sut, _) = claiming_helper();
        let delegate = sut.delegate();
        sut.handle_gesture(GestureEvent::Began(GestureKind::Dismiss));
        sut.handle_gesture(GestureEvent::Changed(GestureKind::Dismiss, 0.2));
        sut.handle_gesture(GestureEvent::Ended(GestureKind::Dismiss));
        assert_eq!(Some(InteractionOutcome::Cancelled), delegate.interaction().take_outcome());
    }

    #[test]
    fn test_new_gesture_waits_until_the_outcome_was_consumed() {
        let (mut sut, calls) = claiming_helper();
        let delegate = sut.delegate();
        sut.handle_gesture(GestureEvent::Began(GestureKind::Dismiss));
        sut.handle_gesture(GestureEvent::Cancelled(GestureKind::Dismiss));
        assert!(!sut.handle_gesture(GestureEvent::Began(GestureKind::Dismiss)));
        delegate.interaction().take_outcome();
        assert!(sut.handle_gesture(GestureEvent::Began(GestureKind::Dismiss)));
        assert_eq!(2, calls.get());
    }

    #[test]
    fn test_accepted_gesture_without_transition_leaves_no_interaction() {
        let mut sut = TransitionHelper::new(Configuration::with_unpop(2).unwrap());
        let (_, decide) = counting_decision(true);
        sut.attach_dismiss_gestures(ControllerId::new(), decide);
        let delegate = sut.delegate();
        assert!(sut.handle_gesture(GestureEvent::Began(GestureKind::Dismiss)));
        assert!(!delegate.interaction().is_active());
        assert!(delegate.interaction_for(NavigationOperation::Push).is_none());
        assert!(!sut.handle_gesture(GestureEvent::Cancelled(GestureKind::Dismiss)));
    }

    #[test]
    fn test_push_interaction_is_offered_only_with_unpop_configured() {
        let helper = TransitionHelper::new(Configuration::with_unpop(2).unwrap());
        helper.delegate().interaction().begin();
        assert!(helper.delegate().interaction_for(NavigationOperation::Push).is_some());

        let helper = TransitionHelper::default();
        helper.delegate().interaction().begin();
        assert!(helper.delegate().interaction_for(NavigationOperation::Push).is_none());
    }
}
