use crate::navigation::{
    ControllerId, GestureEvent, NavigationController, NavigationError, TransitionContext,
    TransitionHelper, UnpopStack,
};
use log::{debug, info, warn};
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

pub enum PopPolicy<C: NavigationController> {
    /// The closure performs the pop itself and reports whether it happened.
    CallerControlled(Box<dyn FnMut(&Navigator<C>) -> bool>),
    DefaultImmediatePop,
}

struct Shared<C: NavigationController> {
    id: ControllerId,
    controller: RefCell<C>,
    unpop_stack: RefCell<Option<UnpopStack<C::Screen>>>,
    in_flight: Cell<bool>,
}

impl<C: NavigationController> Shared<C> {
    fn with_unpop_stack(&self, f: impl FnOnce(&mut UnpopStack<C::Screen>)) {
        if let Some(stack) = self.unpop_stack.borrow_mut().as_mut() {
            f(stack);
        }
    }
}

pub struct Navigator<C: NavigationController> {
    shared: Rc<Shared<C>>,
}

impl<C: NavigationController> Clone for Navigator<C> {
    fn clone(&self) -> Self {
        Navigator {
            shared: self.shared.clone(),
        }
    }
}

struct WeakNavigator<C: NavigationController> {
    shared: Weak<Shared<C>>,
}

impl<C: NavigationController> WeakNavigator<C> {
    fn upgrade(&self) -> Option<Navigator<C>> {
        self.shared.upgrade().map(|shared| Navigator { shared })
    }
}

impl<C> Navigator<C>
where
    C: NavigationController + 'static,
{
    fn new(controller: C) -> Self {
        Navigator {
            shared: Rc::new(Shared {
                id: ControllerId::new(),
                controller: RefCell::new(controller),
                unpop_stack: RefCell::new(None),
                in_flight: Cell::new(false),
            }),
        }
    }

    fn downgrade(&self) -> WeakNavigator<C> {
        WeakNavigator {
            shared: Rc::downgrade(&self.shared),
        }
    }

    pub fn id(&self) -> ControllerId {
        self.shared.id
    }

    pub fn controller(&self) -> Ref<'_, C> {
        self.shared.controller.borrow()
    }

    pub fn controller_mut(&self) -> RefMut<'_, C> {
        self.shared.controller.borrow_mut()
    }

    pub fn is_transition_in_flight(&self) -> bool {
        self.shared.in_flight.get()
    }

    fn ensure_idle(&self) -> Result<(), NavigationError> {
        if self.is_transition_in_flight() {
            warn!("Rejecting navigation on controller {}, a transition is in flight", self.id());
            return Err(NavigationError::TransitionInFlight(self.id()));
        }
        Ok(())
    }

    pub fn push(&self, screen: C::Screen, animated: bool) -> Result<(), NavigationError> {
        self.ensure_idle()?;
        self.controller_mut().push_screen(screen, animated);
        self.shared.with_unpop_stack(|stack| stack.clear());
        self.on_animation_completion(|_| {});
        debug!("Pushed screen on controller {}", self.id());
        Ok(())
    }

    pub fn pop(&self, animated: bool) -> Result<Option<C::Screen>, NavigationError> {
        self.ensure_idle()?;
        let popped = self.controller_mut().pop_screen(animated);
        if let Some(screen) = &popped {
            let screen = screen.clone();
            let weak = Rc::downgrade(&self.shared);
            self.on_animation_completion(move |succeeded| {
                if !succeeded {
                    return;
                }
                if let Some(shared) = weak.upgrade() {
                    shared.with_unpop_stack(|stack| stack.push(screen));
                }
            });
            debug!("Popped screen on controller {}", self.id());
        }
        Ok(popped)
    }

    /// Returns `Ok(false)` when there is nothing to unpop.
    pub fn unpop(&self) -> Result<bool, NavigationError> {
        self.ensure_idle()?;
        let screen = self
            .shared
            .unpop_stack
            .borrow_mut()
            .as_mut()
            .and_then(|stack| stack.pop());
        let Some(screen) = screen else {
            return Ok(false);
        };
        self.controller_mut().push_screen(screen.clone(), true);
        let weak = Rc::downgrade(&self.shared);
        self.on_animation_completion(move |succeeded| {
            if succeeded {
                return;
            }
            if let Some(shared) = weak.upgrade() {
                debug!("Unpop was cancelled on controller {}, restoring screen", shared.id);
                shared.with_unpop_stack(|stack| stack.push(screen));
            }
        });
        debug!("Unpopped screen on controller {}", self.id());
        Ok(true)
    }

    pub fn can_unpop(&self) -> bool {
        self.unpop_count() > 0
    }

    pub fn unpop_count(&self) -> usize {
        self.shared
            .unpop_stack
            .borrow()
            .as_ref()
            .map(UnpopStack::count)
            .unwrap_or(0)
    }

    // oldest first
    pub fn unpop_screens(&self) -> Vec<C::Screen> {
        self.shared
            .unpop_stack
            .borrow()
            .as_ref()
            .map(|stack| stack.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn install_unpop_stack(&self, stack: UnpopStack<C::Screen>) {
        self.shared.unpop_stack.replace(Some(stack));
    }

    /// Calls `completion` with `true` unless the running transition gets
    /// cancelled. Never calls it when no animated transition is running.
    fn on_animation_completion<F>(&self, completion: F)
    where
        F: FnOnce(bool) + 'static,
    {
        let weak = Rc::downgrade(&self.shared);
        self.shared.in_flight.set(true);
        let registered = self.controller_mut().on_transition_end(Box::new(move |context: TransitionContext| {
            if let Some(shared) = weak.upgrade() {
                shared.in_flight.set(false);
            }
            completion(!context.is_cancelled());
        }));
        if !registered {
            self.shared.in_flight.set(false);
        }
    }
}

pub struct NavigationCoordinator<C: NavigationController> {
    navigator: Navigator<C>,
    helper: Option<TransitionHelper>,
}

impl<C> NavigationCoordinator<C>
where
    C: NavigationController + 'static,
{
    pub fn new(controller: C) -> Self {
        NavigationCoordinator {
            navigator: Navigator::new(controller),
            helper: None,
        }
    }

    pub fn navigator(&self) -> &Navigator<C> {
        &self.navigator
    }

    pub fn helper(&self) -> Option<&TransitionHelper> {
        self.helper.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.helper.is_some()
    }

    pub fn add_custom_transitioning(&mut self, mut helper: TransitionHelper, pop_policy: PopPolicy<C>) {
        if self.helper.is_some() {
            debug!("Custom transitioning is already enabled on controller {}", self.navigator.id());
            return;
        }
        let id = self.navigator.id();
        self.navigator.controller_mut().set_delegate(Some(helper.delegate()));

        let weak = self.navigator.downgrade();
        match pop_policy {
            PopPolicy::CallerControlled(mut decide) => {
                helper.attach_dismiss_gestures(id, move || {
                    weak.upgrade().map(|navigator| decide(&navigator)).unwrap_or(false)
                });
            }
            PopPolicy::DefaultImmediatePop => {
                helper.attach_dismiss_gestures(id, move || {
                    weak.upgrade()
                        .map(|navigator| navigator.pop(true).is_ok())
                        .unwrap_or(false)
                });
            }
        }

        if let Some(unpop) = helper.configuration().unpop {
            self.navigator.install_unpop_stack(UnpopStack::new(unpop.max_depth));
            let weak = self.navigator.downgrade();
            helper.attach_unpop_gesture(id, move || {
                weak.upgrade()
                    .map(|navigator| navigator.unpop().unwrap_or(false))
                    .unwrap_or(false)
            });
        }

        info!(
            "Enabled custom transitioning on controller {} (unpop: {})",
            id,
            helper.configuration().is_unpop_enabled()
        );
        self.helper = Some(helper);
    }

    // the unpop history is kept
    pub fn remove_custom_transitioning(&mut self) {
        let Some(mut helper) = self.helper.take() else {
            return;
        };
        let delegate = helper.delegate();
        {
            let mut controller = self.navigator.controller_mut();
            if controller
                .delegate()
                .is_some_and(|installed| Rc::ptr_eq(&installed, &delegate))
            {
                controller.set_delegate(None);
            }
        }
        helper.detach_dismiss_gestures();
        helper.detach_unpop_gesture();
        info!("Disabled custom transitioning on controller {}", self.navigator.id());
    }

    pub fn handle_gesture(&mut self, event: GestureEvent) -> bool {
        match self.helper.as_mut() {
            Some(helper) => helper.handle_gesture(event),
            None => false,
        }
    }

    pub fn push(&self, screen: C::Screen, animated: bool) -> Result<(), NavigationError> {
        self.navigator.push(screen, animated)
    }

    pub fn pop(&self, animated: bool) -> Result<Option<C::Screen>, NavigationError> {
        self.navigator.pop(animated)
    }

    pub fn can_unpop(&self) -> bool {
        self.navigator.can_unpop()
    }
}
