mod edge_drag;
mod screen;
pub mod settings;
mod widgets;

use crate::app::edge_drag::EdgeDrag;
use crate::app::screen::DemoScreen;
use crate::app::settings::Settings;
use crate::app::widgets::{StackView, TransitionState};
use crate::cross_term::receive_cross_term_events;
use crate::event_ext::EventExt;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, KeyCode};
use log::{debug, info};
use ratatui::DefaultTerminal;
use ratatui::Frame;
use std::io::stdout;
use std::time::Duration;
use swipenav::navigation::host::StackController;
use swipenav::navigation::{
    GestureEvent, GestureKind, NavigationCoordinator, NavigationOperation, PopPolicy,
    TransitionHelper,
};
use tokio::select;
use tokio_util::sync::CancellationToken;

const TICK: Duration = Duration::from_millis(16);

type Coordinator = NavigationCoordinator<StackController<DemoScreen>>;

pub struct SwipenavApp {
    coordinator: Coordinator,
    settings: Settings,
    drag: EdgeDrag,
    pushed: usize,
    status: String,
    pub is_finished: bool,
}

impl SwipenavApp {
    pub fn new(settings: Settings) -> Self {
        let mut app = SwipenavApp {
            coordinator: NavigationCoordinator::new(StackController::new(DemoScreen::root())),
            settings,
            drag: EdgeDrag::default(),
            pushed: 0,
            status: "Ready".to_string(),
            is_finished: false,
        };
        app.enable_transitions();
        app
    }

    fn enable_transitions(&mut self) {
        let helper = TransitionHelper::new(self.settings.transitions);
        self.coordinator
            .add_custom_transitioning(helper, PopPolicy::DefaultImmediatePop);
    }

    fn toggle_transitions(&mut self) {
        if self.coordinator.is_enabled() {
            self.drag.reset();
            self.coordinator.remove_custom_transitioning();
            self.status = "Custom transitions disabled".to_string();
        } else {
            self.enable_transitions();
            self.status = "Custom transitions enabled".to_string();
        }
    }

    fn push_next(&mut self) {
        self.pushed += 1;
        let screen = DemoScreen::numbered(self.pushed);
        let title = screen.title.clone();
        self.status = match self.coordinator.push(screen, true) {
            Ok(()) => format!("Pushed {title}"),
            Err(e) => e.to_string(),
        };
    }

    fn pop(&mut self) {
        self.status = match self.coordinator.pop(true) {
            Ok(Some(screen)) => format!("Popped {}", screen.title),
            Ok(None) => "Nothing to pop".to_string(),
            Err(e) => e.to_string(),
        };
    }

    fn cancel_transition(&mut self) {
        let mut controller = self.coordinator.navigator().controller_mut();
        if controller.transition().is_some_and(|t| !t.is_interactive()) {
            controller.cancel_transition();
            drop(controller);
            self.status = "Transition cancelled".to_string();
        }
    }

    fn gesture(&mut self, event: GestureEvent) {
        let accepted = self.coordinator.handle_gesture(event);
        if let GestureEvent::Began(kind) = event {
            if accepted {
                self.status = format!("{:?} gesture started", kind);
            } else {
                self.drag.reset();
                self.status = format!("{:?} gesture refused", kind);
            }
        }
    }

    fn swipe(&mut self, kind: GestureKind) {
        self.gesture(GestureEvent::Began(kind));
        self.gesture(GestureEvent::Changed(kind, 1.0));
        self.gesture(GestureEvent::Ended(kind));
    }

    pub fn handle_event(&mut self, event: &Event, width: u16) {
        if event.is_stop() {
            self.is_finished = true;
            return;
        }
        if let Event::Mouse(mouse_event) = event {
            if let Some(gesture) = self.drag.handle_mouse(mouse_event, width) {
                self.gesture(gesture);
            }
            return;
        }
        if let Some(kind) = event.swipe_shortcut() {
            if !self.drag.is_dragging() {
                self.swipe(kind);
            }
        } else if event.is_key(KeyCode::Enter) {
            self.push_next();
        } else if event.is_key(KeyCode::Backspace) {
            self.pop();
        } else if event.is_key(KeyCode::Esc) {
            self.cancel_transition();
        } else if event.is_key(KeyCode::Char('t')) {
            self.toggle_transitions();
        }
    }

    pub fn tick(&mut self, elapsed: Duration) {
        let delta = elapsed.as_secs_f64() * 1000.0 / self.settings.animation_millis.max(1) as f64;
        self.coordinator.navigator().controller_mut().advance(delta);
    }

    fn stack_view(&self) -> StackView {
        let navigator = self.coordinator.navigator();
        let controller = navigator.controller();
        let transition = controller.transition().map(|transition| {
            let verb = match transition.operation() {
                NavigationOperation::Push => "Pushing",
                NavigationOperation::Pop => "Popping",
            };
            TransitionState {
                label: format!("{verb} {}", transition.screen().title),
                progress: transition.progress(),
                interactive: transition.is_interactive(),
            }
        });
        StackView {
            screens: controller.screens().map(DemoScreen::label).collect(),
            unpop: navigator.unpop_screens().iter().map(DemoScreen::label).collect(),
            max_unpop_depth: self
                .settings
                .transitions
                .unpop
                .map(|unpop| unpop.max_depth.get()),
            transition,
            enabled: self.coordinator.is_enabled(),
            status: self.status.clone(),
        }
    }

    pub fn view(&self, frame: &mut Frame) {
        frame.render_widget(self.stack_view(), frame.area());
    }

    async fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        let cancellation_token = CancellationToken::new();
        let mut events = receive_cross_term_events(cancellation_token.clone());
        let mut ticks = tokio::time::interval(TICK);
        let _guard = cancellation_token.drop_guard();

        while !self.is_finished {
            terminal.draw(|frame| self.view(frame))?;
            select! {
                event = events.recv() => {
                    let Some(event) = event else {
                        info!("Terminal event stream closed");
                        break;
                    };
                    let width = terminal.size()?.width;
                    debug!("Terminal event {:?}", event);
                    self.handle_event(&event, width);
                }
                _ = ticks.tick() => self.tick(TICK),
            }
        }
        Ok(())
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut terminal = ratatui::init();
        crossterm::execute!(stdout(), EnableMouseCapture)?;
        let result = self.event_loop(&mut terminal).await;
        crossterm::execute!(stdout(), DisableMouseCapture)?;
        ratatui::restore();
        result
    }
}
