use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use swipenav::navigation::GestureKind;

pub trait EventExt {
    fn is_key(&self, code: KeyCode) -> bool;
    fn is_stop(&self) -> bool;
    fn swipe_shortcut(&self) -> Option<GestureKind>;
}

impl EventExt for Event {
    fn is_key(&self, code: KeyCode) -> bool {
        match self {
            Event::Key(key_event) => key_event.kind == KeyEventKind::Press && key_event.code == code,
            _ => false,
        }
    }

    fn is_stop(&self) -> bool {
        match self {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                key_event.code == KeyCode::Char('q')
                    || (key_event.code == KeyCode::Char('c')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL))
            }
            _ => false,
        }
    }

    fn swipe_shortcut(&self) -> Option<GestureKind> {
        if self.is_key(KeyCode::Left) {
            Some(GestureKind::Dismiss)
        } else if self.is_key(KeyCode::Right) {
            Some(GestureKind::Unpop)
        } else {
            None
        }
    }
}
