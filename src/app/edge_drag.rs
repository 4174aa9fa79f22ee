use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use swipenav::navigation::{GestureEvent, GestureKind};

pub const EDGE_WIDTH: u16 = 3;

struct Drag {
    kind: GestureKind,
    start_column: u16,
}

#[derive(Default)]
pub struct EdgeDrag {
    drag: Option<Drag>,
}

impl EdgeDrag {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn handle_mouse(&mut self, event: &MouseEvent, width: u16) -> Option<GestureEvent> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let kind = if event.column < EDGE_WIDTH {
                    GestureKind::Dismiss
                } else if event.column.saturating_add(EDGE_WIDTH) >= width {
                    GestureKind::Unpop
                } else {
                    return None;
                };
                self.drag = Some(Drag {
                    kind,
                    start_column: event.column,
                });
                Some(GestureEvent::Began(kind))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let drag = self.drag.as_ref()?;
                let distance = match drag.kind {
                    GestureKind::Dismiss => event.column.saturating_sub(drag.start_column),
                    GestureKind::Unpop => drag.start_column.saturating_sub(event.column),
                };
                let progress = f64::from(distance) / f64::from(width.max(1));
                Some(GestureEvent::Changed(drag.kind, progress))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag.take().map(|drag| GestureEvent::Ended(drag.kind))
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::EdgeDrag;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use swipenav::navigation::{GestureEvent, GestureKind};

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 5,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_drag_from_left_edge_is_a_dismiss_gesture() {
        let mut sut = EdgeDrag::default();
        assert_eq!(
            Some(GestureEvent::Began(GestureKind::Dismiss)),
            sut.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 0), 100)
        );
        assert_eq!(
            Some(GestureEvent::Changed(GestureKind::Dismiss, 0.5)),
            sut.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 50), 100)
        );
        assert_eq!(
            Some(GestureEvent::Ended(GestureKind::Dismiss)),
            sut.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), 50), 100)
        );
        assert!(!sut.is_dragging());
    }

    #[test]
    fn test_drag_from_right_edge_is_an_unpop_gesture() {
        let mut sut = EdgeDrag::default();
        sut.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 99), 100);
        assert_eq!(
            Some(GestureEvent::Changed(GestureKind::Unpop, 0.24)),
            sut.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 75), 100)
        );
    }

    #[test]
    fn test_drag_from_the_middle_is_ignored() {
        let mut sut = EdgeDrag::default();
        assert_eq!(None, sut.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 40), 100));
        assert_eq!(None, sut.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 60), 100));
    }
}
