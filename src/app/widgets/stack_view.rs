use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::prelude::{Line, Span, Stylize, Widget};
use ratatui::widgets::{Block, Gauge, List, ListItem, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const HELP: &str =
    " Enter push  Backspace pop  ←/→ swipe  drag from edges  Esc cancel  t toggle transitions  q quit ";

pub struct TransitionState {
    pub label: String,
    pub progress: f64,
    pub interactive: bool,
}

pub struct StackView {
    pub screens: Vec<String>,
    pub unpop: Vec<String>,
    pub max_unpop_depth: Option<usize>,
    pub transition: Option<TransitionState>,
    pub enabled: bool,
    pub status: String,
}

fn truncate(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    // one column goes to the ellipsis
    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        used += char_width;
        truncated.push(c);
    }
    if width > 0 {
        truncated.push('…');
    }
    truncated
}

impl StackView {
    fn items(screens: &[String], width: u16, highlight_last: bool) -> Vec<ListItem<'static>> {
        let width = usize::from(width.saturating_sub(4));
        let count = screens.len();
        screens
            .iter()
            .enumerate()
            .rev()
            .map(|(index, screen)| {
                let text = truncate(screen, width);
                if highlight_last && index + 1 == count {
                    ListItem::new(Line::from(Span::from(text).bold().reversed()))
                } else {
                    ListItem::new(Line::from(text))
                }
            })
            .collect()
    }
}

impl Widget for StackView {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [main_area, transition_area, status_area, help_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let [stack_area, unpop_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(main_area);

        let title = if self.enabled {
            " Navigation stack (custom transitions) "
        } else {
            " Navigation stack "
        };
        let stack_block = Block::bordered().light_blue().title(Span::from(title).bold());
        List::new(Self::items(&self.screens, stack_area.width, true))
            .block(stack_block)
            .render(stack_area, buf);

        let unpop_title = match self.max_unpop_depth {
            Some(depth) => format!(" Unpop {}/{} ", self.unpop.len(), depth),
            None => " Unpop disabled ".to_string(),
        };
        let unpop_block = Block::bordered().magenta().title(Span::from(unpop_title).bold());
        List::new(Self::items(&self.unpop, unpop_area.width, false))
            .block(unpop_block)
            .render(unpop_area, buf);

        let transition_block = Block::bordered().title(" Transition ");
        match &self.transition {
            Some(transition) => {
                let mode = if transition.interactive { "interactive" } else { "animated" };
                Gauge::default()
                    .block(transition_block)
                    .gauge_style(ratatui::style::Style::default().cyan())
                    .label(format!("{} ({})", transition.label, mode))
                    .ratio(transition.progress.clamp(0.0, 1.0))
                    .render(transition_area, buf);
            }
            None => {
                Paragraph::new("idle")
                    .block(transition_block)
                    .alignment(Alignment::Center)
                    .render(transition_area, buf);
            }
        }

        Paragraph::new(truncate(&self.status, usize::from(status_area.width)))
            .render(status_area, buf);
        Paragraph::new(Line::from(Span::from(HELP).reversed()))
            .alignment(Alignment::Center)
            .render(help_area, buf);
    }
}
