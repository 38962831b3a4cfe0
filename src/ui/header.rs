use crate::config::Strings;
use crate::ui::theme::{ON_PRIMARY, PRIMARY};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Label of the clickable share button at the right end of the header.
pub fn share_label(strings: &Strings) -> String {
    format!("[s] {} ", strings.share)
}

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, strings: &Strings, area: Rect) -> Paragraph<'static> {
        let base = Style::default().fg(ON_PRIMARY).bg(PRIMARY);
        let title = format!(" {}", strings.app_name);
        let share = share_label(strings);

        let content_width = area.width as usize;
        let padding = content_width
            .saturating_sub(title.chars().count())
            .saturating_sub(share.chars().count());

        let line = Line::from(vec![
            Span::styled(title, base.add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(padding), base),
            Span::styled(share, base),
        ]);

        Paragraph::new(line).style(base).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(base),
        )
    }
}
