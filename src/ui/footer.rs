use crate::ui::app::{Toast, ToastKind};
use crate::ui::theme::{FOOTER_TEXT, GLOBAL_BORDER, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, toast: Option<&Toast>) -> Paragraph<'static> {
        let text_style = Style::default().fg(FOOTER_TEXT).add_modifier(Modifier::DIM);

        let (message, message_style) = match toast {
            Some(toast) => {
                let color = match toast.kind {
                    ToastKind::Info => STATUS_OK,
                    ToastKind::Error => STATUS_ERROR,
                };
                (format!(" {}", toast.message), Style::default().fg(color))
            }
            None => (
                " Space/Enter/Click: Sell │ S: Share │ Ctrl+R: Reset │ Q: Quit".to_string(),
                text_style,
            ),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let message_width = message.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(message_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(message, message_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
