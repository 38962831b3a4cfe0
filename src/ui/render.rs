use crate::ui::app::App;
use crate::ui::art::{display_name, glyph};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{
    body_regions, centered_rect_by_size, layout_regions, DESSERT_CARD_HEIGHT, DESSERT_CARD_WIDTH,
};
use crate::ui::theme::{CARD_BORDER, ON_SECONDARY_CONTAINER, SECONDARY_CONTAINER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.strings(), header), header);
    frame.render_widget(Clear, body);

    let (stage, info) = body_regions(body);
    draw_dessert(frame, app, stage);
    draw_transaction_info(frame, app, info);

    frame.render_widget(Footer::new().widget(footer, app.toast()), footer);
}

fn draw_dessert(frame: &mut Frame<'_>, app: &App, stage: Rect) {
    let item = app.sales().active_item();
    let card = centered_rect_by_size(stage, DESSERT_CARD_WIDTH, DESSERT_CARD_HEIGHT);

    let lines = vec![
        Line::from(""),
        Line::from(glyph(&item.image_ref)),
        Line::from(""),
        Line::from(Span::styled(
            display_name(&item.image_ref),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("${} each", item.unit_price)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        card,
    );
}

fn draw_transaction_info(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let strings = app.strings();
    let model = app.sales().render_model();
    let style = Style::default()
        .fg(ON_SECONDARY_CONTAINER)
        .bg(SECONDARY_CONTAINER);
    let content_width = area.width.saturating_sub(2) as usize;

    let lines = vec![
        spread_line(
            &strings.dessert_sold,
            &model.units_sold.to_string(),
            content_width,
            style,
        ),
        spread_line(
            &strings.total_revenue,
            &format!("${}", model.total_revenue),
            content_width,
            style.add_modifier(Modifier::BOLD),
        ),
    ];

    let block = Block::default().borders(Borders::ALL).border_style(style);
    frame.render_widget(Paragraph::new(lines).style(style).block(block), area);
}

/// Label on the left, value on the right.
fn spread_line(label: &str, value: &str, width: usize, style: Style) -> Line<'static> {
    let label = format!(" {}", label);
    let value = format!("{} ", value);
    let padding = width
        .saturating_sub(label.chars().count())
        .saturating_sub(value.chars().count());
    Line::from(vec![
        Span::styled(label, style),
        Span::styled(" ".repeat(padding), style),
        Span::styled(value, style),
    ])
}
