use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Size of the tappable dessert card.
pub const DESSERT_CARD_WIDTH: u16 = 26;
pub const DESSERT_CARD_HEIGHT: u16 = 9;

/// Rows taken by the transaction panel (two lines plus borders).
const INFO_HEIGHT: u16 = 4;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the dessert stage and the transaction panel below it.
pub fn body_regions(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(INFO_HEIGHT)])
        .split(body);
    (chunks[0], chunks[1])
}

/// Tappable dessert card for a full-screen `area`.
pub fn dessert_rect(area: Rect) -> Rect {
    let (_, body, _) = layout_regions(area);
    let (stage, _) = body_regions(body);
    centered_rect_by_size(stage, DESSERT_CARD_WIDTH, DESSERT_CARD_HEIGHT)
}

/// Share button in the header's text row, right-aligned, for a full-screen `area`.
pub fn share_button_rect(area: Rect, label_width: u16) -> Rect {
    let (header, _, _) = layout_regions(area);
    if header.height < 2 {
        return Rect::default();
    }
    let width = label_width.min(header.width);
    Rect {
        x: header.x + header.width - width,
        y: header.y + 1,
        width,
        height: 1,
    }
}

/// Center a `width` x `height` rect inside `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_full_height() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(body.y, 3);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn dessert_card_is_centered_in_stage() {
        let card = dessert_rect(Rect::new(0, 0, 80, 24));
        // stage: y=3, height=14
        assert_eq!(card, Rect::new(27, 5, DESSERT_CARD_WIDTH, DESSERT_CARD_HEIGHT));
    }

    #[test]
    fn share_button_sits_at_right_of_header_row() {
        let button = share_button_rect(Rect::new(0, 0, 80, 24), 10);
        assert_eq!(button, Rect::new(70, 1, 10, 1));
    }

    #[test]
    fn share_button_is_empty_without_header_row() {
        let button = share_button_rect(Rect::new(0, 0, 80, 1), 10);
        assert_eq!(button.area(), 0);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let rect = centered_rect_by_size(Rect::new(2, 2, 10, 4), 20, 8);
        assert_eq!(rect, Rect::new(2, 2, 10, 4));
    }
}
