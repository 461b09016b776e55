use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the form is drawn; wider terminals center it.
pub const FORM_MAX_WIDTH: u16 = 64;

/// Screen regions of the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRegions {
    pub header: Rect,
    pub first_name: Rect,
    pub last_name: Rect,
    pub age: Rect,
    pub buttons: Rect,
    pub result: Rect,
    pub footer: Rect,
}

pub fn form_regions(area: Rect) -> FormRegions {
    let column = centered_column(area, FORM_MAX_WIDTH);
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(column);

    FormRegions {
        header: rows[0],
        first_name: rows[1],
        last_name: rows[2],
        age: rows[3],
        buttons: rows[4],
        result: rows[5],
        footer: rows[6],
    }
}

/// Left and right halves of the button row.
pub fn button_regions(area: Rect) -> (Rect, Rect) {
    let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (halves[0], halves[1])
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_area_centers_form() {
        let regions = form_regions(Rect::new(0, 0, 120, 40));
        assert_eq!(regions.header.width, FORM_MAX_WIDTH);
        assert_eq!(regions.header.x, (120 - FORM_MAX_WIDTH) / 2);
        assert_eq!(regions.first_name.y, 3);
        assert!(regions.result.height >= 3);
        assert!(regions.footer.bottom() <= 40);
    }

    #[test]
    fn narrow_area_uses_full_width() {
        let regions = form_regions(Rect::new(0, 0, 30, 40));
        assert_eq!(regions.age.width, 30);
        assert_eq!(regions.age.x, 0);
    }

    #[test]
    fn buttons_split_evenly() {
        let (create, clear) = button_regions(Rect::new(0, 0, 40, 3));
        assert_eq!(create.width, 20);
        assert_eq!(clear.x, 20);
    }
}
