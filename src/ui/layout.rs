use std::rc::Rc;

use ratatui::layout::{Constraint, Layout, Rect};

/// Splits `area` into `count` equal-width columns that are separated
/// by `spacing` cells.
pub fn columns(area: Rect, count: usize, spacing: u16) -> Rc<[Rect]> {
    if count == 0 {
        return Rc::new([]);
    }

    Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count])
        .spacing(spacing)
        .split(area)
}

pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);

    center
}

pub fn fill() -> Layout {
    Layout::vertical([Constraint::Fill(1)])
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn columns_should_split_area_evenly() {
        let area = Rect::new(0, 0, 30, 10);
        let split = columns(area, 3, 0);

        assert_eq!(split.len(), 3);
        assert_eq!(split.iter().map(|rect| rect.width).sum::<u16>(), 30);

        for rect in split.iter() {
            assert_eq!(rect.width, 10);
            assert_eq!(rect.height, 10);
        }
    }

    #[test]
    fn columns_should_leave_gaps_between_areas() {
        let area = Rect::new(0, 0, 32, 10);
        let split = columns(area, 3, 2);

        assert_eq!(split.len(), 3);

        for pair in split.windows(2) {
            assert_eq!(pair[1].x, pair[0].x + pair[0].width + 2);
        }
    }

    #[test]
    fn zero_columns_should_produce_no_areas() {
        let split = columns(Rect::new(0, 0, 30, 10), 0, 1);
        assert!(split.is_empty());
    }

    #[test]
    fn centered_rect_should_stay_within_area() {
        let area = Rect::new(0, 0, 100, 40);
        let center = centered_rect(area, 50, 10);

        assert_eq!(center.width, 50);
        assert_eq!(center.height, 4);
        assert!(center.x >= area.x && center.right() <= area.right());
        assert!(center.y >= area.y && center.bottom() <= area.bottom());
    }
}
