use mathdrill::InputStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
};

/// A `width` x `height` rect centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Border style of the answer field
pub fn status_style(status: InputStatus) -> Style {
    match status {
        InputStatus::Idle => Style::default(),
        InputStatus::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        InputStatus::Incorrect | InputStatus::Error => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 4, area), Rect::new(20, 10, 40, 4));
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(2, 1, 10, 3);
        assert_eq!(centered_rect(50, 9, area), area);
    }

    #[test]
    fn test_status_style() {
        assert_eq!(status_style(InputStatus::Idle), Style::default());
        assert_eq!(status_style(InputStatus::Correct).fg, Some(Color::Green));
        assert_eq!(status_style(InputStatus::Error).fg, Some(Color::Red));
        assert_eq!(status_style(InputStatus::Incorrect).fg, Some(Color::Red));
    }
}
