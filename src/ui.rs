pub mod layout;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::App;
use layout::{centered_rect, status_style};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;
const ANSWER_WIDTH: u16 = 30;
const POPUP_PADDING: u16 = 4;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.session;

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Min(0),    // padding
                Constraint::Length(1), // equation
                Constraint::Length(1), // padding
                Constraint::Length(3), // answer field
                Constraint::Length(2), // feedback
                Constraint::Min(0),    // padding
                Constraint::Length(1), // settings
                Constraint::Length(1), // legend
            ])
            .split(area);

        Paragraph::new(Span::styled(session.display_text(), bold_style))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        let answer_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(ANSWER_WIDTH),
                Constraint::Min(0),
            ])
            .split(chunks[3])[1];

        // answers are typed right to left like a calculator display
        Paragraph::new(self.input.as_str())
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(status_style(session.input_status()))
                    .title("answer"),
            )
            .render(answer_area, buf);

        if let Some(notice) = session.notice() {
            Paragraph::new(Span::styled(notice, italic_style))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(chunks[4], buf);
        }

        let settings = Line::from(vec![
            Span::styled("operation: ", dim_style),
            Span::styled(session.operation().to_string(), bold_style),
            Span::styled("   difficulty: ", dim_style),
            Span::styled(session.difficulty().to_string(), bold_style),
        ]);
        Paragraph::new(settings)
            .alignment(Alignment::Center)
            .render(chunks[6], buf);

        Paragraph::new(Span::styled(
            "(enter) submit / (←) back / (tab) operation / (↑↓) difficulty / (esc)ape",
            italic_style,
        ))
        .alignment(Alignment::Center)
        .render(chunks[7], buf);

        if let Some(message) = &self.popup {
            render_popup(message, area, buf);
        }
    }
}

fn render_popup(message: &str, area: Rect, buf: &mut Buffer) {
    let width = (message.width() as u16).saturating_add(POPUP_PADDING);
    let popup_area = centered_rect(width, 4, area);

    Clear.render(popup_area, buf);
    Paragraph::new(vec![
        Line::from(message),
        Line::from(Span::styled(
            "press any key",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    )
    .render(popup_area, buf);
}
