use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::form::FormState;
use crate::ui::app::{App, Focus};
use crate::ui::layout::{button_regions, form_regions};
use crate::ui::theme::{ACCENT, BORDER, BUTTON_FOCUS, MUTED, STATUS_ERROR, STATUS_OK, TEXT};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let focus = app.focus();
    let regions = form_regions(frame.area());

    let header = Paragraph::new(Line::from(Span::styled(
        "Person",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::bordered().border_style(Style::default().fg(BORDER)));
    frame.render_widget(header, regions.header);

    let fields = [
        (Focus::FirstName, "First name", state.first_name.as_str(), regions.first_name),
        (Focus::LastName, "Last name", state.last_name.as_str(), regions.last_name),
        (Focus::Age, "Age", state.age_text.as_str(), regions.age),
    ];
    for (field, title, text, area) in fields {
        frame.render_widget(text_field(title, text, focus == field), area);
        if focus == field {
            place_cursor(frame, area, text);
        }
    }

    let (create, clear) = button_regions(regions.buttons);
    frame.render_widget(button("Create", focus == Focus::Create), create);
    frame.render_widget(button("Clear", focus == Focus::Clear), clear);

    frame.render_widget(result_panel(&state), regions.result);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Tab/↓ next · Shift+Tab/↑ prev · Enter press · Ctrl+S create · Ctrl+R clear · Esc quit",
        Style::default().fg(MUTED),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, regions.footer);
}

fn text_field<'a>(title: &'a str, text: &'a str, focused: bool) -> Paragraph<'a> {
    let border = if focused { ACCENT } else { BORDER };
    Paragraph::new(Span::styled(text, Style::default().fg(TEXT))).block(
        Block::bordered()
            .title(title)
            .border_style(Style::default().fg(border)),
    )
}

fn button(label: &str, focused: bool) -> Paragraph<'_> {
    let (border, style) = if focused {
        (
            ACCENT,
            Style::default()
                .fg(ACCENT)
                .bg(BUTTON_FOCUS)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (BORDER, Style::default().fg(TEXT))
    };
    Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(border)))
}

fn result_panel(state: &FormState) -> Paragraph<'static> {
    let mut lines = Vec::new();
    match &state.result {
        Some(person) => lines.push(Line::from(Span::styled(
            person.to_string(),
            Style::default().fg(STATUS_OK),
        ))),
        None => lines.push(Line::from(Span::styled(
            "No person created yet",
            Style::default().fg(MUTED),
        ))),
    }
    if let Some(message) = &state.error_message {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .title("Result")
                .border_style(Style::default().fg(BORDER)),
        )
}

fn place_cursor(frame: &mut Frame<'_>, area: Rect, text: &str) {
    if area.width < 3 || area.height < 3 {
        return;
    }
    let inner_width = area.width - 2;
    let offset = cursor_offset(text, inner_width);
    frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
}

/// Column of the cursor inside a field, clamped to the last visible cell.
fn cursor_offset(text: &str, inner_width: u16) -> u16 {
    u16::try_from(text.chars().count())
        .unwrap_or(u16::MAX)
        .min(inner_width.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::FormController;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_created_person() {
        let controller = FormController::default();
        let app = App::new(controller.clone());
        controller.set_first_name("Ana");
        controller.set_last_name("Pérez");
        controller.set_age("30");
        controller.submit();

        let screen = render(&app);
        assert!(screen.contains("Ana Pérez, 30 años"));
    }

    #[test]
    fn renders_error_message() {
        let controller = FormController::default();
        let app = App::new(controller.clone());
        controller.submit();

        let screen = render(&app);
        assert!(screen.contains("Invalid data."));
    }

    #[test]
    fn cursor_offset_clamps_long_text() {
        assert_eq!(cursor_offset("", 10), 0);
        assert_eq!(cursor_offset("Ana", 10), 3);
        assert_eq!(cursor_offset(&"x".repeat(50), 10), 9);
        assert_eq!(cursor_offset(&"x".repeat(65_536), 62), 61);
        assert_eq!(cursor_offset(&"x".repeat(70_000), 62), 61);
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let app = App::new(FormController::default());
        let screen = render(&app);
        assert!(screen.contains("No person created yet"));
        assert!(screen.contains("First name"));
    }
}
