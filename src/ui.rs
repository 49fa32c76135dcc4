use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode, MonitoredUrl};

const TITLE: &str = "URL Monitor";
const UP_GLYPH: &str = "🟢";
const DOWN_GLYPH: &str = "🔴";
const INSERT_HELP: &str = "esc:cancel  enter:save  ctrl+c:quit";
const MONITOR_HELP: &str = "Press / to insert new url  ctrl+c:quit";

/// Render the full TUI frame.
pub fn draw(frame: &mut Frame, app: &App) {
    frame.render_widget(Paragraph::new(lines(app)), frame.area());
}

/// Build the view for the current state. Pure: same state, same lines.
pub fn lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];

    let help = match app.input_mode {
        InputMode::Insert => {
            lines.push(Line::from(vec![
                Span::styled("Insert mode: ", Style::default().fg(Color::Yellow)),
                Span::raw(app.draft.clone()),
            ]));
            INSERT_HELP
        }
        InputMode::Monitor => {
            lines.push(Line::from(Span::styled(
                "Monitor mode",
                Style::default().fg(Color::Yellow),
            )));
            lines.extend(app.urls.iter().map(url_line));
            MONITOR_HELP
        }
    };

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        help,
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// The same view as plain text, one line per row.
#[allow(dead_code)]
pub fn render(app: &App) -> String {
    lines(app)
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// ` <🟢> https://example.com - 200`
fn url_line(url: &MonitoredUrl) -> Line<'static> {
    let (glyph, color) = if url.is_up {
        (UP_GLYPH, Color::Green)
    } else {
        (DOWN_GLYPH, Color::Red)
    };
    Line::from(vec![
        Span::raw(" <"),
        Span::styled(glyph, Style::default().fg(color)),
        Span::raw(format!("> {} - {}", url.address, url.last_status_code)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitoring(urls: Vec<MonitoredUrl>) -> App {
        App {
            urls,
            ..App::new()
        }
    }

    #[test]
    fn empty_monitor_view() {
        assert_eq!(
            render(&App::new()),
            "URL Monitor\nMonitor mode\n\nPress / to insert new url  ctrl+c:quit"
        );
    }

    #[test]
    fn monitor_view_lists_urls_in_order() {
        let app = monitoring(vec![
            MonitoredUrl {
                address: "https://up.example".into(),
                last_status_code: 404,
                is_up: true,
            },
            MonitoredUrl::new("https://down.example"),
        ]);
        assert_eq!(
            render(&app),
            "URL Monitor\n\
             Monitor mode\n \
             <🟢> https://up.example - 404\n \
             <🔴> https://down.example - 0\n\
             \n\
             Press / to insert new url  ctrl+c:quit"
        );
    }

    #[test]
    fn insert_view_shows_draft_and_hides_urls() {
        let mut app = monitoring(vec![MonitoredUrl::new("https://hidden.example")]);
        app.input_mode = InputMode::Insert;
        app.draft = "https://new".into();
        assert_eq!(
            render(&app),
            "URL Monitor\nInsert mode: https://new\n\nesc:cancel  enter:save  ctrl+c:quit"
        );
    }

    #[test]
    fn glyph_colour_tracks_status() {
        let up = url_line(&MonitoredUrl {
            address: "a".into(),
            last_status_code: 200,
            is_up: true,
        });
        let down = url_line(&MonitoredUrl::new("b"));
        assert_eq!(up.spans[1].style.fg, Some(Color::Green));
        assert_eq!(down.spans[1].style.fg, Some(Color::Red));
    }

    #[test]
    fn rendering_is_idempotent() {
        let app = monitoring(vec![MonitoredUrl::new("http://a"), MonitoredUrl::new("")]);
        assert_eq!(render(&app), render(&app));
        assert_eq!(lines(&app), lines(&app));
    }
}
