use crate::app::{App, DescContent, FrameContent, LOGO_ALT, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // The error log grows with failures but never swallows the gallery.
    let error_height = app.errors.len().min(4) as u16;

    // Layout: header(3) + content(min) + errors(0-4) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(error_height),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header ──
    let header_text = match app.catalog_total {
        Some(total) => format!(" Met Explorer   [{total} objects in catalog]"),
        None => " Met Explorer".to_string(),
    };
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(header, chunks[0]);

    // ── Gallery panels ──
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_art_frame(app, frame, panels[0]);
    render_description(app, frame, panels[1]);

    render_errors(app, frame, chunks[2]);
    render_status(app, frame, chunks[3]);
}

// ── Art frame ──
fn render_art_frame(app: &App, frame: &mut Frame, area: Rect) {
    let lines = match &app.frame {
        FrameContent::Empty => vec![
            Line::from(""),
            Line::from(Span::styled(
                "No artwork selected",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Press s to draw from the catalog",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        FrameContent::Logo => vec![
            Line::from(""),
            Line::from(Span::styled(
                "THE MET",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                LOGO_ALT,
                Style::default().fg(Color::DarkGray),
            )),
        ],
        FrameContent::Artwork(art) => {
            let mut lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    art.alt_text.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            match &art.image_url {
                Some(url) => lines.push(Line::from(Span::styled(
                    url.clone(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ))),
                None => lines.push(Line::from(Span::styled(
                    "(no public image for this object)",
                    Style::default().fg(Color::Yellow),
                ))),
            }
            lines
        }
    };

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Artwork "),
        );
    frame.render_widget(panel, area);
}

// ── Description card ──
fn render_description(app: &App, frame: &mut Frame, area: Rect) {
    let lines = match &app.description {
        DescContent::Empty => vec![Line::from(Span::styled(
            "Nothing selected yet",
            Style::default().fg(Color::DarkGray),
        ))],
        DescContent::Notice(text) => vec![Line::from(Span::styled(
            text.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))],
        DescContent::Card(card) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    card.title_line.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            for entry in &card.entries {
                lines.push(Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::DarkGray)),
                    Span::raw(entry.clone()),
                ]));
            }
            lines
        }
    };

    let title = match app.phase {
        Phase::Displayed => " Description ",
        _ => " Selection ",
    };
    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title),
        );
    frame.render_widget(panel, area);
}

// ── Error log ──
fn render_errors(app: &App, frame: &mut Frame, area: Rect) {
    if area.height == 0 || app.errors.is_empty() {
        return;
    }
    // Keep the newest failures on screen.
    let skip = app.errors.len().saturating_sub(area.height as usize);
    let lines: Vec<Line> = app.errors[skip..]
        .iter()
        .map(|err| {
            Line::from(Span::styled(
                format!(" {err}"),
                Style::default().fg(Color::Red),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

// ── Status bar ──
fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let status_line = Line::from(vec![
        Span::styled(
            " s",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Select  "),
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Reveal  "),
        Span::styled(
            "?",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Help  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Quit  "),
        Span::styled(&app.status_msg, Style::default().fg(Color::DarkGray)),
    ]);
    let status_bar = Paragraph::new(status_line);
    frame.render_widget(status_bar, area);
}
