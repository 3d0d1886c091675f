use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::form::{FieldId, FormState};

pub struct UiContext<'a> {
    pub title: Option<&'a str>,
    pub state: &'a FormState,
    pub status_message: &'a str,
    pub dirty: bool,
    pub error_count: usize,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], ctx.title);
    render_fields(frame, chunks[1], ctx.state);
    render_footer(frame, chunks[2], &ctx);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, title: Option<&str>) {
    let text = title.unwrap_or("Signup");
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().title("Form").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_fields(frame: &mut Frame<'_>, area: Rect, state: &FormState) {
    let items: Vec<ListItem<'static>> = FieldId::ALL
        .iter()
        .map(|field| build_field_row(state, *field))
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.focus_index()));

    let list = List::new(items)
        .block(Block::default().title("Fields").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let mut status = ctx.status_message.to_string();
    if ctx.dirty {
        status.push_str(" • unsubmitted input");
    }
    if ctx.error_count > 0 {
        status.push_str(&format!(" • {} error(s)", ctx.error_count));
    }
    status.push_str(" • focus: ");
    status.push_str(ctx.state.focused().label());

    let status_widget = Paragraph::new(status)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_widget, chunks[0]);

    let help_widget = Paragraph::new(ctx.help.unwrap_or(" ").to_string())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Actions"));
    frame.render_widget(help_widget, chunks[1]);
}

fn build_field_row(state: &FormState, field: FieldId) -> ListItem<'static> {
    let mut lines = Vec::new();

    let mut first_line = vec![
        Span::styled(
            format!("{} *", field.label()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": "),
        Span::styled(state.display_value(field), Style::default().fg(Color::White)),
    ];
    if field == FieldId::BirthDate {
        first_line.push(Span::styled(
            "  (YYYY-MM-DD)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(first_line));

    if let Some(error) = state.error_for(field) {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    ListItem::new(lines)
}
