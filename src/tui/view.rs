// File: ./src/tui/view.rs
use crate::tui::state::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    // --- Checklist ---
    let items: Vec<ListItem> = state
        .controller
        .items()
        .iter()
        .map(|item| {
            let (checkbox, style) = if item.completed {
                (
                    "[x] ",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("[ ] ", Style::default().fg(Color::White))
            };
            ListItem::new(Line::from(vec![
                Span::raw(checkbox),
                Span::styled(item.label.as_str(), style),
            ]))
        })
        .collect();

    let total = state.controller.items().len();
    let done = state.controller.completed_count();
    let (title, border_style) = if state.range_mode() {
        (
            format!(" Checklist ({}/{}) [MULTI] ", done, total),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (format!(" Checklist ({}/{}) ", done, total), Style::default())
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        );

    state.list_area = v_chunks[0];
    f.render_stateful_widget(list, v_chunks[0], &mut state.list_state);

    // --- Footer ---
    let f_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(v_chunks[1]);
    let status = Paragraph::new(format!("[{}] {}", state.controller.mode(), state.message))
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );
    let help_text = format!(
        "Space/x:Toggle | {}+x:Range | j/k:Move | q:Quit",
        state.modifier
    );
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );
    f.render_widget(status, f_chunks[0]);
    f.render_widget(help, f_chunks[1]);
}
