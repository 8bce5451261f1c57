//! Terminal drawing of render state
//!
//! Component nodes become bordered blocks; a node whose children are all
//! components is laid out as a vertical stack of those children.

use std::io;

use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use crate::components::Node;
use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::ui_events::AppTab;
use crate::messages::RenderState;

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_tab_bar(f, state, main_chunks[0]);
    draw_node(f, &state.view, main_chunks[1]);
    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

/// Draw one frame per pending render state, returning the number drawn
pub fn draw_pending(
    terminal: &mut Terminal<impl Backend>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
    current_state: &mut RenderState,
) -> io::Result<usize> {
    let mut frames = 0;
    while let Ok(state) = render_rx.try_recv() {
        *current_state = state;
        terminal.draw(|f| draw_ui(f, current_state))?;
        frames += 1;
    }
    Ok(frames)
}

fn draw_tab_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let tab_style = |tab: AppTab| {
        if state.active_tab == tab {
            Style::default().fg(Color::Black).bg(accent_color(tab.title())).bold()
        } else {
            Style::default().fg(Color::Gray)
        }
    };

    let tabs = vec![
        Span::styled(" 1:Portfolio ", tab_style(AppTab::Portfolio)),
        Span::raw(" "),
        Span::styled(" 2:Counter ", tab_style(AppTab::Counter)),
    ];

    f.render_widget(Paragraph::new(Line::from(tabs)), area);
}

/// Draw a node into `area`, stacking child components vertically
pub fn draw_node(f: &mut Frame, node: &Node, area: Rect) {
    let children = node.children();
    let is_composition =
        !children.is_empty() && children.iter().all(|c| c.component_name().is_some());

    if !is_composition {
        draw_leaf(f, node, area);
        return;
    }

    let mut constraints: Vec<Constraint> = children
        .iter()
        .map(|c| Constraint::Length(block_height(c)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (child, chunk) in children.iter().zip(chunks.iter()) {
        draw_leaf(f, child, *chunk);
    }
}

fn draw_leaf(f: &mut Frame, node: &Node, area: Rect) {
    let name = node.component_name().unwrap_or("");
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent_color(name)))
        .title(format!(" {} ", name));

    let paragraph = Paragraph::new(node_lines(node))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Rows needed for a bordered block showing `node`
pub fn block_height(node: &Node) -> u16 {
    u16::try_from(node_lines(node).len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Convert a node tree into styled lines, one per leaf
pub fn node_lines(node: &Node) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    push_lines(node, &mut lines);
    lines
}

fn push_lines(node: &Node, lines: &mut Vec<Line<'static>>) {
    match node {
        Node::Fragment(children) => children.iter().for_each(|c| push_lines(c, lines)),
        Node::Component { body, .. } => push_lines(body, lines),
        Node::Heading(text) => lines.push(Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::Cyan).bold(),
        ))),
        Node::Text(text) => lines.push(Line::from(text.clone())),
        Node::List(items) => {
            for (title, detail) in items {
                let mut spans = vec![
                    Span::raw(" • "),
                    Span::styled(title.clone(), Style::default().fg(Color::Yellow).bold()),
                ];
                if !detail.is_empty() {
                    spans.push(Span::raw(format!(" {}", detail)));
                }
                lines.push(Line::from(spans));
            }
        }
        Node::Link { label, href } => lines.push(Line::from(vec![
            Span::styled(label.clone(), Style::default().fg(Color::Green)),
            Span::raw(" "),
            Span::styled(
                href.clone(),
                Style::default().fg(Color::DarkGray).underlined(),
            ),
        ])),
        Node::Button(label) => lines.push(Line::from(Span::styled(
            format!("[ {} ]", label),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ))),
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = match state.active_tab {
        AppTab::Portfolio => " 1/2/Tab:switch tab | ?:help | q:quit ",
        AppTab::Counter => " Enter/Space/+:increment | 1/2/Tab:switch tab | ?:help | q:quit ",
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = format!(
        r#"
 {} {} - Keyboard Shortcuts

 NAVIGATION
   1 / 2              Portfolio / Counter tab
   Tab                Toggle tab

 COUNTER
   Enter / Space / +  Increment

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#,
        APP_NAME, APP_VERSION
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Border color per component name
pub fn accent_color(name: &str) -> Color {
    match name {
        "Header" | "Portfolio" => Color::Cyan,
        "About" => Color::Blue,
        "Projects" => Color::Yellow,
        "Footer" => Color::DarkGray,
        "Counter" => Color::Magenta,
        _ => Color::White,
    }
}
