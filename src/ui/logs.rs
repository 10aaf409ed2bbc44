use crate::log_view::LogView;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Diagnostics panel. Pinned to the newest entries.
pub fn draw_logs(f: &mut Frame<'_>, area: Rect, logs: &LogView) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .title("Console")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let log_lines: Vec<Line> = logs
        .entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(entry.as_str()),
            ])
        })
        .collect();

    let total_log_lines = log_lines.len() as u16;
    let max_log_scroll = total_log_lines.saturating_sub(inner.height);
    let logs_scroll = max_log_scroll.saturating_sub(logs.scroll_offset);

    let logs_para = Paragraph::new(log_lines)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(logs_para.scroll((logs_scroll, 0)), inner);
}
