use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::members::{format_study_time, ranked_view, Member, RankedEntry};

/// Widest a share bar may get, in cells
const MAX_BAR_WIDTH: usize = 24;

/// Cells of a share bar for the given width budget
pub fn bar_width(share: f64, budget: usize) -> usize {
    ((share.clamp(0.0, 1.0) * budget as f64).round() as usize).min(budget)
}

/// Pad `name` with spaces to `width` display columns
fn pad_name(name: &str, width: usize) -> String {
    let pad = width.saturating_sub(name.width());
    format!("{name}{}", " ".repeat(pad))
}

fn name_column_width(entries: &[RankedEntry<'_>]) -> usize {
    entries
        .iter()
        .map(|e| e.member.name.width())
        .max()
        .unwrap_or(0)
}

/// Group share by rank, one coloured bar per member
pub fn render_ranking(members: &[Member], area: Rect, buf: &mut Buffer) {
    let entries = ranked_view(members);
    let name_width = name_column_width(&entries);
    // rank, name, gaps and the trailing percentage
    let budget = (area.width as usize)
        .saturating_sub(name_width + 14)
        .min(MAX_BAR_WIDTH);

    let lines: Vec<Line> = entries
        .iter()
        .map(|e| {
            Line::from(vec![
                Span::styled(format!("{}. ", e.rank), Style::default().fg(Color::Gray)),
                Span::raw(pad_name(&e.member.name, name_width)),
                Span::raw(" "),
                Span::styled(
                    "█".repeat(bar_width(e.share, budget)),
                    Style::default().fg(e.color),
                ),
                Span::styled(
                    format!(" {:.0}%", e.share * 100.0),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Study share (by rank)"),
        )
        .render(area, buf);
}

/// Member list, leader first
pub fn render_roster(members: &[Member], area: Rect, buf: &mut Buffer) {
    let entries = ranked_view(members);
    let name_width = name_column_width(&entries);

    let lines: Vec<Line> = entries
        .iter()
        .map(|e| {
            let (marker, style) = if e.rank == 1 {
                (
                    "★ ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("· ", Style::default())
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(pad_name(&e.member.name, name_width), style),
                Span::raw("  "),
                Span::styled(
                    format_study_time(e.member.study_time),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Group members"))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::members::seed_roster;

    fn rendered(f: impl Fn(&[Member], Rect, &mut Buffer)) -> String {
        let members = seed_roster("Me");
        let area = Rect::new(0, 0, 50, 8);
        let mut buffer = Buffer::empty(area);
        f(&members, area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(0.0, 20), 0);
        assert_eq!(bar_width(0.5, 20), 10);
        assert_eq!(bar_width(1.0, 20), 20);
        assert_eq!(bar_width(3.0, 20), 20);
    }

    #[test]
    fn test_pad_name_uses_display_width() {
        assert_eq!(pad_name("Tom", 5), "Tom  ");
        assert_eq!(pad_name("민수", 5), "민수 ");
        assert_eq!(pad_name("Jerry", 3), "Jerry");
    }

    #[test]
    fn test_ranking_lists_leader_first() {
        let out = rendered(render_ranking);
        assert!(out.contains("1. Sans"));
        assert!(out.contains("5. Me"));
    }

    #[test]
    fn test_roster_shows_study_time() {
        let out = rendered(render_roster);
        assert!(out.contains("Group members"));
        assert!(out.contains("1h 58m"));
        assert!(out.contains("0m"));
    }
}
