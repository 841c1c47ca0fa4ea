pub mod charting;
pub mod roster;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph, Widget},
};

use crate::{session::StudySession, timer::ElapsedTimeTracker};

const HORIZONTAL_MARGIN: u16 = 2;
const TIMER_HEIGHT: u16 = 6;
const MEMBERS_HEIGHT: u16 = 9;

const ACCENT: Color = Color::Rgb(59, 130, 246);

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TimerStatus {
    Running,
    Paused,
}

impl From<&ElapsedTimeTracker> for TimerStatus {
    fn from(tracker: &ElapsedTimeTracker) -> Self {
        if tracker.is_running() {
            TimerStatus::Running
        } else {
            TimerStatus::Paused
        }
    }
}

impl Widget for &StudySession {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(1),              // header
                Constraint::Length(TIMER_HEIGHT),   // timer + goal
                Constraint::Min(6),                 // chart
                Constraint::Length(MEMBERS_HEIGHT), // ranking | roster
                Constraint::Length(1),              // legend
            ])
            .split(area);

        Paragraph::new(Span::styled(
            "study together",
            Style::default().patch(bold_style).fg(ACCENT),
        ))
        .render(chunks[0], buf);

        render_timer(&self.tracker, chunks[1], buf);
        render_chart(self, chunks[2], buf);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3]);
        roster::render_ranking(&self.members, bottom[0], buf);
        roster::render_roster(&self.members, bottom[1], buf);

        let toggle_hint = match TimerStatus::from(&self.tracker) {
            TimerStatus::Running => "(space) stop",
            TimerStatus::Paused => "(space) start",
        };
        Paragraph::new(Span::styled(
            format!("{toggle_hint} / (esc)ape"),
            italic_style,
        ))
        .render(chunks[4], buf);
    }
}

fn render_timer(tracker: &ElapsedTimeTracker, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Total study time");
    let inner = block.inner(area);
    block.render(area, buf);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let status = TimerStatus::from(tracker);
    let status_style = match status {
        TimerStatus::Running => Style::default().fg(Color::Green),
        TimerStatus::Paused => Style::default().fg(Color::Gray),
    };
    Paragraph::new(Line::from(vec![
        Span::styled(
            tracker.formatted_clock(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(status.to_string(), status_style),
    ]))
    .alignment(Alignment::Center)
    .render(rows[0], buf);

    let progress = tracker.progress_percent();
    Paragraph::new(Line::from(vec![
        Span::styled("Goal", Style::default().fg(Color::Gray)),
        Span::raw(format!(
            " {}",
            crate::timer::format_clock(tracker.goal_seconds())
        )),
    ]))
    .render(rows[1], buf);

    Gauge::default()
        .gauge_style(Style::default().fg(ACCENT).bg(Color::DarkGray))
        .ratio(progress / 100.0)
        .label(format!("{}%", progress.floor()))
        .render(rows[2], buf);
}

fn render_chart(session: &StudySession, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);

    let (x_max, y_max) = charting::compute_chart_params(&session.series);
    let (first_label, last_label) = charting::edge_labels(&session.series);
    let points = session.series.plot_points();

    let datasets = vec![Dataset::default()
        .marker(ratatui::symbols::Marker::Braille)
        .style(Style::default().fg(ACCENT))
        .graph_type(GraphType::Line)
        .data(&points)];

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Study time (min)"),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::styled(first_label, bold_style),
                    Span::styled(last_label, bold_style),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("min")
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::styled("0", bold_style),
                    Span::styled(charting::format_label(y_max), bold_style),
                ]),
        )
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionConfig;

    fn session() -> StudySession {
        StudySession::new(
            &SessionConfig::default(),
            ["14:07", "14:12", "14:17", "14:22", "14:27", "14:32"],
        )
    }

    fn render_to_string(session: &StudySession, area: Rect) -> String {
        let mut buffer = Buffer::empty(area);
        session.render(area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_dashboard_shows_clock_and_status() {
        let mut s = session();
        let rendered = render_to_string(&s, Rect::new(0, 0, 100, 40));
        assert!(rendered.contains("00:00:00"));
        assert!(rendered.contains("PAUSED"));
        assert!(rendered.contains("(space) start"));

        s.toggle_timer();
        for _ in 0..61 {
            s.on_tick("14:32");
        }
        let rendered = render_to_string(&s, Rect::new(0, 0, 100, 40));
        assert!(rendered.contains("00:01:01"));
        assert!(rendered.contains("RUNNING"));
        assert!(rendered.contains("(space) stop"));
    }

    #[test]
    fn test_dashboard_shows_chart_edges_and_panels() {
        let rendered = render_to_string(&session(), Rect::new(0, 0, 100, 40));
        assert!(rendered.contains("14:07"));
        assert!(rendered.contains("14:32"));
        assert!(rendered.contains("Study time (min)"));
        assert!(rendered.contains("Group members"));
    }

    #[test]
    fn test_dashboard_handles_small_and_large_areas() {
        let s = session();
        for area in [
            Rect::new(0, 0, 10, 5),
            Rect::new(0, 0, 80, 24),
            Rect::new(0, 0, 300, 120),
        ] {
            let mut buffer = Buffer::empty(area);
            (&s).render(area, &mut buffer);
            assert_eq!(*buffer.area(), area);
        }
    }

    #[test]
    fn test_timer_status_display() {
        assert_eq!(TimerStatus::Running.to_string(), "RUNNING");
        assert_eq!(TimerStatus::Paused.to_string(), "PAUSED");
    }

    #[test]
    fn test_dashboard_fits_minimum_height() {
        // header + timer + chart minimum + members + legend
        let height = 1 + TIMER_HEIGHT + 6 + MEMBERS_HEIGHT + 1;
        let rendered = render_to_string(&session(), Rect::new(0, 0, 80, height));
        assert!(rendered.contains("00:00:00"));
        assert!(rendered.contains("Study time (min)"));
        assert!(rendered.contains("Sans"));
        assert!(rendered.contains("(esc)ape"));
    }
}
