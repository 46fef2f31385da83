//! Terminal User Interface (TUI) chart viewer
//!
//! Shows one chart at a time in the alternate screen and blocks until the
//! user dismisses it. One screen session spans the whole report.

mod charts;
mod events;

pub use events::{EventHandler, ViewerAction};

use crate::error::{Error, Result};
use crate::report::RuntimeChart;
use crate::visualization::ChartSink;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};

/// Raw-mode terminal in the alternate screen, restored on drop
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Presents charts interactively in the terminal
///
/// The alternate screen is entered on the first chart and kept for the
/// whole report. It is left in `finish`, or when the sink is dropped after
/// a failed run.
pub struct TerminalSink {
    events: EventHandler,
    session: Option<TerminalSession>,
    presented: usize,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            events: EventHandler::new(),
            session: None,
            presented: 0,
        }
    }

    pub fn presented(&self) -> usize {
        self.presented
    }

    /// Whether the alternate screen is currently held
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    fn session(&mut self) -> io::Result<&mut TerminalSession> {
        let session = match self.session.take() {
            Some(session) => session,
            None => TerminalSession::enter()?,
        };
        Ok(self.session.insert(session))
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSink for TerminalSink {
    fn present(&mut self, chart: &RuntimeChart) -> Result<()> {
        let position = self.presented + 1;

        loop {
            draw(&mut self.session()?.terminal, chart, position)?;
            match self.events.next_action()? {
                ViewerAction::Stay => {}
                ViewerAction::Next => break,
                ViewerAction::Abort => {
                    self.session = None;
                    return Err(Error::Sink("chart viewer interrupted".to_string()));
                }
            }
        }

        self.presented = position;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.session = None;
        Ok(())
    }
}

/// Draw a chart and its footer onto any ratatui backend
pub fn draw<B: Backend>(
    terminal: &mut Terminal<B>,
    chart: &RuntimeChart,
    position: usize,
) -> io::Result<()> {
    let data = charts::series_data(chart);
    terminal.draw(|frame| render(frame, chart, &data, position))?;
    Ok(())
}

fn render(frame: &mut Frame, chart: &RuntimeChart, data: &[(f64, f64)], position: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(frame.size());

    frame.render_widget(charts::create_line_chart(chart, data), chunks[0]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" Chart {} ", position),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(format!(" {} points  ", chart.points.len())),
        Span::styled(
            "q/Enter: next  Ctrl-C: stop",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(footer, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::tests::sample_chart;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_shows_title_labels_and_footer() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        draw(&mut terminal, &sample_chart("setA"), 1).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Runtime Comparison (setA)"));
        assert!(text.contains("quick"));
        assert!(text.contains("merge"));
        assert!(text.contains("Chart 1"));
    }

    #[test]
    fn test_draw_single_point_chart() {
        let mut chart = sample_chart("solo");
        chart.points.truncate(1);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        draw(&mut terminal, &chart, 3).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Runtime Comparison (solo)"));
        assert!(text.contains("1 points"));
    }

    #[test]
    fn test_finish_without_charts_leaves_terminal_untouched() {
        let mut sink = TerminalSink::new();
        assert!(!sink.is_active());

        sink.finish().unwrap();
        assert!(!sink.is_active());
        assert_eq!(sink.presented(), 0);
    }
}
