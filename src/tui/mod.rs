//! Ratatui-based terminal UI.
//!
//! The TUI provides a settings panel for choosing the energy level and grid
//! resolution, then renders the quantum and classical densities with the
//! turning points marked. Every change re-runs the same pipeline the CLI
//! uses, so the normalization diagnostics in the header always match what
//! `qho compute` would print.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::RunOutput;
use crate::cli::ComputeArgs;
use crate::domain::{EnergyLevel, MAX_LEVEL};
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::DensityChart;

/// Start the TUI.
pub fn run(args: ComputeArgs) -> Result<(), AppError> {
    let config = crate::app::eval_config_from_args(&args)?;

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    config: crate::domain::EvalConfig,
    level_input: String,
    selected_field: usize,
    editing_level: bool,
    status: String,
    run: Option<RunOutput>,
    show_classical: bool,
    show_turning_points: bool,
}

impl App {
    fn new(config: crate::domain::EvalConfig) -> Result<Self, AppError> {
        let mut app = Self {
            config,
            level_input: String::new(),
            selected_field: 0,
            editing_level: false,
            status: String::new(),
            run: None,
            show_classical: true,
            show_turning_points: true,
        };
        app.reevaluate()?;
        app.status = app
            .run
            .as_ref()
            .and_then(|r| r.diagnostics.first().cloned())
            .unwrap_or_else(|| "Ready.".to_string());
        Ok(app)
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        if self.editing_level {
            return self.handle_level_edit(code);
        }

        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < 3 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1)?,
            KeyCode::Right => self.adjust_field(1)?,
            KeyCode::Enter => {
                if self.selected_field == 0 {
                    self.editing_level = true;
                    self.level_input.clear();
                    self.status =
                        "Editing level (digits). Enter to apply, Esc to cancel.".to_string();
                }
            }
            KeyCode::Char('c') => {
                self.show_classical = !self.show_classical;
                self.status = format!("classical curve: {}", on_off(self.show_classical));
            }
            KeyCode::Char('t') => {
                self.show_turning_points = !self.show_turning_points;
                self.status = format!("turning points: {}", on_off(self.show_turning_points));
            }
            KeyCode::Char('d') => {
                if let Some(run) = &self.run {
                    match crate::debug::write_debug_bundle(run) {
                        Ok(path) => {
                            self.status = format!("Wrote debug bundle: {}", path.display());
                        }
                        Err(err) => {
                            self.status = format!("Debug write failed: {err}");
                        }
                    }
                } else {
                    self.status = "No evaluation available.".to_string();
                }
            }
            _ => {}
        }

        Ok(false)
    }

    fn handle_level_edit(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Esc => {
                self.editing_level = false;
                self.level_input.clear();
                self.status = "Level edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.editing_level = false;
                self.apply_level_input()?;
            }
            KeyCode::Backspace => {
                self.level_input.pop();
            }
            KeyCode::Char(c) => {
                if c.is_ascii_digit() {
                    self.level_input.push(c);
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn adjust_field(&mut self, delta: i32) -> Result<(), AppError> {
        match self.selected_field {
            0 => {
                let current = self.config.level.get();
                let next = if delta >= 0 {
                    (current + 1).min(MAX_LEVEL)
                } else {
                    current.saturating_sub(1)
                };
                self.config.level = EnergyLevel::new(next)?;
                self.reevaluate()?;
                self.status = format!("level: n={next}");
            }
            1 => {
                let next = if delta >= 0 {
                    self.config.grid_points.saturating_add(250)
                } else {
                    self.config.grid_points.saturating_sub(250)
                };
                self.config.grid_points = next.max(250);
                self.reevaluate()?;
                self.status = format!("grid points: {}", self.config.grid_points);
            }
            2 => {
                self.show_classical = !self.show_classical;
                self.status = format!("classical curve: {}", on_off(self.show_classical));
            }
            3 => {
                self.show_turning_points = !self.show_turning_points;
                self.status = format!("turning points: {}", on_off(self.show_turning_points));
            }
            _ => {}
        }
        Ok(())
    }

    fn apply_level_input(&mut self) -> Result<(), AppError> {
        let trimmed = self.level_input.trim().to_string();
        self.level_input.clear();
        if trimmed.is_empty() {
            self.status = "Level unchanged.".to_string();
            return Ok(());
        }

        let parsed: u32 = match trimmed.parse() {
            Ok(v) => v,
            Err(e) => {
                self.status = format!("Invalid level '{trimmed}': {e}");
                return Ok(());
            }
        };

        match EnergyLevel::new(parsed) {
            Ok(level) => {
                self.config.level = level;
                self.reevaluate()?;
                self.status = format!("level: n={parsed}");
            }
            Err(err) => {
                // Over-cap input stays a status message in the TUI rather
                // than tearing the screen down.
                self.status = err.to_string();
            }
        }
        Ok(())
    }

    fn reevaluate(&mut self) -> Result<(), AppError> {
        let run = crate::app::pipeline::evaluate(&self.config)?;
        self.run = Some(run);
        Ok(())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("qho", Style::default().fg(Color::Cyan)),
            Span::raw(" - quantum vs classical probability density"),
        ]));

        let level = self.config.level;
        lines.push(Line::from(Span::styled(
            format!(
                "n={} | E={:.1} | turning points: ±{:.4} | grid: {}",
                level.get(),
                level.energy(),
                level.turning_point(),
                self.config.grid_points,
            ),
            Style::default().fg(Color::Gray),
        )));

        if let Some(run) = &self.run {
            let classical_note = if run.classical_rescaled {
                " (rescaled)"
            } else {
                ""
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "quantum ∫={:.6} | classical ∫={:.6}{classical_note}",
                    run.quantum_norm.integral, run.classical_norm.integral,
                ),
                Style::default().fg(Color::Gray),
            )));
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_settings(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(format!("Probability density (n={})", self.config.level.get()))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("Waiting for evaluation...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let (quantum, classical, markers, x_bounds, y_bounds) =
            chart_series(run, self.show_classical, self.show_turning_points);

        let (chart_rect, insets) = chart_layout(inner);
        let widget = DensityChart {
            quantum: &quantum,
            classical: &classical,
            markers: &markers,
            x_bounds,
            y_bounds,
            x_label: "x (position)",
            y_label: "density".to_string(),
            fmt_x: fmt_axis_x,
            fmt_y: fmt_axis_y,
        };

        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            draw_axis_ticks(frame, inner, chart_rect, insets, x_bounds, y_bounds);
        }
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let level_label = if self.editing_level {
            format!("Level: {}_", self.level_input)
        } else {
            format!("Level: n={}", self.config.level.get())
        };

        let items = vec![
            ListItem::new(level_label),
            ListItem::new(format!("Grid points: {}", self.config.grid_points)),
            ListItem::new(format!("Classical curve: {}", on_off(self.show_classical))),
            ListItem::new(format!(
                "Turning points: {}",
                on_off(self.show_turning_points)
            )),
        ];

        let list = List::new(items)
            .block(Block::default().title("Settings").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing_level {
            let hint = Paragraph::new("Editing level…").style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Enter edit level  c classical  t turning pts  d debug  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Build chart series for Plotters.
fn chart_series(
    run: &RunOutput,
    show_classical: bool,
    show_turning_points: bool,
) -> (
    Vec<(f64, f64)>,
    Vec<(f64, f64)>,
    Vec<[(f64, f64); 2]>,
    [f64; 2],
    [f64; 2],
) {
    let (mut x0, mut x1) = run.x_range;
    if !x0.is_finite() || !x1.is_finite() || x1 <= x0 {
        x0 = -1.0;
        x1 = 1.0;
    }
    let x_bounds = [x0, x1];

    let mut y_top = run.y_range.1;
    if !y_top.is_finite() || y_top <= 0.0 {
        y_top = 1.0;
    }
    let y_bounds = [0.0, y_top];

    let quantum: Vec<(f64, f64)> = run
        .grid
        .iter()
        .copied()
        .zip(run.quantum.iter().copied())
        .collect();

    let classical: Vec<(f64, f64)> = if show_classical {
        run.grid
            .iter()
            .copied()
            .zip(run.classical.iter().copied())
            .collect()
    } else {
        Vec::new()
    };

    let mut markers = Vec::new();
    if show_turning_points {
        for marker in [-run.turning_point, run.turning_point] {
            if marker < x0 || marker > x1 {
                continue;
            }
            markers.push([(marker, 0.0), (marker, y_top)]);
        }
    }

    (quantum, classical, markers, x_bounds, y_bounds)
}

fn fmt_axis_x(v: f64) -> String {
    format!("{v:.2}")
}

fn fmt_axis_y(v: f64) -> String {
    format!("{v:.3}")
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 8,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
) {
    let ticks = 5usize;
    let style = Style::default().fg(Color::Gray);

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let x_val = x_bounds[0] + u * (x_bounds[1] - x_bounds[0]);
        let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
        let label = fmt_axis_x(x_val);
        let label_len = label.len() as u16;
        let start = x.saturating_sub((label.len() / 2) as u16);
        let y = chart.y + chart.height;
        if y >= inner.y + inner.height - 1 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let y_val = y_bounds[0] + u * (y_bounds[1] - y_bounds[0]);
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let label = fmt_axis_y(y_val);
        let label_len = label.len() as u16;
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(label.len() as u16);
        if start < inner.x {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    let x_label = Paragraph::new("x (position)")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    let x_rect = Rect {
        x: chart.x,
        y: chart.y + chart.height + 1,
        width: chart.width,
        height: 1,
    };
    if x_rect.y < inner.y + inner.height {
        frame.render_widget(x_label, x_rect);
    }

    let y_label = Paragraph::new("density").style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );
    let y_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: insets.left.saturating_sub(1),
        height: 1,
    };
    frame.render_widget(y_label, y_rect);
}
