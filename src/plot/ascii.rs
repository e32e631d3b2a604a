//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - quantum density `|ψₙ|²`: `-` line
//! - classical density: `.` line
//! - classical turning points: `|` columns
//!
//! Curves are drawn first and markers never overwrite them, so the turning
//! point reads as a dashed column threaded through both curves.

use crate::app::pipeline::RunOutput;
use crate::domain::DensityFile;
use crate::models;

/// Render a plot for an in-memory evaluation.
pub fn render_ascii_plot(run: &RunOutput, width: usize, height: usize) -> String {
    render_plot(
        &run.grid,
        &run.quantum,
        &run.classical,
        run.turning_point,
        run.x_range,
        run.y_range,
        width,
        height,
    )
}

/// Render a plot from a saved density JSON file.
///
/// Ranges are rebuilt from the stored arrays: the x window is the stored
/// grid's extent and the y window follows the stored quantum peak, same as a
/// fresh run.
pub fn render_ascii_plot_from_density_file(
    file: &DensityFile,
    width: usize,
    height: usize,
) -> String {
    let x_range = grid_extent(&file.grid.x).unwrap_or((-1.0, 1.0));
    let y_range = models::y_range(&file.grid.quantum);

    render_plot(
        &file.grid.x,
        &file.grid.quantum,
        &file.grid.classical,
        file.turning_point,
        x_range,
        y_range,
        width,
        height,
    )
}

#[allow(clippy::too_many_arguments)]
fn render_plot(
    x: &[f64],
    quantum: &[f64],
    classical: &[f64],
    turning_point: f64,
    x_range: (f64, f64),
    y_range: (f64, f64),
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = x_range;
    let (y_min, y_max) = if y_range.1 > y_range.0 && y_range.1.is_finite() {
        y_range
    } else {
        (0.0, 1.0)
    };

    let mut grid = vec![vec![' '; width]; height];

    // Quantum first: where the curves cross, the quantum one wins.
    draw_series(&mut grid, x, quantum, x_min, x_max, y_min, y_max, '-');
    draw_series(&mut grid, x, classical, x_min, x_max, y_min, y_max, '.');

    // Turning-point columns, skipped when outside the window rather than
    // clamped onto the frame edge.
    for marker in [-turning_point, turning_point] {
        if marker < x_min || marker > x_max {
            continue;
        }
        let col = map_x(marker, x_min, x_max, width);
        draw_line(&mut grid, col, 0, col, height - 1, '|');
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.3}, {y_max:.3}]\n"
    ));
    out.push_str("Curves: '-' quantum  '.' classical  '|' turning points\n");

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn grid_extent(x: &[f64]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &v in x {
        min_x = min_x.min(v);
        max_x = max_x.max(v);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_series(
    grid: &mut [Vec<char>],
    x: &[f64],
    y: &[f64],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    ch: char,
) {
    if x.len() < 2 || x.len() != y.len() {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for (&xi, &yi) in x.iter().zip(y) {
        let col = map_x(xi, x_min, x_max, width);
        let row = map_y(yi, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, ch);
        } else if grid[row][col] == ' ' {
            grid[row][col] = ch;
        }
        prev = Some((col, row));
    }
}

fn map_x(v: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((v - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(v: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((v - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish). Only blank cells are written, so
/// earlier layers show through.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_golden_snapshot_small() {
        // Flat curves make the mapping auditable by hand: the quantum curve
        // sits mid-frame, the classical curve along the floor, and the
        // turning column threads the gaps.
        let x = [0.0, 0.25, 0.5, 0.75, 1.0];
        let quantum = [0.5; 5];
        let classical = [0.0; 5];

        let txt = render_plot(&x, &quantum, &classical, 0.8, (0.0, 1.0), (0.0, 1.0), 10, 5);
        let expected = concat!(
            "Plot: x=[0.000, 1.000] | y=[0.000, 1.000]\n",
            "Curves: '-' quantum  '.' classical  '|' turning points\n",
            "       |  \n",
            "       |  \n",
            "----------\n",
            "       |  \n",
            "..........\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn markers_outside_the_window_are_skipped() {
        let x = [0.0, 0.5, 1.0];
        let quantum = [0.5; 3];
        let classical = [0.0; 3];

        let txt = render_plot(&x, &quantum, &classical, 5.0, (0.0, 1.0), (0.0, 1.0), 10, 5);
        // The header/legend mention '|', the frame itself must not.
        let body: String = txt.lines().skip(2).collect();
        assert!(!body.contains('|'), "no marker columns expected:\n{txt}");
    }

    #[test]
    fn values_above_the_window_clip_to_the_top_row() {
        let x = [0.0, 0.5, 1.0];
        let quantum = [0.0; 3];
        // Classical spike far above the y window, as near a turning point.
        let classical = [10.0; 3];

        let txt = render_plot(&x, &quantum, &classical, 2.0, (0.0, 1.0), (0.0, 1.0), 10, 5);
        let rows: Vec<&str> = txt.lines().skip(2).collect();
        assert_eq!(rows[0], "..........");
        assert_eq!(rows[4], "----------");
    }

    #[test]
    fn file_replot_rebuilds_ranges_from_stored_arrays() {
        use crate::domain::{DensityFile, DensityGrid};

        let file = DensityFile {
            tool: "qho-density".to_string(),
            level: 0,
            energy: 0.5,
            turning_point: 1.0,
            quantum_integral: 0.9998,
            classical_integral: 0.9653,
            classical_rescaled: true,
            grid: DensityGrid {
                x: vec![-1.2, -0.6, 0.0, 0.6, 1.2],
                quantum: vec![0.13, 0.39, 0.56, 0.39, 0.13],
                classical: vec![0.0, 0.40, 0.33, 0.40, 0.0],
            },
        };

        let txt = render_ascii_plot_from_density_file(&file, 20, 8);
        assert!(txt.starts_with("Plot: x=[-1.200, 1.200]"));
        assert!(txt.contains('-') && txt.contains('.') && txt.contains('|'));
    }
}
