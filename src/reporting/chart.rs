use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::Path;

use crate::analysis::AnalysisSummary;
use crate::core::constants::chart;
use crate::core::error::{EmpvizError, Result};

type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;
type PanelResult = std::result::Result<(), Box<dyn Error>>;

/// Renders the four-panel PNG overview of an [`AnalysisSummary`].
///
/// Panels, left to right and top to bottom: department head count,
/// performance score histogram, average score per department, regional
/// share.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Render the chart and write it to `output_path`
    pub fn render(summary: &AnalysisSummary, output_path: &Path) -> Result<()> {
        Self::draw(summary, output_path).map_err(|e| EmpvizError::Chart(e.to_string()))
    }

    fn draw(summary: &AnalysisSummary, output_path: &Path) -> PanelResult {
        let root = BitMapBackend::new(output_path, chart::SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let body = root.titled(
            chart::TITLE,
            (chart::FONT, 40).into_font().style(FontStyle::Bold),
        )?;
        let panels = body.split_evenly((2, 2));

        Self::draw_department_panel(&panels[0], summary)?;
        Self::draw_histogram_panel(&panels[1], summary)?;
        Self::draw_performance_panel(&panels[2], summary)?;
        Self::draw_region_panel(&panels[3], summary)?;

        root.present()?;
        Ok(())
    }

    fn caption_style() -> FontDesc<'static> {
        (chart::FONT, 24).into_font().style(FontStyle::Bold)
    }

    fn draw_department_panel(area: &Panel, summary: &AnalysisSummary) -> PanelResult {
        let entries = &summary.departments.entries;
        let n = entries.len().max(1);
        let labels = summary.departments.labels();
        let y_max = entries.iter().map(|e| e.count).max().unwrap_or(0).max(1) as f64 * 1.15;

        let mut chart = ChartBuilder::on(area)
            .caption("Department Distribution", Self::caption_style())
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n)
            .x_label_formatter(&|x| category_label(&labels, *x))
            .x_desc("Department")
            .y_desc("Number of Employees")
            .draw()?;

        chart.draw_series(entries.iter().enumerate().map(|(i, e)| {
            let (r, g, b) = chart::DEPARTMENT_PALETTE[i % chart::DEPARTMENT_PALETTE.len()];
            let x = i as f64;
            Rectangle::new(
                [(x - 0.4, 0.0), (x + 0.4, e.count as f64)],
                RGBColor(r, g, b).filled(),
            )
        }))?;

        // Outlines; the highlighted department gets a thick red border
        chart.draw_series(entries.iter().enumerate().map(|(i, e)| {
            let x = i as f64;
            let style = if e.category == summary.highlight {
                RED.stroke_width(3)
            } else {
                BLACK.stroke_width(1)
            };
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, e.count as f64)], style)
        }))?;

        let value_style = TextStyle::from((chart::FONT, 16).into_font().style(FontStyle::Bold))
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(entries.iter().enumerate().map(|(i, e)| {
            Text::new(
                e.count.to_string(),
                (i as f64, e.count as f64),
                value_style.clone(),
            )
        }))?;

        Ok(())
    }

    fn draw_histogram_panel(area: &Panel, summary: &AnalysisSummary) -> PanelResult {
        let bins = &summary.score_histogram;
        let x_min = bins.first().map(|b| b.start).unwrap_or(0.0);
        let x_max = bins.last().map(|b| b.end).unwrap_or(x_min + 1.0);
        let y_max = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64 * 1.15;
        let mean = summary.performance.mean;
        let (r, g, b) = chart::HISTOGRAM_COLOR;

        let mut chart = ChartBuilder::on(area)
            .caption("Performance Score Distribution", Self::caption_style())
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Performance Score")
            .y_desc("Frequency")
            .draw()?;

        chart.draw_series(bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.start, 0.0), (bin.end, bin.count as f64)],
                RGBColor(r, g, b).mix(0.7).filled(),
            )
        }))?;
        chart.draw_series(bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.start, 0.0), (bin.end, bin.count as f64)],
                BLACK.stroke_width(1),
            )
        }))?;

        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(mean, 0.0), (mean, y_max)],
                RED.stroke_width(2),
            )))?
            .label(format!("Mean: {mean:.1}"))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    }

    fn draw_performance_panel(area: &Panel, summary: &AnalysisSummary) -> PanelResult {
        let perf = &summary.department_performance;
        let n = perf.len().max(1);
        // Highest mean on top: entry i sits at y = n - 1 - i
        let labels: Vec<String> = perf.iter().rev().map(|p| p.department.to_string()).collect();
        let y_of = |i: usize| (perf.len() - 1 - i) as f64;

        let mut chart = ChartBuilder::on(area)
            .caption("Average Performance Score by Department", Self::caption_style())
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(110)
            .build_cartesian_2d(0f64..110f64, -0.5f64..(n as f64 - 0.5))?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(n)
            .y_label_formatter(&|y| category_label(&labels, *y))
            .x_desc("Average Performance Score")
            .draw()?;

        chart.draw_series(perf.iter().enumerate().map(|(i, p)| {
            let (r, g, b) = chart::PERFORMANCE_PALETTE[i % chart::PERFORMANCE_PALETTE.len()];
            let y = y_of(i);
            Rectangle::new(
                [(0.0, y - 0.4), (p.mean_score, y + 0.4)],
                RGBColor(r, g, b).filled(),
            )
        }))?;
        chart.draw_series(perf.iter().enumerate().map(|(i, p)| {
            let y = y_of(i);
            Rectangle::new(
                [(0.0, y - 0.4), (p.mean_score, y + 0.4)],
                BLACK.stroke_width(1),
            )
        }))?;

        let value_style = TextStyle::from((chart::FONT, 15).into_font().style(FontStyle::Bold))
            .pos(Pos::new(HPos::Left, VPos::Center));
        chart.draw_series(perf.iter().enumerate().map(|(i, p)| {
            Text::new(
                format!("{:.1}", p.mean_score),
                (p.mean_score + 1.0, y_of(i)),
                value_style.clone(),
            )
        }))?;

        Ok(())
    }

    fn draw_region_panel(area: &Panel, summary: &AnalysisSummary) -> PanelResult {
        let area = area.titled("Employee Distribution by Region", Self::caption_style())?;
        if summary.regions.is_empty() {
            return Ok(());
        }

        // Pie takes backend coordinates, not panel-relative ones
        let (width, height) = area.dim_in_pixel();
        let (x0, y0) = area.get_base_pixel();
        let center = (x0 + width as i32 / 2, y0 + height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.36;

        let sizes: Vec<f64> = summary.regions.counts().iter().map(|&c| c as f64).collect();
        let colors: Vec<RGBColor> = (0..sizes.len())
            .map(|i| {
                let (r, g, b) = chart::REGION_PALETTE[i % chart::REGION_PALETTE.len()];
                RGBColor(r, g, b)
            })
            .collect();
        let labels = summary.regions.labels();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(90.0);
        pie.label_style((chart::FONT, 18).into_font().style(FontStyle::Bold).color(&BLACK));
        pie.percentages((chart::FONT, 16).into_font().color(&BLACK));
        area.draw(&pie)?;

        Ok(())
    }
}

/// Axis label for a categorical axis laid out at integer positions.
///
/// Non-integer tick positions get no label.
fn category_label(labels: &[String], position: f64) -> String {
    let rounded = position.round();
    if (position - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Department;
    use crate::dataset::Dataset;
    use std::fs;

    const WIDTH: u32 = 1600;
    const HEIGHT: u32 = 1200;

    fn summary() -> AnalysisSummary {
        AnalysisSummary::from_dataset(&Dataset::generate(42), Department::Sales)
    }

    /// Text needs a system font; without one every panel fails to draw
    fn fonts_available() -> bool {
        match (chart::FONT, 12).into_font().box_size("Sales") {
            Ok(_) => true,
            Err(e) => {
                eprintln!("skipping chart drawing, no usable font: {e}");
                false
            }
        }
    }

    /// Draw one panel of a 2x2 grid into an in-memory RGB buffer
    fn draw_single_panel(index: usize, summary: &AnalysisSummary) -> Vec<u8> {
        let mut buffer = vec![255u8; (WIDTH * HEIGHT * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
            let panels = root.split_evenly((2, 2));
            let result = match index {
                0 => ChartRenderer::draw_department_panel(&panels[0], summary),
                1 => ChartRenderer::draw_histogram_panel(&panels[1], summary),
                2 => ChartRenderer::draw_performance_panel(&panels[2], summary),
                _ => ChartRenderer::draw_region_panel(&panels[3], summary),
            };
            result.expect("panel should draw");
            root.present().expect("buffer should flush");
        }
        buffer
    }

    /// Non-white pixels per quadrant, row-major (TL, TR, BL, BR)
    fn ink_per_quadrant(buffer: &[u8]) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for (i, px) in buffer.chunks_exact(3).enumerate() {
            if px.iter().all(|&c| c == 255) {
                continue;
            }
            let x = i as u32 % WIDTH;
            let y = i as u32 / WIDTH;
            let quadrant = usize::from(y >= HEIGHT / 2) * 2 + usize::from(x >= WIDTH / 2);
            counts[quadrant] += 1;
        }
        counts
    }

    fn assert_panel_stays_in_quadrant(index: usize) {
        if !fonts_available() {
            return;
        }
        let counts = ink_per_quadrant(&draw_single_panel(index, &summary()));
        let own = counts[index];
        let stray: usize = counts
            .iter()
            .enumerate()
            .filter(|(q, _)| *q != index)
            .map(|(_, c)| c)
            .sum();

        assert!(own > 0, "panel {index} drew nothing in its quadrant: {counts:?}");
        assert!(
            stray * 100 <= own,
            "panel {index} drew outside its quadrant: {counts:?}"
        );
    }

    #[test]
    fn test_department_panel_stays_in_top_left() {
        assert_panel_stays_in_quadrant(0);
    }

    #[test]
    fn test_histogram_panel_stays_in_top_right() {
        assert_panel_stays_in_quadrant(1);
    }

    #[test]
    fn test_performance_panel_stays_in_bottom_left() {
        assert_panel_stays_in_quadrant(2);
    }

    #[test]
    fn test_region_pie_stays_in_bottom_right() {
        assert_panel_stays_in_quadrant(3);
    }

    #[test]
    fn test_region_pie_centered_below_title() {
        if !fonts_available() {
            return;
        }
        let buffer = draw_single_panel(3, &summary());

        // A 40px box around the middle of the bottom-right panel is mostly slice
        let (cx, cy) = (WIDTH * 3 / 4, HEIGHT * 3 / 4 + 15);
        let mut inked = 0;
        for y in cy - 20..cy + 20 {
            for x in cx - 20..cx + 20 {
                let idx = ((y * WIDTH + x) * 3) as usize;
                if buffer[idx..idx + 3].iter().any(|&c| c != 255) {
                    inked += 1;
                }
            }
        }
        assert!(inked > 800, "pie missing at the panel center: {inked}/1600 px");
    }

    #[test]
    fn test_category_label() {
        let labels = vec!["Sales".to_string(), "HR".to_string()];
        assert_eq!(category_label(&labels, 0.0), "Sales");
        assert_eq!(category_label(&labels, 1.0), "HR");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 7.0), "");
    }

    #[test]
    fn test_render_writes_png() -> std::result::Result<(), Box<dyn Error>> {
        if !fonts_available() {
            return Ok(());
        }
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("chart.png");

        ChartRenderer::render(&summary(), &path)?;
        let bytes = fs::read(&path)?;
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));

        Ok(())
    }

    #[test]
    fn test_render_into_missing_directory_fails() {
        let path = Path::new("/definitely/not/a/real/dir/chart.png");
        let result = ChartRenderer::render(&summary(), path);
        assert!(matches!(result, Err(EmpvizError::Chart(_))));
    }
}
