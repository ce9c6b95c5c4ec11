//! Chart rendering to self-contained PNG images.
//!
//! Each rendering call draws into a stack-local RGB buffer via the plotters
//! bitmap backend and encodes the result as PNG. Nothing is shared between
//! calls, so repeated rendering in a long-lived process accumulates no
//! drawing state.
//!
//! Rectangular charts are 1000x600 pixels, the pie chart is 800x800.

use std::io::Cursor;

use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{PurserError, Result};

use super::stats::{PORT_NAMES, value_counts};
use super::Analyzer;

/// Width of rectangular charts, in pixels.
pub const CHART_WIDTH: u32 = 1000;
/// Height of rectangular charts, in pixels.
pub const CHART_HEIGHT: u32 = 600;
/// Side length of the (square) pie chart, in pixels.
pub const PIE_SIZE: u32 = 800;

const HISTOGRAM_BINS: usize = 30;

const AGE_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const FARE_COLOR: RGBColor = RGBColor(0x9b, 0x59, 0xb6);
const GENDER_COLORS: [RGBColor; 2] = [RGBColor(0xff, 0x6b, 0x6b), RGBColor(0x4e, 0xcd, 0xc4)];
const EMBARK_COLORS: [RGBColor; 3] = [
    RGBColor(0x34, 0x98, 0xdb),
    RGBColor(0xe7, 0x4c, 0x3c),
    RGBColor(0x2e, 0xcc, 0x71),
];
const CLASS_COLORS: [RGBColor; 3] = [
    RGBColor(0xe7, 0x4c, 0x3c),
    RGBColor(0xf3, 0x9c, 0x12),
    RGBColor(0x27, 0xae, 0x60),
];

type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Render a chart into an RGB buffer of the given size and encode it as PNG.
/// The buffer lives on the stack frame of this call and is released on every
/// exit path.
fn render_png<F>(width: u32, height: u32, draw: F) -> Result<Vec<u8>>
where
    F: for<'a> FnOnce(&DrawingArea<BitMapBackend<'a>, Shift>) -> DrawResult,
{
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PurserError::render(e.to_string()))?;
        draw(&root).map_err(|e| PurserError::render(e.to_string()))?;
        root.present()
            .map_err(|e| PurserError::render(e.to_string()))?;
    }

    let img = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| PurserError::render("rendered buffer has unexpected size"))?;
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| PurserError::render(e.to_string()))?;
    Ok(png)
}

/// Bin values into equal-width buckets over their own min..max range.
fn histogram_bins(values: &[f64], bins: usize) -> (f64, f64, Vec<usize>) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Degenerate case: all values equal
    let span = if max > min { max - min } else { 1.0 };
    let width = span / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    (min, min + span, counts)
}

/// Draw a 30-bin histogram with axis labels and a bold caption.
fn draw_histogram(
    root: &DrawingArea<BitMapBackend, Shift>,
    values: &[f64],
    title: &str,
    x_label: &str,
    color: RGBColor,
) -> DrawResult {
    let (min, max, counts) = histogram_bins(values, HISTOGRAM_BINS);
    let bin_width = (max - min) / HISTOGRAM_BINS as f64;
    let y_max = counts.iter().copied().max().unwrap_or(0) as f64 * 1.05 + 1.0;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(min..max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc("Frequency")
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    for (i, &count) in counts.iter().enumerate() {
        let x0 = min + i as f64 * bin_width;
        let x1 = x0 + bin_width;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, count as f64)],
            color.mix(0.7).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, count as f64)],
            BLACK.stroke_width(1),
        )))?;
    }

    Ok(())
}

/// Draw a labeled vertical bar chart with a value printed above each bar.
fn draw_bar_chart(
    root: &DrawingArea<BitMapBackend, Shift>,
    title: &str,
    x_label: &str,
    y_label: &str,
    bars: &[(String, f64, String)],
    palette: &[RGBColor],
) -> DrawResult {
    let y_max = bars.iter().map(|(_, v, _)| *v).fold(0.0, f64::max) * 1.15 + 1.0;
    let labels: Vec<&str> = bars.iter().map(|(l, _, _)| l.as_str()).collect();

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..bars.len() as u32).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if (*i as usize) < labels.len() => {
                labels[*i as usize].to_string()
            }
            _ => String::new(),
        })
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    let annotation = TextStyle::from(("sans-serif", 18).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    for (i, (_, value, annotation_text)) in bars.iter().enumerate() {
        let i = i as u32;
        let color = palette[i as usize % palette.len()];
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), *value),
            ],
            color.filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), *value),
            ],
            BLACK.stroke_width(1),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            annotation_text.clone(),
            (SegmentValue::CenterOf(i), *value + y_max * 0.01),
            annotation.clone(),
        )))?;
    }

    Ok(())
}

/// Draw one pie slice as a polygon fan, optionally offset ("exploded") from
/// the center along the slice bisector.
///
/// Angles are in degrees, measured counterclockwise from the positive x
/// axis (screen y points down, hence the sign flip on sin).
fn draw_pie_slice(
    root: &DrawingArea<BitMapBackend, Shift>,
    center: (i32, i32),
    radius: f64,
    start_deg: f64,
    sweep_deg: f64,
    explode: f64,
    color: RGBColor,
) -> DrawResult {
    let bisector = (start_deg + sweep_deg / 2.0).to_radians();
    let cx = center.0 + (explode * bisector.cos()) as i32;
    let cy = center.1 - (explode * bisector.sin()) as i32;

    let steps = 100;
    let mut points = Vec::with_capacity(steps + 2);
    points.push((cx, cy));
    for i in 0..=steps {
        let angle = (start_deg + sweep_deg * i as f64 / steps as f64).to_radians();
        let x = cx + (radius * angle.cos()) as i32;
        let y = cy - (radius * angle.sin()) as i32;
        points.push((x, y));
    }
    root.draw(&Polygon::new(points, color.filled()))?;

    Ok(())
}

impl Analyzer {
    /// Histogram of non-null passenger ages, 30 equal-width bins.
    pub fn age_histogram(&self) -> Result<Vec<u8>> {
        let ages = self.ages();
        if ages.is_empty() {
            return Err(PurserError::data_integrity(
                "column 'Age' has no values to plot",
            ));
        }
        render_png(CHART_WIDTH, CHART_HEIGHT, |root| {
            draw_histogram(root, &ages, "Distribution of Passenger Ages", "Age", AGE_COLOR)
        })
    }

    /// Histogram of ticket fares, 30 equal-width bins.
    pub fn fare_histogram(&self) -> Result<Vec<u8>> {
        let fares = self.fares();
        if fares.is_empty() {
            return Err(PurserError::data_integrity(
                "column 'Fare' has no values to plot",
            ));
        }
        render_png(CHART_WIDTH, CHART_HEIGHT, |root| {
            draw_histogram(
                root,
                &fares,
                "Distribution of Ticket Fares",
                "Fare ($)",
                FARE_COLOR,
            )
        })
    }

    /// Pie chart of the sex distribution: slices in descending count order,
    /// percentage labels to one decimal, largest slice exploded, fixed
    /// start angle of 90 degrees, counterclockwise.
    pub fn gender_pie_chart(&self) -> Result<Vec<u8>> {
        let counts = value_counts(self.dataset().records().iter().map(|r| r.sex.as_str()));
        if counts.is_empty() {
            return Err(PurserError::data_integrity(
                "column 'Sex' has no values to plot",
            ));
        }
        let total: usize = counts.iter().map(|(_, c)| c).sum();

        render_png(PIE_SIZE, PIE_SIZE, |root| {
            let center = (PIE_SIZE as i32 / 2, PIE_SIZE as i32 / 2 + 20);
            let radius = 280.0;

            root.draw_text(
                "Gender Distribution",
                &TextStyle::from(("sans-serif", 30).into_font())
                    .pos(Pos::new(HPos::Center, VPos::Top)),
                (PIE_SIZE as i32 / 2, 40),
            )?;

            let label_style = TextStyle::from(("sans-serif", 24).into_font())
                .pos(Pos::new(HPos::Center, VPos::Center));
            let pct_style = TextStyle::from(("sans-serif", 22).into_font())
                .pos(Pos::new(HPos::Center, VPos::Center));

            let mut start = 90.0;
            for (i, (label, count)) in counts.iter().enumerate() {
                let fraction = *count as f64 / total as f64;
                let sweep = fraction * 360.0;
                // Only the largest slice is offset from the center
                let explode = if i == 0 { radius * 0.05 } else { 0.0 };
                let color = GENDER_COLORS[i % GENDER_COLORS.len()];
                draw_pie_slice(root, center, radius, start, sweep, explode, color)?;

                let bisector = (start + sweep / 2.0).to_radians();
                let pct_r = radius * 0.6 + explode;
                let pct_pos = (
                    center.0 + (pct_r * bisector.cos()) as i32,
                    center.1 - (pct_r * bisector.sin()) as i32,
                );
                root.draw_text(&format!("{:.1}%", fraction * 100.0), &pct_style, pct_pos)?;

                let label_r = radius * 1.15 + explode;
                let label_pos = (
                    center.0 + (label_r * bisector.cos()) as i32,
                    center.1 - (label_r * bisector.sin()) as i32,
                );
                root.draw_text(label, &label_style, label_pos)?;

                start += sweep;
            }

            Ok(())
        })
    }

    /// Bar chart of passengers per embarkation port, most common first,
    /// with full port names and integer counts above the bars.
    pub fn embarkation_bar_chart(&self) -> Result<Vec<u8>> {
        let counts = value_counts(
            self.dataset()
                .records()
                .iter()
                .filter_map(|r| r.embarked.as_deref()),
        );
        if counts.is_empty() {
            return Err(PurserError::data_integrity(
                "column 'Embarked' has no values to plot",
            ));
        }

        let bars: Vec<(String, f64, String)> = counts
            .into_iter()
            .map(|(code, count)| {
                let name = PORT_NAMES
                    .get(code.as_str())
                    .map(|n| n.to_string())
                    .unwrap_or(code);
                (name, count as f64, count.to_string())
            })
            .collect();

        render_png(CHART_WIDTH, CHART_HEIGHT, |root| {
            draw_bar_chart(
                root,
                "Passengers by Embarkation Port",
                "Port",
                "Number of Passengers",
                &bars,
                &EMBARK_COLORS,
            )
        })
    }

    /// Bar chart of survival rate per passenger class, ascending class
    /// order, with the percentage printed above each bar.
    pub fn survival_by_class_bar_chart(&self) -> Result<Vec<u8>> {
        let records = self.dataset().records();
        if records.is_empty() {
            return Err(PurserError::data_integrity(
                "cannot plot survival rates over an empty dataset",
            ));
        }

        let mut classes: Vec<u8> = records.iter().map(|r| r.pclass).collect();
        classes.sort_unstable();
        classes.dedup();

        let bars: Vec<(String, f64, String)> = classes
            .into_iter()
            .map(|class| {
                let members = records.iter().filter(|r| r.pclass == class);
                let (total, survived) = members.fold((0usize, 0usize), |(t, s), r| {
                    (t + 1, s + usize::from(r.survived()))
                });
                let rate = survived as f64 / total as f64 * 100.0;
                (format!("Class {class}"), rate, format!("{rate:.1}%"))
            })
            .collect();

        render_png(CHART_WIDTH, CHART_HEIGHT, |root| {
            draw_bar_chart(
                root,
                "Survival Rate by Passenger Class",
                "Passenger Class",
                "Survival Rate (%)",
                &bars,
                &CLASS_COLORS,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_bins_span_and_counts() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let (min, max, counts) = histogram_bins(&values, 5);
        assert_eq!(min, 0.0);
        assert_eq!(max, 9.0);
        assert_eq!(counts.len(), 5);
        assert_eq!(counts.iter().sum::<usize>(), values.len());
        // Maximum lands in the last bin
        assert!(counts[4] >= 1);
    }

    #[test]
    fn test_histogram_bins_degenerate_single_value() {
        let (min, max, counts) = histogram_bins(&[3.0, 3.0, 3.0], 4);
        assert_eq!(min, 3.0);
        assert_eq!(max, 4.0);
        assert_eq!(counts.iter().sum::<usize>(), 3);
        assert_eq!(counts[0], 3);
    }
}
