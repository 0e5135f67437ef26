use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::ColorMap;
use crate::data::aggregate::FrequencyTable;

const CHART_HEIGHT: f32 = 260.0;

/// Shown in place of a chart when the filters match nothing.
pub const NO_DATA: &str = "Não há nenhum dado para exibir";

/// Titles and axis labels of one chart.
pub struct ChartLabels<'a> {
    pub title: &'a str,
    pub x_axis: &'a str,
    pub y_axis: &'a str,
}

pub fn no_data(ui: &mut Ui) {
    egui::Frame::group(ui.style())
        .fill(Color32::from_rgb(255, 243, 205))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("⚠ {NO_DATA}")).color(Color32::from_rgb(133, 100, 4)));
        });
}

// ---------------------------------------------------------------------------
// Bar chart
// ---------------------------------------------------------------------------

/// Category-per-bar chart of a frequency table, most frequent on the left.
pub fn bar_chart(
    ui: &mut Ui,
    id: &str,
    labels: &ChartLabels<'_>,
    table: &FrequencyTable,
    colors: &ColorMap,
) {
    ui.strong(labels.title);
    if table.is_empty() {
        no_data(ui);
        return;
    }

    let categories: Vec<String> = table.iter().map(|e| e.category.clone()).collect();
    let bars: Vec<Bar> = table
        .iter()
        .enumerate()
        .map(|(i, e)| {
            Bar::new(i as f64, e.count as f64)
                .name(&e.category)
                .fill(colors.color_for(&e.category))
                .width(0.7)
        })
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label(labels.x_axis)
        .y_axis_label(labels.y_axis)
        .x_axis_formatter(move |mark, _range| category_label(&categories, mark.value))
        .include_y(0.0)
        .show_x(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Axis tick text: the category under an integer tick, blank elsewhere.
fn category_label(categories: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    categories
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Angular extent of one category, in radians, clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: String,
    pub count: usize,
    pub start: f32,
    pub sweep: f32,
}

impl PieSlice {
    pub fn percent(&self) -> f32 {
        self.sweep / TAU * 100.0
    }
}

/// Legend entry; carries the percentage that small slices leave unlabelled.
fn legend_text(slice: &PieSlice) -> String {
    format!("{} ({}, {:.1}%)", slice.category, slice.count, slice.percent())
}

pub fn pie_slices(table: &FrequencyTable) -> Vec<PieSlice> {
    let total = table.total();
    if total == 0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    table
        .iter()
        .map(|e| {
            let sweep = e.count as f32 / total as f32 * TAU;
            let slice = PieSlice {
                category: e.category.clone(),
                count: e.count,
                start,
                sweep,
            };
            start += sweep;
            slice
        })
        .collect()
}

/// Pie chart labelled with category and percentage, plus a legend below.
pub fn pie_chart(ui: &mut Ui, title: &str, table: &FrequencyTable, colors: &ColorMap) {
    ui.strong(title);
    if table.is_empty() {
        no_data(ui);
        return;
    }

    let slices = pie_slices(table);
    let size = Vec2::new(ui.available_width(), CHART_HEIGHT);
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.45;

    for slice in &slices {
        let color = colors.color_for(&slice.category);
        // Convex pieces of at most a quarter turn each.
        let pieces = (slice.sweep / FRAC_PI_2).ceil().max(1.0) as usize;
        for p in 0..pieces {
            let a0 = slice.start + slice.sweep * p as f32 / pieces as f32;
            let a1 = slice.start + slice.sweep * (p + 1) as f32 / pieces as f32;
            let steps = 24;
            let mut points = Vec::with_capacity(steps + 2);
            points.push(center);
            for s in 0..=steps {
                let a = a0 + (a1 - a0) * s as f32 / steps as f32;
                points.push(center + radius * Vec2::angled(a));
            }
            painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
        }
    }

    if slices.len() > 1 {
        for slice in &slices {
            painter.line_segment(
                [center, center + radius * Vec2::angled(slice.start)],
                Stroke::new(2.0, Color32::WHITE),
            );
        }
    }

    for slice in slices.iter().filter(|s| s.percent() >= 4.0) {
        let mid = slice.start + slice.sweep / 2.0;
        let pos = if slices.len() == 1 {
            center
        } else {
            center + radius * 0.62 * Vec2::angled(mid)
        };
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            format!("{}\n{:.1}%", slice.category, slice.percent()),
            FontId::proportional(12.0),
            Color32::from_gray(40),
        );
    }

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for slice in &slices {
            ui.label(RichText::new("■").color(colors.color_for(&slice.category)));
            ui.label(legend_text(slice));
        }
    });
}
