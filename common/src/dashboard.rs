//! Static dashboard charts.
//!
//! The dashboard shows fixed sample figures; nothing is fetched. This module
//! owns the figures and the chart geometry so the view only emits SVG.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: &'static str,
    pub kind: ChartKind,
    pub points: &'static [Point],
    /// CSS colours; bars use the first, pie slices cycle through them.
    pub colors: &'static [&'static str],
}

const PIE_COLORS: &[&str] = &[
    "rgba(255, 99, 132, 0.6)",
    "rgba(54, 162, 235, 0.6)",
    "rgba(255, 206, 86, 0.6)",
];

pub const MONTHLY_PARTICIPATION: Chart = Chart {
    title: "Monthly Course Participation",
    kind: ChartKind::Bar,
    points: &[
        Point { label: "Jan", value: 65 },
        Point { label: "Feb", value: 59 },
        Point { label: "Mar", value: 80 },
        Point { label: "Apr", value: 81 },
        Point { label: "May", value: 56 },
        Point { label: "Jun", value: 55 },
    ],
    colors: &["rgba(75, 192, 192, 0.6)"],
};

pub const COURSE_TYPE_DISTRIBUTION: Chart = Chart {
    title: "Course Type Distribution",
    kind: ChartKind::Pie,
    points: &[
        Point { label: "Basic", value: 300 },
        Point { label: "Advanced", value: 50 },
        Point { label: "Expert", value: 100 },
    ],
    colors: PIE_COLORS,
};

pub const COURSE_STATUS_DISTRIBUTION: Chart = Chart {
    title: "Course Status Distribution",
    kind: ChartKind::Pie,
    points: &[
        Point { label: "Ongoing", value: 12 },
        Point { label: "Completed", value: 19 },
        Point { label: "Upcoming", value: 3 },
    ],
    colors: PIE_COLORS,
};

impl Chart {
    pub fn color(&self, index: usize) -> &'static str {
        self.colors[index % self.colors.len()]
    }

    pub fn max_value(&self) -> u32 {
        self.points.iter().map(|p| p.value).max().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.points.iter().map(|p| p.value).sum()
    }
}

/// One bar in a `width` x `height` plot area, y growing downwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lays bars out side by side, scaled so the tallest fills `height`.
/// Bars take 80% of their slot.
pub fn bar_layout(chart: &Chart, width: f64, height: f64) -> Vec<Bar> {
    let count = chart.points.len();
    if count == 0 {
        return Vec::new();
    }
    let slot = width / count as f64;
    let max = chart.max_value().max(1) as f64;

    chart
        .points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let bar_height = point.value as f64 / max * height;
            Bar {
                label: point.label,
                value: point.value,
                x: index as f64 * slot + slot * 0.1,
                y: height - bar_height,
                width: slot * 0.8,
                height: bar_height,
            }
        })
        .collect()
}

/// A pie slice; angles in radians, clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: u32,
    pub start: f64,
    pub end: f64,
}

impl Slice {
    pub fn share(&self) -> f64 {
        (self.end - self.start) / (2.0 * PI)
    }

    /// SVG path of this slice for a circle at (`cx`, `cy`) of radius `r`.
    pub fn path(&self, cx: f64, cy: f64, r: f64) -> String {
        let point = |angle: f64| (cx + r * angle.sin(), cy - r * angle.cos());
        if self.share() >= 0.9999 {
            // A single full slice cannot be drawn as one arc.
            return format!(
                "M {cx} {top} A {r} {r} 0 1 1 {cx} {bottom} A {r} {r} 0 1 1 {cx} {top} Z",
                top = cy - r,
                bottom = cy + r,
            );
        }
        let (x0, y0) = point(self.start);
        let (x1, y1) = point(self.end);
        let large_arc = if self.end - self.start > PI { 1 } else { 0 };
        format!("M {cx} {cy} L {x0:.3} {y0:.3} A {r} {r} 0 {large_arc} 1 {x1:.3} {y1:.3} Z")
    }
}

pub fn pie_slices(chart: &Chart) -> Vec<Slice> {
    let total = chart.total();
    if total == 0 {
        return Vec::new();
    }
    let mut start = 0.0;
    chart
        .points
        .iter()
        .map(|point| {
            let end = start + point.value as f64 / total as f64 * 2.0 * PI;
            let slice = Slice {
                label: point.label,
                value: point.value,
                start,
                end,
            };
            start = end;
            slice
        })
        .collect()
}
