use crate::app::Message;
use crate::style::ACCENT;
use crate::weather::{DAILY, HOURLY};
use iced::{
    widget::canvas::{self, Frame, Path, Stroke, Text},
    Color, Point, Rectangle, Size, Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// Small temperature chart drawn on a canvas. Values are plotted in
/// Fahrenheit, as stored.
pub struct TemperatureChart {
    kind: ChartKind,
    labels: Vec<&'static str>,
    values: Vec<i32>,
}

// Room for the y-axis labels on the left and the x-axis labels underneath
const LEFT_MARGIN: f32 = 32.0;
const RIGHT_MARGIN: f32 = 12.0;
const TOP_MARGIN: f32 = 10.0;
const BOTTOM_MARGIN: f32 = 24.0;

impl TemperatureChart {
    pub fn hourly() -> Self {
        Self {
            kind: ChartKind::Line,
            labels: HOURLY.iter().map(|p| p.time).collect(),
            values: HOURLY.iter().map(|p| p.temp_f).collect(),
        }
    }

    pub fn daily_trend() -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: DAILY.iter().map(|p| p.day).collect(),
            values: DAILY.iter().map(|p| p.temp_f).collect(),
        }
    }

    /// Range covered by the y axis. Bars start at zero; lines get 10% padding
    /// around the data, or one degree either side for flat data.
    fn value_range(&self) -> (f32, f32) {
        let min = self.values.iter().copied().min().unwrap_or(0) as f32;
        let max = self.values.iter().copied().max().unwrap_or(0) as f32;

        match self.kind {
            ChartKind::Bar => (0.0, if max > 0.0 { max * 1.1 } else { 1.0 }),
            ChartKind::Line => {
                let range = max - min;
                if range > 0.0 {
                    (min - range * 0.1, max + range * 0.1)
                } else {
                    (min - 1.0, max + 1.0)
                }
            }
        }
    }

    /// Horizontal centre of the slot for the value at `index`
    fn x_for(&self, index: usize, graph_width: f32) -> f32 {
        let slot = graph_width / self.values.len().max(1) as f32;
        LEFT_MARGIN + slot * (index as f32 + 0.5)
    }

    fn y_for(value: f32, (min, max): (f32, f32), graph_height: f32) -> f32 {
        TOP_MARGIN + (1.0 - (value - min) / (max - min)) * graph_height
    }

    fn label(frame: &mut Frame, content: String, position: Point, color: Color) {
        frame.fill_text(Text {
            content,
            position,
            size: 11.0.into(),
            color,
            font: iced::Font::default(),
            horizontal_alignment: iced::alignment::Horizontal::Center,
            vertical_alignment: iced::alignment::Vertical::Center,
            line_height: iced::widget::text::LineHeight::default(),
            shaping: iced::widget::text::Shaping::default(),
        });
    }
}

impl canvas::Program<Message> for TemperatureChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        if self.values.is_empty() {
            return vec![frame.into_geometry()];
        }

        let text_color = theme.palette().text;
        let graph_width = bounds.width - LEFT_MARGIN - RIGHT_MARGIN;
        let graph_height = bounds.height - TOP_MARGIN - BOTTOM_MARGIN;
        let range = self.value_range();
        let axis_y = TOP_MARGIN + graph_height;

        // Axes
        let axis = Stroke::default().with_color(text_color).with_width(1.0);
        frame.stroke(
            &Path::line(
                Point::new(LEFT_MARGIN, TOP_MARGIN),
                Point::new(LEFT_MARGIN, axis_y),
            ),
            axis.clone(),
        );
        frame.stroke(
            &Path::line(
                Point::new(LEFT_MARGIN, axis_y),
                Point::new(LEFT_MARGIN + graph_width, axis_y),
            ),
            axis,
        );

        // Y-axis bounds
        for value in [range.0, range.1] {
            let y = Self::y_for(value, range, graph_height);
            Self::label(
                &mut frame,
                format!("{:.0}°", value),
                Point::new(LEFT_MARGIN / 2.0, y),
                text_color,
            );
        }

        for (i, label) in self.labels.iter().enumerate() {
            Self::label(
                &mut frame,
                label.to_string(),
                Point::new(self.x_for(i, graph_width), axis_y + BOTTOM_MARGIN / 2.0),
                text_color,
            );
        }

        match self.kind {
            ChartKind::Line => {
                let points: Vec<Point> = self
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| {
                        Point::new(
                            self.x_for(i, graph_width),
                            Self::y_for(v as f32, range, graph_height),
                        )
                    })
                    .collect();

                let line = Path::new(|builder| {
                    builder.move_to(points[0]);
                    for point in &points[1..] {
                        builder.line_to(*point);
                    }
                });
                frame.stroke(
                    &line,
                    Stroke::default().with_color(ACCENT).with_width(2.0),
                );
                for point in points {
                    frame.fill(&Path::circle(point, 3.0), ACCENT);
                }
            }
            ChartKind::Bar => {
                let slot = graph_width / self.values.len() as f32;
                let bar_width = slot * 0.6;
                for (i, &v) in self.values.iter().enumerate() {
                    let top = Self::y_for(v as f32, range, graph_height);
                    frame.fill_rectangle(
                        Point::new(self.x_for(i, graph_width) - bar_width / 2.0, top),
                        Size::new(bar_width, axis_y - top),
                        ACCENT,
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charts_use_static_datasets() {
        let hourly = TemperatureChart::hourly();
        assert_eq!(hourly.kind, ChartKind::Line);
        assert_eq!(hourly.values.len(), 8);
        assert_eq!(hourly.labels[0], "12AM");

        let daily = TemperatureChart::daily_trend();
        assert_eq!(daily.kind, ChartKind::Bar);
        assert_eq!(daily.labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn line_range_pads_data() {
        let (min, max) = TemperatureChart::hourly().value_range();
        // Data spans 65..=78
        assert!(min < 65.0 && min > 63.0);
        assert!(max > 78.0 && max < 80.0);
    }

    #[test]
    fn bar_range_starts_at_zero() {
        let (min, max) = TemperatureChart::daily_trend().value_range();
        assert_eq!(min, 0.0);
        assert!(max > 76.0);
    }

    #[test]
    fn flat_line_gets_nonzero_range() {
        let chart = TemperatureChart {
            kind: ChartKind::Line,
            labels: vec!["a", "b"],
            values: vec![70, 70],
        };
        assert_eq!(chart.value_range(), (69.0, 71.0));
    }

    #[test]
    fn points_stay_inside_graph() {
        let chart = TemperatureChart::hourly();
        let range = chart.value_range();
        let height = 150.0;
        for &v in &chart.values {
            let y = TemperatureChart::y_for(v as f32, range, height);
            assert!(y >= TOP_MARGIN && y <= TOP_MARGIN + height);
        }
        let width = 300.0;
        let first = chart.x_for(0, width);
        let last = chart.x_for(chart.values.len() - 1, width);
        assert!(first > LEFT_MARGIN);
        assert!(last < LEFT_MARGIN + width);
        assert!(first < last);
    }
}
