// SPDX-License-Identifier: MPL-2.0
//! Loading indicator drawn on a canvas.
//!
//! The spinner is stateless: its angle is derived from the time elapsed since
//! loading started, so it advances with whatever tick drives the view.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Time for one full turn.
const PERIOD: Duration = Duration::from_millis(1200);

const STROKE_WIDTH: f32 = 3.0;
const ARC_SEGMENTS: u16 = 30;

/// Rotation in radians after `elapsed`, wrapped into `[0, TAU)`.
#[must_use]
pub fn rotation_for(elapsed: Duration) -> f32 {
    let turns = elapsed.as_secs_f32() / PERIOD.as_secs_f32();
    turns.fract() * TAU
}

pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, elapsed: Duration) -> Self {
        Self {
            cache: Cache::default(),
            rotation: rotation_for(elapsed),
            color,
            size: sizing::SPINNER,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(Color {
                            a: 0.25,
                            ..self.color
                        }),
                );

                // Half-circle arc starting at the top.
                let start = self.rotation - PI / 2.0;
                let arc = Path::new(|builder| {
                    builder.move_to(point_on_circle(center, radius, start));
                    for i in 1..=ARC_SEGMENTS {
                        let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                        builder.line_to(point_on_circle(center, radius, start + PI * t));
                    }
                });
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}
