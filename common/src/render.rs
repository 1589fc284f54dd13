//! Draw dispatch.
//!
//! A frame is first described as an ordered list of [`DrawOp`]s by
//! [`frame_ops`], then executed against any `DrawTarget` by [`draw_ops`].
//! Keeping the two apart lets the layering be tested without a display.
//!
//! # Interactive frame (12 ops)
//!
//! | # | Op | Paint |
//! |---|----|-------|
//! | 1 | Clear | theme background |
//! | 2-4 | hour: outer ring, inner ring, pointer | accent, background, pointer |
//! | 5-7 | minute: outer ring, inner ring, pointer | accent, background, pointer |
//! | 8-10 | second: outer ring, inner ring, pointer | accent, background, pointer |
//! | 11 | core disc | background |
//! | 12 | center ball | accent |
//!
//! Rings are drawn outermost first (the hour ring is the largest), so each
//! inner ring cuts the previous outer disc into a band.
//!
//! # Ambient frame (4 ops)
//!
//! Black clear, minute and hour pointers, center ball, all in the pointer
//! paint. No seconds, no rings, no pulse.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use heapless::Vec;

use crate::colors::{BLACK, blend};
use crate::config::{CENTER_BALL_RADIUS, INNER_DISC_INSET, RING_WIDTH};
use crate::geometry::{FaceGeometry, HandVectors, PointF, round};
use crate::paints::{FacePaints, Paint};

/// Upper bound on ops in one frame.
pub const MAX_FRAME_OPS: usize = 12;

/// Blend factor toward the background for the anti-aliasing halo.
const HALO_BLEND: f32 = 0.5;

/// One primitive draw call.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DrawOp {
    /// Fill the whole surface.
    Clear(Rgb565),
    /// Filled circle.
    Circle { center: PointF, radius: f32, paint: Paint },
    /// Stroked line.
    Line { from: PointF, to: PointF, paint: Paint },
}

pub type FrameOps = Vec<DrawOp, MAX_FRAME_OPS>;

/// Everything a frame depends on.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    pub geometry: &'a FaceGeometry,
    pub hands: &'a HandVectors,
    pub paints: &'a FacePaints,
    /// Pulse jitter; ignored in ambient mode.
    pub diff: f32,
    pub ambient: bool,
}

/// Describe a frame.
pub fn frame_ops(input: &FrameInput<'_>) -> FrameOps {
    let mut ops = FrameOps::new();
    if input.ambient {
        ambient_ops(input, &mut ops);
    } else {
        interactive_ops(input, &mut ops);
    }
    ops
}

fn interactive_ops(
    input: &FrameInput<'_>,
    ops: &mut FrameOps,
) {
    let FrameInput {
        geometry,
        hands,
        paints,
        diff,
        ..
    } = *input;
    let center = geometry.center;

    let ring = |length: f32, inner_radius: f32, outer: Paint, inner: Paint| {
        [
            DrawOp::Circle {
                center,
                radius: length + RING_WIDTH,
                paint: outer,
            },
            DrawOp::Circle {
                center,
                radius: inner_radius,
                paint: inner,
            },
        ]
    };
    let pointer = |tip: PointF, jitter: f32| DrawOp::Line {
        from: center,
        to: center.add(tip).offset(jitter, jitter),
        paint: paints.pointer,
    };

    let hour = geometry.hour_length;
    let minute = geometry.minute_length;
    let second = geometry.second_length;

    let [hour_outer, hour_inner] = ring(hour, hour + diff, paints.hour_outer, paints.hour_inner);
    let [minute_outer, minute_inner] = ring(minute, minute - diff, paints.minute_outer, paints.minute_inner);
    let [second_outer, second_inner] = ring(second, second + diff, paints.second_outer, paints.second_inner);

    let sequence = [
        DrawOp::Clear(paints.background.color),
        hour_outer,
        hour_inner,
        pointer(hands.hour, -diff),
        minute_outer,
        minute_inner,
        pointer(hands.minute, diff),
        second_outer,
        second_inner,
        pointer(hands.second, diff),
        DrawOp::Circle {
            center,
            radius: second - (INNER_DISC_INSET - RING_WIDTH),
            paint: paints.core,
        },
        DrawOp::Circle {
            center,
            radius: CENTER_BALL_RADIUS,
            paint: paints.center_ball,
        },
    ];

    for op in sequence {
        ops.push(op).ok();
    }
}

fn ambient_ops(
    input: &FrameInput<'_>,
    ops: &mut FrameOps,
) {
    let center = input.geometry.center;
    let pointer = input.paints.pointer;

    let sequence = [
        DrawOp::Clear(BLACK),
        DrawOp::Line {
            from: center,
            to: center.add(input.hands.minute),
            paint: pointer,
        },
        DrawOp::Line {
            from: center,
            to: center.add(input.hands.hour),
            paint: pointer,
        },
        DrawOp::Circle {
            center,
            radius: CENTER_BALL_RADIUS,
            paint: Paint::fill(pointer.color),
        },
    ];

    for op in sequence {
        ops.push(op).ok();
    }
}

/// Execute draw ops in order.
///
/// Anti-aliased lines get a one-pixel halo blended toward the most recent
/// clear color; hard-edged lines are drawn as-is.
pub fn draw_ops<D>(
    display: &mut D,
    ops: &[DrawOp],
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut background = BLACK;

    for op in ops {
        match *op {
            DrawOp::Clear(color) => {
                background = color;
                display.clear(color).ok();
            }
            DrawOp::Circle { center, radius, paint } => {
                let diameter = round(2.0 * radius).max(0) as u32;
                if diameter == 0 {
                    continue;
                }
                Circle::with_center(center.to_point(), diameter)
                    .into_styled(PrimitiveStyle::with_fill(paint.color))
                    .draw(display)
                    .ok();
            }
            DrawOp::Line { from, to, paint } => {
                let line = Line::new(from.to_point(), to.to_point());
                if paint.anti_alias {
                    let halo = blend(paint.color, background, HALO_BLEND);
                    line.into_styled(PrimitiveStyle::with_stroke(halo, paint.stroke_width + 2))
                        .draw(display)
                        .ok();
                }
                line.into_styled(PrimitiveStyle::with_stroke(paint.color, paint.stroke_width))
                    .draw(display)
                    .ok();
            }
        }
    }
}
