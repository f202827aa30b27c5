//! Raster preview for scenes.
//!
//! Consumes the declarative drawing list from [`crate::scene`] and
//! produces an image buffer using tiny-skia for anti-aliased 2D
//! rendering. The scene stays technology-agnostic; this module is just
//! one consumer of it.

use image::{Rgb, RgbImage};
use rusttype::{point as rt_point, Scale};
use tiny_skia::{FillRule, Paint as SkiaPaint, PathBuilder, Pixmap, Stroke, Transform};

use crate::font_manager;
use crate::scene::{scene_background, Color, DrawPrimitive, Paint, Scene, TextAnchor};

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Renders a scene to an RGB image of the given dimensions.
pub fn render_scene(scene: &Scene, width: u32, height: u32) -> RgbImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    pixmap.fill(skia_color(scene_background()));

    for primitive in &scene.primitives {
        match primitive {
            DrawPrimitive::Line { from, to, paint } => {
                let mut pb = PathBuilder::new();
                pb.move_to(from.0 as f32, from.1 as f32);
                pb.line_to(to.0 as f32, to.1 as f32);
                if let Some(path) = pb.finish() {
                    paint_path(&mut pixmap, &path, paint);
                }
            }
            DrawPrimitive::Circle {
                center,
                radius,
                paint,
            } => {
                if let Some(path) =
                    PathBuilder::from_circle(center.0 as f32, center.1 as f32, *radius as f32)
                {
                    paint_path(&mut pixmap, &path, paint);
                }
            }
            DrawPrimitive::Path { path, paint } => {
                if let Some(sk_path) = lyon_to_skia(path) {
                    paint_path(&mut pixmap, &sk_path, paint);
                }
            }
            DrawPrimitive::Text {
                position,
                content,
                size,
                color,
                anchor,
            } => {
                draw_text(&mut pixmap, *position, content, *size, *color, *anchor);
            }
        }
    }

    let data = pixmap.data();
    RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}

fn paint_path(pixmap: &mut Pixmap, path: &tiny_skia::Path, paint: &Paint) {
    if let Some(fill) = paint.fill {
        let mut sk = SkiaPaint::default();
        sk.set_color(skia_color(fill));
        sk.anti_alias = true;
        pixmap.fill_path(path, &sk, FillRule::Winding, Transform::identity(), None);
    }
    if let Some(stroke_color) = paint.stroke {
        let mut sk = SkiaPaint::default();
        sk.set_color(skia_color(stroke_color));
        sk.anti_alias = true;
        let stroke = Stroke {
            width: paint.stroke_width.max(0.1) as f32,
            ..Default::default()
        };
        pixmap.stroke_path(path, &sk, &stroke, Transform::identity(), None);
    }
}

/// Converts a lyon path to a tiny-skia path, event by event.
fn lyon_to_skia(path: &lyon::path::Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for event in path.iter() {
        match event {
            lyon::path::Event::Begin { at } => {
                pb.move_to(at.x, at.y);
            }
            lyon::path::Event::Line { from: _, to } => {
                pb.line_to(to.x, to.y);
            }
            lyon::path::Event::Quadratic { from: _, ctrl, to } => {
                pb.quad_to(ctrl.x, ctrl.y, to.x, to.y);
            }
            lyon::path::Event::Cubic {
                from: _,
                ctrl1,
                ctrl2,
                to,
            } => {
                pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y);
            }
            lyon::path::Event::End {
                last: _,
                first: _,
                close,
            } => {
                if close {
                    pb.close();
                }
            }
        }
    }
    pb.finish()
}

/// Draws a text run by blending glyph coverage into the pixmap.
/// Silently skipped when the host has no usable font.
fn draw_text(
    pixmap: &mut Pixmap,
    position: (f64, f64),
    content: &str,
    size: f64,
    color: Color,
    anchor: TextAnchor,
) {
    let Some(font) = font_manager::preview_font() else {
        return;
    };

    let scale = Scale::uniform(size as f32);
    let v_metrics = font.v_metrics(scale);

    let text_width: f32 = font
        .layout(content, scale, rt_point(0.0, 0.0))
        .filter_map(|glyph| glyph.pixel_bounding_box().map(|bb| bb.max.x as f32))
        .last()
        .unwrap_or(0.0);

    let start_x = match anchor {
        TextAnchor::Start => position.0 as f32,
        TextAnchor::Middle => position.0 as f32 - text_width / 2.0,
    };
    // Center the cap height on the anchor point.
    let baseline_y = position.1 as f32 + (v_metrics.ascent + v_metrics.descent) / 2.0;

    let width = pixmap.width();
    let height = pixmap.height();

    for glyph in font.layout(content, scale, rt_point(start_x, baseline_y)) {
        let Some(bounding_box) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bounding_box.min.x;
            let py = gy as i32 + bounding_box.min.y;
            if px < 0 || px >= width as i32 || py < 0 || py >= height as i32 {
                return;
            }
            let alpha = coverage * (color.a as f32 / 255.0);
            if alpha <= 0.0 {
                return;
            }
            let idx = ((py as u32 * width + px as u32) * 4) as usize;
            let pixel = &mut pixmap.data_mut()[idx..idx + 4];
            pixel[0] = blend(color.r, pixel[0], alpha);
            pixel[1] = blend(color.g, pixel[1], alpha);
            pixel[2] = blend(color.b, pixel[2], alpha);
            pixel[3] = 255;
        });
    }
}

fn blend(src: u8, dst: u8, alpha: f32) -> u8 {
    (src as f32 * alpha + dst as f32 * (1.0 - alpha)) as u8
}
