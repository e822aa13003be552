//! Marker and attribution drawing on a finished canvas.

use crate::mosaic::MosaicError;
use ab_glyph::{FontRef, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Shader, Stroke, Transform};

/// Attribution required by the OpenStreetMap tile usage policy.
pub const ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Height of the attribution strip in pixels.
pub const STRIP_HEIGHT: u32 = 24;

const MARKER_RADIUS: f32 = 8.0;
const MARKER_OUTLINE: f32 = 3.0;
const DOT_RADIUS: f32 = 4.0;
const SHADOW_OFFSET: f32 = 2.0;

const MARKER_RGB: (u8, u8, u8) = (255, 59, 48);
const SHADOW_ALPHA: u8 = 100;
const STRIP_ALPHA: u8 = 150;

const TEXT_SCALE: f32 = 13.0;
const TEXT_LEFT: i32 = 8;
const TEXT_TOP_PADDING: i32 = 6;

static FONT_DATA: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

fn solid(r: u8, g: u8, b: u8, a: u8) -> Paint<'static> {
    Paint {
        shader: Shader::SolidColor(Color::from_rgba8(r, g, b, a)),
        anti_alias: true,
        ..Default::default()
    }
}

/// Draws the location marker and attribution strip onto `canvas`.
///
/// The marker is centered on the canvas; the strip spans the bottom edge.
/// Shapes are rendered on a separate layer and blended in, so pixels they
/// do not cover keep their exact values.
pub fn annotate(canvas: &mut RgbaImage) -> Result<(), MosaicError> {
    let (width, height) = canvas.dimensions();

    let mut layer = Pixmap::new(width, height).ok_or(MosaicError::Surface { width, height })?;
    draw_strip(&mut layer, width, height);
    draw_marker(&mut layer, (width / 2) as f32, (height / 2) as f32);
    composite(canvas, &layer);

    draw_attribution_text(canvas)
}

fn draw_marker(pixmap: &mut Pixmap, cx: f32, cy: f32) {
    let (r, g, b) = MARKER_RGB;

    // Drop shadow
    if let Some(shadow) =
        PathBuilder::from_circle(cx + SHADOW_OFFSET, cy + SHADOW_OFFSET, MARKER_RADIUS)
    {
        pixmap.fill_path(
            &shadow,
            &solid(0, 0, 0, SHADOW_ALPHA),
            FillRule::Winding,
            Transform::default(),
            None,
        );
    }

    if let Some(disc) = PathBuilder::from_circle(cx, cy, MARKER_RADIUS) {
        pixmap.fill_path(
            &disc,
            &solid(r, g, b, 255),
            FillRule::Winding,
            Transform::default(),
            None,
        );
    }

    // Outline stays inside the disc
    if let Some(ring) = PathBuilder::from_circle(cx, cy, MARKER_RADIUS - MARKER_OUTLINE / 2.0) {
        pixmap.stroke_path(
            &ring,
            &solid(255, 255, 255, 255),
            &Stroke {
                width: MARKER_OUTLINE,
                ..Default::default()
            },
            Transform::default(),
            None,
        );
    }

    if let Some(dot) = PathBuilder::from_circle(cx, cy, DOT_RADIUS) {
        pixmap.fill_path(
            &dot,
            &solid(255, 255, 255, 255),
            FillRule::Winding,
            Transform::default(),
            None,
        );
    }
}

fn draw_strip(pixmap: &mut Pixmap, width: u32, height: u32) {
    let strip = STRIP_HEIGHT.min(height);
    if let Some(rect) = Rect::from_xywh(
        0.0,
        (height - strip) as f32,
        width as f32,
        strip as f32,
    ) {
        pixmap.fill_rect(
            rect,
            &solid(0, 0, 0, STRIP_ALPHA),
            Transform::default(),
            None,
        );
    }
}

fn draw_attribution_text(canvas: &mut RgbaImage) -> Result<(), MosaicError> {
    let font = FontRef::try_from_slice(FONT_DATA).map_err(|e| MosaicError::Font(e.to_string()))?;
    let top = canvas.height() as i32 - STRIP_HEIGHT as i32 + TEXT_TOP_PADDING;

    draw_text_mut(
        canvas,
        Rgba([255, 255, 255, 255]),
        TEXT_LEFT,
        top,
        PxScale::from(TEXT_SCALE),
        &font,
        ATTRIBUTION,
    );
    Ok(())
}

/// Blends the covered pixels of a premultiplied `layer` over `canvas`.
fn composite(canvas: &mut RgbaImage, layer: &Pixmap) {
    for (dst, src) in canvas.pixels_mut().zip(layer.pixels()) {
        if src.alpha() == 0 {
            continue;
        }
        let src = src.demultiply();
        *dst = source_over(*dst, Rgba([src.red(), src.green(), src.blue(), src.alpha()]));
    }
}

/// Straight-alpha source-over.
fn source_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = f32::from(src[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = (f32::from(src[i]) * sa + f32::from(dst[i]) * da * (1.0 - sa)) / out_a;
        out[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba(out)
}
