use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

use crate::constants::arcs::{END_DEGREES, START_DEGREES};
use crate::constants::palette::{self, TRANSPARENT};
use crate::geometry::{BoxGeometry, IconGeometry};

/// Rectangle with a one pixel outline, corners inclusive, clipped to the image
fn draw_outlined_rect(img: &mut RgbaImage, rect: &BoxGeometry, fill: Rgba<u8>, outline: Rgba<u8>) {
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.right(), rect.bottom());

    for py in y0..=y1.min(img.height().saturating_sub(1)) {
        for px in x0..=x1.min(img.width().saturating_sub(1)) {
            let on_border = px == x0 || px == x1 || py == y0 || py == y1;
            img.put_pixel(px, py, if on_border { outline } else { fill });
        }
    }
}

/// Circular arc centred on pixel `(cx, cy)`.
///
/// The stroke grows inward from `radius`, so a pixel is painted when its
/// centre lies in the ring `(radius + 0.5 - width, radius + 0.5]` and its
/// angle falls inside `[start, end]` degrees, clockwise from +x.
fn draw_arc(
    img: &mut RgbaImage,
    (cx, cy): (u32, u32),
    radius: u32,
    (start, end): (f32, f32),
    width: u32,
    color: Rgba<u8>,
) {
    let outer = radius as f32 + 0.5;
    let inner = outer - width as f32;

    let x_min = cx.saturating_sub(radius);
    let y_min = cy.saturating_sub(radius);
    let x_max = (cx + radius).min(img.width().saturating_sub(1));
    let y_max = (cy + radius).min(img.height().saturating_sub(1));

    for py in y_min..=y_max {
        for px in x_min..=x_max {
            let dx = px as f32 - cx as f32;
            let dy = py as f32 - cy as f32;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > outer || dist <= inner {
                continue;
            }

            let angle = dy.atan2(dx).to_degrees();
            if angle >= start && angle <= end {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Paint the speaker icon described by `geometry` onto a fresh transparent canvas
pub fn render_icon(geometry: &IconGeometry) -> RgbaImage {
    let size = geometry.size;
    let mut img = RgbaImage::from_pixel(size, size, Rgba(TRANSPARENT));

    draw_outlined_rect(
        &mut img,
        &geometry.speaker,
        Rgba(palette::SPEAKER_FILL),
        Rgba(palette::SPEAKER_OUTLINE),
    );

    for wave in geometry.drawn_waves() {
        draw_arc(
            &mut img,
            (geometry.wave_x, geometry.center_y),
            wave.radius,
            (START_DEGREES, END_DEGREES),
            geometry.stroke_width,
            Rgba(palette::WAVE_STROKE),
        );
    }

    img
}

pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to save icon to {}", path.display()))
}
