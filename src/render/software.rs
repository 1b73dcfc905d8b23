//! CPU-Rasterisierer für den Export ohne GPU.
//!
//! Rasterisiert die Dreiecke des verformten Gitters mit baryzentrischen
//! Koordinaten und tastet das Quellbild bilinear ab. Zeile 0 des Ergebnisses
//! ist die untere Bildkante, wie bei einem GPU-Readback mit Ursprung unten.

use super::types::RenderOptions;
use crate::core::{Camera2D, Vector3};
use crate::shared::{ExportError, ExportJob, OffscreenRasterizer, RasterImage, RowOrder};
use glam::{Vec2, Vec4};
use image::RgbaImage;

/// Rasterisiert Export-Jobs vollständig auf der CPU.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftwareRasterizer;

impl SoftwareRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl OffscreenRasterizer for SoftwareRasterizer {
    fn rasterize(&mut self, job: &ExportJob) -> Result<RasterImage, ExportError> {
        let (width, height) = (job.plan.width, job.plan.height);
        let options = RenderOptions::export(job.plan.projection);
        let view_proj = options.view_projection(&Camera2D::new(), [width as f32, height as f32]);
        // Transparent gelöscht
        let mut pixels = vec![0u8; width as usize * height as usize * 4];

        let screen: Vec<Vec2> = job
            .deformed
            .iter()
            .map(|p| to_pixel(view_proj, *p, width, height))
            .collect();
        let uvs = job.mesh.uvs();
        let source = job.image.pixels();

        for triangle in job.mesh.indices().chunks_exact(3) {
            let [a, b, c] = [
                triangle[0] as usize,
                triangle[1] as usize,
                triangle[2] as usize,
            ];
            let (Some(&pa), Some(&pb), Some(&pc)) = (screen.get(a), screen.get(b), screen.get(c))
            else {
                continue;
            };
            let (Some(&ua), Some(&ub), Some(&uc)) = (uvs.get(a), uvs.get(b), uvs.get(c)) else {
                continue;
            };
            fill_triangle(
                &mut pixels,
                width,
                height,
                [pa, pb, pc],
                [Vec2::from(ua), Vec2::from(ub), Vec2::from(uc)],
                source,
            );
        }

        log::debug!(
            "Software-Export: {} Dreiecke in {}x{} gerastert",
            job.mesh.triangle_count(),
            width,
            height
        );
        RasterImage::new(width, height, pixels, RowOrder::BottomUp)
    }
}

/// Weltpunkt → Pixelkoordinate mit Ursprung unten links.
fn to_pixel(projection: glam::Mat4, position: Vector3, width: u32, height: u32) -> Vec2 {
    let clip = projection * Vec4::new(position.x, position.y, 0.0, 1.0);
    let ndc = Vec2::new(clip.x, clip.y) / clip.w;
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * width as f32,
        (ndc.y + 1.0) * 0.5 * height as f32,
    )
}

fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

fn fill_triangle(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    corners: [Vec2; 3],
    uvs: [Vec2; 3],
    source: &RgbaImage,
) {
    let [p0, p1, p2] = corners;
    let area = edge(p0, p1, p2);
    if area.abs() < f32::EPSILON || !area.is_finite() {
        return;
    }

    let min = p0.min(p1).min(p2);
    let max = p0.max(p1).max(p2);
    let x0 = min.x.floor().max(0.0) as u32;
    let y0 = min.y.floor().max(0.0) as u32;
    let x1 = (max.x.ceil().max(0.0) as u32).min(width);
    let y1 = (max.y.ceil().max(0.0) as u32).min(height);

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            // Gewichte relativ zur Fläche; beide Umlaufrichtungen zulassen
            let w0 = edge(p1, p2, p) / area;
            let w1 = edge(p2, p0, p) / area;
            let w2 = edge(p0, p1, p) / area;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }
            let uv = uvs[0] * w0 + uvs[1] * w1 + uvs[2] * w2;
            let color = sample_bilinear(source, uv);
            let offset = (y as usize * width as usize + x as usize) * 4;
            pixels[offset..offset + 4].copy_from_slice(&color);
        }
    }
}

/// Bilineare Abtastung mit geklemmten Kanten; v = 0 ist die obere Bildzeile.
pub(crate) fn sample_bilinear(image: &RgbaImage, uv: Vec2) -> [u8; 4] {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return [0; 4];
    }
    let sx = (uv.x * w as f32 - 0.5).clamp(0.0, (w - 1) as f32);
    let sy = (uv.y * h as f32 - 0.5).clamp(0.0, (h - 1) as f32);
    let x0 = sx.floor() as u32;
    let y0 = sy.floor() as u32;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let fx = sx - x0 as f32;
    let fy = sy - y0 as f32;

    let p00 = image.get_pixel(x0, y0).0;
    let p10 = image.get_pixel(x1, y0).0;
    let p01 = image.get_pixel(x0, y1).0;
    let p11 = image.get_pixel(x1, y1).0;

    let mut out = [0u8; 4];
    for (i, channel) in out.iter_mut().enumerate() {
        let top = p00[i] as f32 * (1.0 - fx) + p10[i] as f32 * fx;
        let bottom = p01[i] as f32 * (1.0 - fx) + p11[i] as f32 * fx;
        *channel = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
    }
    out
}
