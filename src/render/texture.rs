//! Texture-Utilities für wgpu.

use image::RgbaImage;

/// Erstellt eine sRGB-Texture aus RGBA8-Pixeln und einen passenden Sampler.
///
/// Kanten werden geklemmt, damit UVs am Rand nicht auf die Gegenseite
/// umschlagen. Eine Mip-Stufe genügt, da das Bild nie stark verkleinert wird.
pub fn create_texture_from_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    pixels: &RgbaImage,
    label: &str,
) -> (wgpu::Texture, wgpu::Sampler) {
    let (width, height) = pixels.dimensions();

    log::debug!(
        "Erstelle wgpu-Texture '{}': {}x{} Pixel, {} Bytes",
        label,
        width,
        height,
        pixels.len()
    );

    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        texture.as_image_copy(),
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );

    let sampler = create_clamped_sampler(device, &format!("{}_sampler", label));
    (texture, sampler)
}

/// Linearer Sampler mit geklemmten Kanten.
pub fn create_clamped_sampler(device: &wgpu::Device, label: &str) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some(label),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

/// Zeilenlänge in Bytes, aufgerundet auf die Kopier-Ausrichtung von wgpu.
pub fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * 4;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_bytes_per_row() {
        assert_eq!(padded_bytes_per_row(1), 256);
        assert_eq!(padded_bytes_per_row(64), 256);
        assert_eq!(padded_bytes_per_row(65), 512);
        assert_eq!(padded_bytes_per_row(2048), 8192);
    }
}
