//! Pixel-opacity collision masks.
//!
//! Overlap testing is mask-accurate, not bounding-box: a mask is derived
//! from a sprite image's alpha channel, and two sprites collide only where
//! opaque pixels of both occupy the same world position. Rotation is
//! handled at query time by inverse-rotating sample points into each
//! sprite's unrotated mask frame, which is equivalent to re-rasterising the
//! rotated silhouette every frame without the per-frame rebuild.

use bevy::prelude::*;

/// Alpha values strictly above this count as solid.
const ALPHA_THRESHOLD: u8 = 127;

/// Bitmap of solid pixels for one sprite image, row-major, top row first.
#[derive(Debug, Clone)]
pub struct AlphaMask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl AlphaMask {
    /// Build a mask from an RGBA8 image's alpha channel.
    ///
    /// Returns `None` when the image has no CPU-side data or is not in a
    /// 4-bytes-per-pixel layout.
    pub fn from_image(image: &Image) -> Option<Self> {
        let size = image.size();
        let (width, height) = (size.x as usize, size.y as usize);
        let data = image.data.as_ref()?;
        if data.len() < width * height * 4 {
            return None;
        }
        let bits = (0..width * height)
            .map(|i| data[i * 4 + 3] > ALPHA_THRESHOLD)
            .collect();
        Some(Self {
            width,
            height,
            bits,
        })
    }

    /// Fully solid mask of the given dimensions (tests and fallbacks).
    pub fn filled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![true; width * height],
        }
    }

    /// Mask from an explicit bit grid, row-major, top row first.
    /// Panics if `bits.len() != width * height` (construction-time misuse).
    pub fn from_bits(width: usize, height: usize, bits: Vec<bool>) -> Self {
        assert_eq!(bits.len(), width * height);
        Self {
            width,
            height,
            bits,
        }
    }

    /// Radius of the circle that bounds this mask under any rotation.
    #[inline]
    pub fn bounding_radius(&self) -> f32 {
        Vec2::new(self.width as f32, self.height as f32).length() / 2.0
    }

    /// Whether the world-space `point` lands on a solid pixel of this mask
    /// when the sprite is centred at `pos` and rotated by `angle_deg`
    /// (counter-clockwise degrees, matching sprite rotation).
    pub fn solid_at_world(&self, pos: Vec2, angle_deg: f32, point: Vec2) -> bool {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let d = point - pos;
        // Undo the sprite rotation to land in the unrotated mask frame.
        let local = Vec2::new(d.x * cos + d.y * sin, -d.x * sin + d.y * cos);
        // Mask rows run top-down while world y runs up.
        let col = (local.x + self.width as f32 / 2.0).floor();
        let row = (self.height as f32 / 2.0 - local.y).floor();
        if col < 0.0 || row < 0.0 {
            return false;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return false;
        }
        self.bits[row * self.width + col]
    }
}

/// Mask-accurate overlap test between two positioned, rotated sprites.
///
/// A cheap bounding-circle rejection runs first; the pixel scan only covers
/// the intersection of the two bounding boxes, sampling at 1 px resolution.
pub fn masks_overlap(
    a: &AlphaMask,
    a_pos: Vec2,
    a_angle_deg: f32,
    b: &AlphaMask,
    b_pos: Vec2,
    b_angle_deg: f32,
) -> bool {
    let ra = a.bounding_radius();
    let rb = b.bounding_radius();
    if a_pos.distance_squared(b_pos) > (ra + rb) * (ra + rb) {
        return false;
    }

    let min = (a_pos - Vec2::splat(ra)).max(b_pos - Vec2::splat(rb));
    let max = (a_pos + Vec2::splat(ra)).min(b_pos + Vec2::splat(rb));
    if min.x > max.x || min.y > max.y {
        return false;
    }

    let mut y = min.y.floor() + 0.5;
    while y <= max.y {
        let mut x = min.x.floor() + 0.5;
        while x <= max.x {
            let point = Vec2::new(x, y);
            if a.solid_at_world(a_pos, a_angle_deg, point)
                && b.solid_at_world(b_pos, b_angle_deg, point)
            {
                return true;
            }
            x += 1.0;
        }
        y += 1.0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_squares_overlap_when_close() {
        let a = AlphaMask::filled(10, 10);
        let b = AlphaMask::filled(10, 10);
        assert!(masks_overlap(&a, Vec2::ZERO, 0.0, &b, Vec2::new(6.0, 0.0), 0.0));
    }

    #[test]
    fn solid_squares_do_not_overlap_when_apart() {
        let a = AlphaMask::filled(10, 10);
        let b = AlphaMask::filled(10, 10);
        assert!(!masks_overlap(&a, Vec2::ZERO, 0.0, &b, Vec2::new(11.0, 0.0), 0.0));
    }

    #[test]
    fn transparent_pixels_do_not_collide() {
        // Left half solid, right half empty.
        let bits: Vec<bool> = (0..10 * 10).map(|i| i % 10 < 5).collect();
        let a = AlphaMask::from_bits(10, 10, bits);
        let b = AlphaMask::filled(2, 2);
        // Probe sits over the transparent right half.
        assert!(!masks_overlap(&a, Vec2::ZERO, 0.0, &b, Vec2::new(3.5, 0.0), 0.0));
        // Probe over the solid left half.
        assert!(masks_overlap(&a, Vec2::ZERO, 0.0, &b, Vec2::new(-3.5, 0.0), 0.0));
    }

    #[test]
    fn rotation_changes_the_silhouette() {
        // A tall 2×10 bar cannot reach a probe 4 px to the side...
        let bar = AlphaMask::filled(2, 10);
        let probe = AlphaMask::filled(2, 2);
        let probe_pos = Vec2::new(4.0, 0.0);
        assert!(!masks_overlap(&bar, Vec2::ZERO, 0.0, &probe, probe_pos, 0.0));
        // ...until it is rotated flat.
        assert!(masks_overlap(&bar, Vec2::ZERO, 90.0, &probe, probe_pos, 0.0));
    }

    #[test]
    fn from_image_thresholds_alpha() {
        use bevy::image::Image;
        use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

        // 2×1 RGBA8: left pixel opaque, right pixel faint.
        let data = vec![255, 255, 255, 255, 255, 255, 255, 40];
        let image = Image::new(
            Extent3d {
                width: 2,
                height: 1,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            data,
            TextureFormat::Rgba8UnormSrgb,
            Default::default(),
        );
        let mask = AlphaMask::from_image(&image).unwrap();
        assert!(mask.solid_at_world(Vec2::ZERO, 0.0, Vec2::new(-0.5, 0.0)));
        assert!(!mask.solid_at_world(Vec2::ZERO, 0.0, Vec2::new(0.5, 0.0)));
    }
}
