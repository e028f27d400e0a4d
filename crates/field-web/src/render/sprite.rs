// Soft round point sprite: white, alpha falling linearly from the centre to
// the inscribed circle's edge.

/// RGBA8 pixels of a `size`×`size` radial sprite, row-major.
pub fn radial_sprite(size: u32) -> Vec<u8> {
    let size = size.max(1);
    let radius = size as f32 / 2.0;
    let mut out = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let d = (dx * dx + dy * dy).sqrt();
            let a = (1.0 - d / radius).clamp(0.0, 1.0);
            out.extend_from_slice(&[255, 255, 255, (a * 255.0).round() as u8]);
        }
    }
    out
}
