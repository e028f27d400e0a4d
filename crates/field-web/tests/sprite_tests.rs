// Host-side tests for the point sprite pixels.

mod sprite {
    include!("../src/render/sprite.rs");
}

use sprite::radial_sprite;

fn alpha(px: &[u8], size: u32, x: u32, y: u32) -> u8 {
    px[((y * size + x) * 4 + 3) as usize]
}

#[test]
fn sprite_has_rgba_for_every_pixel() {
    assert_eq!(radial_sprite(32).len(), 32 * 32 * 4);
}

#[test]
fn sprite_is_white() {
    let px = radial_sprite(32);
    assert!(px.chunks_exact(4).all(|p| p[0] == 255 && p[1] == 255 && p[2] == 255));
}

#[test]
fn sprite_fades_from_centre_to_edge() {
    let px = radial_sprite(32);
    let centre = alpha(&px, 32, 16, 16);
    let mid = alpha(&px, 32, 24, 16);
    assert!(centre > 240);
    assert!(mid < centre && mid > 0);
    assert_eq!(alpha(&px, 32, 0, 0), 0);
    assert_eq!(alpha(&px, 32, 31, 31), 0);
}

#[test]
fn sprite_is_symmetric() {
    let px = radial_sprite(32);
    for y in 0..32 {
        for x in 0..32 {
            assert_eq!(alpha(&px, 32, x, y), alpha(&px, 32, 31 - x, y));
            assert_eq!(alpha(&px, 32, x, y), alpha(&px, 32, x, 31 - y));
        }
    }
}
