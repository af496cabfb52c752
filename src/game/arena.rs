use bevy::prelude::*;
use rand::Rng;

/// Floor shade variants, darkest first.
pub const FLOOR_SHADES: [Color; 4] = [
    Color::srgb(0.16, 0.21, 0.21),
    Color::srgb(0.19, 0.25, 0.25),
    Color::srgb(0.22, 0.28, 0.28),
    Color::srgb(0.25, 0.31, 0.31),
];

/// Tile counts covering a `width` x `height` window, one extra per axis so
/// the last partial row/column is filled.
pub fn tile_counts(width: u32, height: u32, tile_size: u32) -> (u32, u32) {
    let tile = tile_size.max(1);
    (width / tile + 1, height / tile + 1)
}

/// Centres of every background tile, column-major.
pub fn tile_grid(width: u32, height: u32, tile_size: u32) -> Vec<Vec2> {
    let tile = tile_size.max(1);
    let (tiles_x, tiles_y) = tile_counts(width, height, tile);
    let half = tile as f32 / 2.0;
    (0..tiles_x)
        .flat_map(|x| {
            (0..tiles_y).map(move |y| Vec2::new((x * tile) as f32 + half, (y * tile) as f32 + half))
        })
        .collect()
}

/// Uniformly random index into [`FLOOR_SHADES`].
pub fn pick_floor_variant<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(0..FLOOR_SHADES.len())
}
