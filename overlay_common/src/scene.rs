//! Synthetic restaurant floor scene. Stands in for a camera frame so the
//! pipeline can be exercised end to end without real imagery.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_text_mut,
};
use imageproc::rect::Rect;

use crate::font::{overlay_font, scene_scale};

/// Scene dimensions, px.
pub const SCENE_WIDTH: u32 = 700;
pub const SCENE_HEIGHT: u32 = 450;

pub const FLOOR_COLOR: Rgba<u8> = Rgba([0xf8, 0xf9, 0xfa, 0xff]);
pub const FLOOR_GRID_COLOR: Rgba<u8> = Rgba([0xdc, 0xdc, 0xdc, 0xff]);
pub const TABLE_BODY_COLOR: Rgba<u8> = Rgba([0x8b, 0x45, 0x13, 0xff]);
pub const TABLE_TOP_COLOR: Rgba<u8> = Rgba([0xa0, 0x52, 0x2d, 0xff]);
pub const CHAIR_COLOR: Rgba<u8> = Rgba([0x4a, 0x55, 0x68, 0xff]);
pub const ITEM_COLOR: Rgba<u8> = Rgba([0xe2, 0xe8, 0xf0, 0xff]);
const NUMBER_COLOR: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);

const FLOOR_GRID_STEP: u32 = 50;
const TABLE_WIDTH: u32 = 120;
const TABLE_HEIGHT: u32 = 100;
const TABLE_TOP_INSET: i32 = 10;
const CHAIR_RADIUS: i32 = 15;

/// Fixed arrangement: table top-left corner plus whether the table is
/// dressed as occupied. Mirrors the stub provider's canned records so demo
/// detections land exactly on what the scene shows.
const TABLE_LAYOUT: [(i32, i32, bool); 6] = [
    (100, 80, true),
    (280, 80, false),
    (460, 80, true),
    (100, 240, false),
    (280, 240, true),
    (460, 240, false),
];

/// Produce the fixed 700x450 demo scene.
///
/// Constant-table drawing with no randomness or global state; repeated
/// calls return byte-identical rasters.
pub fn demo_scene() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(SCENE_WIDTH, SCENE_HEIGHT, FLOOR_COLOR);
    draw_floor_grid(&mut img);

    let font = overlay_font();
    for (i, &(x, y, occupied)) in TABLE_LAYOUT.iter().enumerate() {
        draw_filled_rect_mut(
            &mut img,
            Rect::at(x, y).of_size(TABLE_WIDTH, TABLE_HEIGHT),
            TABLE_BODY_COLOR,
        );
        draw_filled_rect_mut(
            &mut img,
            Rect::at(x + TABLE_TOP_INSET, y + TABLE_TOP_INSET).of_size(
                TABLE_WIDTH - 2 * TABLE_TOP_INSET as u32,
                TABLE_HEIGHT - 2 * TABLE_TOP_INSET as u32,
            ),
            TABLE_TOP_COLOR,
        );

        if occupied {
            // A chair disc above and below the table, plus items on top.
            draw_filled_circle_mut(&mut img, (x + 60, y - 10), CHAIR_RADIUS, CHAIR_COLOR);
            draw_filled_circle_mut(&mut img, (x + 60, y + 110), CHAIR_RADIUS, CHAIR_COLOR);
            draw_filled_rect_mut(&mut img, Rect::at(x + 30, y + 40).of_size(20, 25), ITEM_COLOR);
            draw_filled_rect_mut(&mut img, Rect::at(x + 70, y + 40).of_size(20, 25), ITEM_COLOR);
        }

        let number = format!("T{}", i + 1);
        draw_text_mut(
            &mut img,
            NUMBER_COLOR,
            x + 50,
            y + 45,
            scene_scale(),
            &font,
            &number,
        );
    }

    img
}

/// 50 px floor tile grid over the background.
fn draw_floor_grid(img: &mut RgbaImage) {
    let right = (SCENE_WIDTH - 1) as f32;
    let bottom = (SCENE_HEIGHT - 1) as f32;
    let mut x = 0;
    while x < SCENE_WIDTH {
        draw_line_segment_mut(img, (x as f32, 0.0), (x as f32, bottom), FLOOR_GRID_COLOR);
        x += FLOOR_GRID_STEP;
    }
    let mut y = 0;
    while y < SCENE_HEIGHT {
        draw_line_segment_mut(img, (0.0, y as f32), (right, y as f32), FLOOR_GRID_COLOR);
        y += FLOOR_GRID_STEP;
    }
}
