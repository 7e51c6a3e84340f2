use image::Rgba;

/// Stroke and banner color for occupied tables.
pub const OCCUPIED_COLOR: Rgba<u8> = Rgba([0xef, 0x44, 0x44, 0xff]);
/// Stroke and banner color for vacant tables.
pub const VACANT_COLOR: Rgba<u8> = Rgba([0x22, 0xc5, 0x5e, 0xff]);
/// Label text color, white on either banner.
pub const LABEL_TEXT_COLOR: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// The two-valued palette keyed on occupancy. A record's box stroke and
/// its label banner always use the same entry.
pub fn occupancy_color(occupied: bool) -> Rgba<u8> {
    if occupied {
        OCCUPIED_COLOR
    } else {
        VACANT_COLOR
    }
}
