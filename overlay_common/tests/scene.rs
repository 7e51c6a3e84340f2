use overlay_common::scene::{
    demo_scene, CHAIR_COLOR, FLOOR_COLOR, FLOOR_GRID_COLOR, ITEM_COLOR, SCENE_HEIGHT, SCENE_WIDTH,
    TABLE_BODY_COLOR, TABLE_TOP_COLOR,
};

#[test]
fn scene_has_fixed_dimensions() {
    let scene = demo_scene();
    assert_eq!(scene.dimensions(), (SCENE_WIDTH, SCENE_HEIGHT));
}

#[test]
fn scene_is_byte_identical_across_calls() {
    let a = demo_scene();
    let b = demo_scene();
    assert!(a.as_raw() == b.as_raw());
}

#[test]
fn scene_paints_floor_grid_and_furniture() {
    let scene = demo_scene();

    // Open floor away from the 50 px grid lines.
    assert_eq!(scene.get_pixel(25, 25), &FLOOR_COLOR);
    // A vertical grid line.
    assert_eq!(scene.get_pixel(50, 25), &FLOOR_GRID_COLOR);
    // Table body edge and inset tabletop of the first table.
    assert_eq!(scene.get_pixel(105, 85), &TABLE_BODY_COLOR);
    assert_eq!(scene.get_pixel(130, 100), &TABLE_TOP_COLOR);
    // An item on the first (occupied) table.
    assert_eq!(scene.get_pixel(135, 125), &ITEM_COLOR);
}

#[test]
fn only_occupied_tables_get_chairs() {
    let scene = demo_scene();

    // Chair discs above the occupied tables T1, T3, T5.
    assert_eq!(scene.get_pixel(160, 70), &CHAIR_COLOR);
    assert_eq!(scene.get_pixel(520, 70), &CHAIR_COLOR);
    assert_eq!(scene.get_pixel(340, 230), &CHAIR_COLOR);
    // The same spots relative to the vacant tables stay floor.
    assert_eq!(scene.get_pixel(340, 70), &FLOOR_COLOR);
    assert_eq!(scene.get_pixel(160, 230), &FLOOR_COLOR);
    assert_eq!(scene.get_pixel(520, 230), &FLOOR_COLOR);
}

#[test]
fn table_numbers_are_printed_on_the_tabletops() {
    let scene = demo_scene();

    // Bold "T1" on the first tabletop: some glyph pixels are fully covered
    // and come out solid black.
    let mut found_dark = false;
    for y in 125..141 {
        for x in 150..170 {
            let p = scene.get_pixel(x, y);
            if p.0[0] < 0x40 && p.0[1] < 0x40 && p.0[2] < 0x40 {
                found_dark = true;
            }
        }
    }
    assert!(found_dark, "expected dark glyph pixels on the tabletop");
}
