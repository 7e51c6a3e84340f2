use ab_glyph::{FontRef, PxScale};

/// Embedded bold face used for all overlay and scene text. Rendering never
/// depends on fonts installed on the host.
static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// Label text height in pixels.
pub const LABEL_TEXT_SCALE: f32 = 14.0;
/// Table number text height in the synthetic scene.
pub const SCENE_TEXT_SCALE: f32 = 16.0;

/// The embedded face. The bytes are compiled in, so parsing cannot fail at
/// runtime.
pub fn overlay_font() -> FontRef<'static> {
    FontRef::try_from_slice(FONT_BYTES).expect("embedded font is valid")
}

pub fn label_scale() -> PxScale {
    PxScale::from(LABEL_TEXT_SCALE)
}

pub fn scene_scale() -> PxScale {
    PxScale::from(SCENE_TEXT_SCALE)
}
