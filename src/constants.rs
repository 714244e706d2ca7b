/// Fixed colors of the icon design. Every icon is a pure function of its
/// pixel size plus these literals; there is no theming or configuration.

pub mod palette {
    use image::Rgba;

    /// Warm coral card background
    pub const CORAL: Rgba<u8> = Rgba([255, 95, 87, 255]);

    /// Translucent darker coral, composited over the card's lower half
    pub const CARD_SHADOW: Rgba<u8> = Rgba([220, 60, 50, 50]);

    /// Near-opaque white for the frosted badge circle
    pub const BADGE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 235]);

    /// Outer ring of the record dot
    pub const DOT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 240]);

    /// Record red, used for the dot core and the recording glyph
    pub const RECORD_RED: Rgba<u8> = Rgba([255, 59, 48, 255]);

    /// Opaque black for template-style menu bar glyphs
    pub const TEMPLATE_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
}
