/// Configuration for the GPUI panel view.
#[derive(Debug, Clone)]
pub struct PanelViewConfig {
    /// Text size in pixels.
    pub text_size: f32,
    /// Gap between controls in pixels.
    pub gap: f32,
    /// Padding around the panel in pixels.
    pub padding: f32,
    /// Background color as `0xRRGGBB`.
    pub background: u32,
    /// Text color as `0xRRGGBB`.
    pub foreground: u32,
    /// Border and highlight color of interactive controls as `0xRRGGBB`.
    pub accent: u32,
}

impl Default for PanelViewConfig {
    fn default() -> Self {
        Self {
            text_size: 13.0,
            gap: 6.0,
            padding: 8.0,
            background: 0x1e1e1e,
            foreground: 0xe0e0e0,
            accent: 0x4fa3d1,
        }
    }
}
