/// Captions and sizing used when building an encoding panel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    /// Title shown above the controls.
    pub title: String,
    /// Title width hint in pixels.
    pub title_width: f32,
    /// Title height hint in pixels.
    pub title_height: f32,
    /// Caption of the X column selector.
    pub x_description: String,
    /// Caption of the Y column selector.
    pub y_description: String,
    /// Caption of the aggregation selector.
    pub aggregation_description: String,
    /// Caption of the logarithmic X toggle.
    pub log_x_description: String,
    /// Caption of the logarithmic Y toggle.
    pub log_y_description: String,
    /// Option label for "nothing selected".
    pub unset_label: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Encoding:".to_string(),
            title_width: 148.0,
            title_height: 32.0,
            x_description: "X".to_string(),
            y_description: "Y".to_string(),
            aggregation_description: "Func.".to_string(),
            log_x_description: "Log scale X".to_string(),
            log_y_description: "Log scale Y".to_string(),
            unset_label: "-".to_string(),
        }
    }
}
