use serde::{Deserialize, Serialize};

/// Page geometry and type sizes for the PDF export. Defaults describe an
/// A4 portrait page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageStyles {
    pub page_width_mm: f32,
    pub page_height_mm: f32,

    /// Uniform page margin in millimetres.
    pub margin_mm: f32,

    /// Body text size in points.
    pub body_size: f32,

    pub heading1_size: f32,
    pub heading2_size: f32,
    pub heading3_size: f32,

    /// Wrap width for body and bullet text, in characters.
    pub max_chars: usize,
}

impl Default for PageStyles {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 18.0,
            body_size: 11.0,
            heading1_size: 20.0,
            heading2_size: 15.0,
            heading3_size: 12.5,
            max_chars: 88,
        }
    }
}
