use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use tracing::debug;

use crate::error::ExportError;
use crate::layout::{self, LineKind, Page};
use crate::styles::PageStyles;

/// Generate the report PDF from rendered template output. Headings draw in
/// Helvetica Bold, everything else in Helvetica; pagination comes from
/// [`layout::paginate`].
pub fn generate_pdf(rendered: &str, styles: &PageStyles) -> Result<Vec<u8>, ExportError> {
    let pages = layout::paginate(rendered, styles);

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Career Motivation Map",
        Mm(styles.page_width_mm),
        Mm(styles.page_height_mm),
        "Layer 1",
    );
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;
    let heading_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(
                Mm(styles.page_width_mm),
                Mm(styles.page_height_mm),
                "Layer 1",
            );
            doc.get_page(page_index).get_layer(layer_index)
        };
        draw_page(&layer, page, styles, &body_font, &heading_font);
    }

    debug!(pages = pages.len(), "report drawn");
    doc.save_to_bytes().map_err(pdf_err)
}

fn draw_page(
    layer: &PdfLayerReference,
    page: &Page,
    styles: &PageStyles,
    body_font: &IndirectFontRef,
    heading_font: &IndirectFontRef,
) {
    for line in &page.lines {
        let font = match line.kind {
            LineKind::Heading1 | LineKind::Heading2 | LineKind::Heading3 => heading_font,
            LineKind::Bullet | LineKind::Body => body_font,
        };
        let size = layout::font_size(line.kind, styles);
        // Layout measures from the top edge, PDF space from the bottom.
        let y = styles.page_height_mm - line.y_mm;
        layer.use_text(line.text.as_str(), size, Mm(styles.margin_mm), Mm(y), font);
    }
}

fn pdf_err(e: printpdf::Error) -> ExportError {
    ExportError::Pdf(e.to_string())
}

/// Deterministic artifact name derived from the participant's name: runs of
/// whitespace become single dashes, an empty name falls back to "Sample".
pub fn report_filename(name: &str) -> String {
    let trimmed = name.trim();
    let safe = if trimmed.is_empty() {
        "Sample".to_string()
    } else {
        trimmed.split_whitespace().collect::<Vec<_>>().join("-")
    };
    format!("Career-Motivation-Map-{safe}.pdf")
}
