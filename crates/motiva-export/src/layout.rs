use crate::styles::PageStyles;

/// Drawable line kinds, classified from the rendered template output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading1,
    Heading2,
    Heading3,
    Bullet,
    Body,
}

/// One drawable line. `y_mm` is the text baseline measured from the top
/// edge of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    pub kind: LineKind,
    pub text: String,
    pub y_mm: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<LayoutLine>,
}

const PT_TO_MM: f32 = 0.352_778;
const LINE_SPACING: f32 = 1.45;

pub fn font_size(kind: LineKind, styles: &PageStyles) -> f32 {
    match kind {
        LineKind::Heading1 => styles.heading1_size,
        LineKind::Heading2 => styles.heading2_size,
        LineKind::Heading3 => styles.heading3_size,
        LineKind::Bullet | LineKind::Body => styles.body_size,
    }
}

fn line_height_mm(kind: LineKind, styles: &PageStyles) -> f32 {
    font_size(kind, styles) * LINE_SPACING * PT_TO_MM
}

/// Flow the rendered report into page-sized lines.
///
/// The content uses a simple Markdown subset:
/// - `# ` / `## ` / `### ` → headings
/// - `- item` → bullet (wrapped with a hanging indent)
/// - `---` or `***` → forced page break
/// - blank line → vertical gap (ignored at the top of a page)
/// - everything else → body text, wrapped at the style's character width
///
/// A new page opens whenever the next line would cross the bottom margin.
pub fn paginate(rendered: &str, styles: &PageStyles) -> Vec<Page> {
    let bottom = styles.page_height_mm - styles.margin_mm;
    let mut pages: Vec<Page> = Vec::new();
    let mut current = Page::default();
    let mut y = styles.margin_mm;

    for raw in rendered.lines() {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            if !current.lines.is_empty() {
                y += line_height_mm(LineKind::Body, styles) * 0.6;
            }
            continue;
        }

        if trimmed == "---" || trimmed == "***" {
            if !current.lines.is_empty() {
                pages.push(std::mem::take(&mut current));
                y = styles.margin_mm;
            }
            continue;
        }

        let (kind, text) = classify(trimmed);
        let height = line_height_mm(kind, styles);
        for segment in wrap_segments(kind, text, styles.max_chars) {
            if y + height > bottom && !current.lines.is_empty() {
                pages.push(std::mem::take(&mut current));
                y = styles.margin_mm;
            }
            current.lines.push(LayoutLine {
                kind,
                text: segment,
                y_mm: y + height,
            });
            y += height;
        }
    }

    if !current.lines.is_empty() || pages.is_empty() {
        pages.push(current);
    }
    pages
}

fn classify(trimmed: &str) -> (LineKind, &str) {
    if let Some(text) = trimmed.strip_prefix("### ") {
        (LineKind::Heading3, text)
    } else if let Some(text) = trimmed.strip_prefix("## ") {
        (LineKind::Heading2, text)
    } else if let Some(text) = trimmed.strip_prefix("# ") {
        (LineKind::Heading1, text)
    } else if let Some(text) = trimmed.strip_prefix("- ") {
        (LineKind::Bullet, text)
    } else {
        (LineKind::Body, trimmed)
    }
}

fn wrap_segments(kind: LineKind, text: &str, width: usize) -> Vec<String> {
    match kind {
        LineKind::Bullet => wrap_words(&format!("\u{2022} {text}"), width)
            .into_iter()
            .enumerate()
            .map(|(i, line)| if i == 0 { line } else { format!("  {line}") })
            .collect(),
        _ => wrap_words(text, width),
    }
}

/// Greedy word wrap by character count. Words longer than the width land on
/// a line of their own rather than being split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if used > 0 && used + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            used = 0;
        }
        if used > 0 {
            line.push(' ');
            used += 1;
        }
        line.push_str(word);
        used += word_len;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
