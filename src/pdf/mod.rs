//! PDF document rendering for invoices and prescriptions.
//!
//! `printpdf` with builtin Helvetica faces. Layout arithmetic works in
//! millimetres from the top of the page (the natural reading order) and
//! `from_top` converts to the PDF's bottom-left origin. Renderers produce
//! a finished byte buffer; file I/O only ever sees complete documents.

pub mod invoice;
pub mod prescription;

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::path::PaintMode;
use printpdf::{
    Color, IndirectFontRef, Line, Mm, PdfDocumentReference, PdfLayerReference, Point, Rect, Rgb,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF font error: {0}")]
    Font(String),

    #[error("PDF write error: {0}")]
    Write(String),

    #[error("Cannot export document: {0}")]
    Export(#[from] std::io::Error),
}

// A4, matching the original documents.
pub(crate) const PAGE_WIDTH: f32 = 210.0;
pub(crate) const PAGE_HEIGHT: f32 = 297.0;
pub(crate) const MARGIN: f32 = 20.0;
pub(crate) const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const PT_PER_MM: f32 = 2.834_645_7;
// Average advance of a Helvetica glyph, as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;

// Color palette (RGB 0-255)
pub(crate) const ACCENT: (u8, u8, u8) = (41, 128, 185);
pub(crate) const PANEL_GRAY: (u8, u8, u8) = (240, 240, 240);
pub(crate) const ROW_GRAY: (u8, u8, u8) = (250, 250, 250);
pub(crate) const TOTALS_GRAY: (u8, u8, u8) = (245, 245, 245);
pub(crate) const BORDER_GRAY: (u8, u8, u8) = (200, 200, 200);
pub(crate) const WHITE: (u8, u8, u8) = (255, 255, 255);
pub(crate) const BLACK: (u8, u8, u8) = (0, 0, 0);

pub(crate) fn rgb(color: (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        color.0 as f32 / 255.0,
        color.1 as f32 / 255.0,
        color.2 as f32 / 255.0,
        None,
    ))
}

/// Convert a from-the-top y coordinate to the PDF's bottom-left origin.
pub(crate) fn from_top(y: f32) -> Mm {
    Mm(PAGE_HEIGHT - y)
}

/// Estimated rendered width of a string, in millimetres.
pub(crate) fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * AVG_GLYPH_EM / PT_PER_MM
}

pub(crate) fn add_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: (u8, u8, u8),
) {
    layer.set_fill_color(rgb(color));
    layer.use_text(text, size, Mm(x), from_top(y), font);
}

/// Text centered on the page's vertical axis.
pub(crate) fn add_text_centered(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    y: f32,
    size: f32,
    color: (u8, u8, u8),
) {
    let x = (PAGE_WIDTH - text_width(text, size)) / 2.0;
    add_text(layer, font, text, x, y, size, color);
}

/// Text whose right edge sits at `right`.
pub(crate) fn add_text_right(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    right: f32,
    y: f32,
    size: f32,
    color: (u8, u8, u8),
) {
    add_text(layer, font, text, right - text_width(text, size), y, size, color);
}

pub(crate) fn add_line(
    layer: &PdfLayerReference,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    color: (u8, u8, u8),
    width: f32,
) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(width);

    let line = Line {
        points: vec![
            (Point::new(Mm(x1), from_top(y1)), false),
            (Point::new(Mm(x2), from_top(y2)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

/// Filled rectangle given its top-left corner and extent.
pub(crate) fn fill_rect(
    layer: &PdfLayerReference,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    color: (u8, u8, u8),
) {
    layer.set_fill_color(rgb(color));
    let rect = Rect::new(Mm(x), from_top(y + h), Mm(x + w), from_top(y))
        .with_mode(PaintMode::Fill);
    layer.add_rect(rect);
}

/// Rectangle outline given its top-left corner and extent.
pub(crate) fn stroke_rect(
    layer: &PdfLayerReference,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    color: (u8, u8, u8),
    width: f32,
) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(width);
    let rect = Rect::new(Mm(x), from_top(y + h), Mm(x + w), from_top(y))
        .with_mode(PaintMode::Stroke);
    layer.add_rect(rect);
}

/// Simple word-wrap for PDF text rendering.
pub(crate) fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Word-wrap measured against an available width at a font size.
pub(crate) fn wrap_to_width(text: &str, width: f32, font_size: f32) -> Vec<String> {
    let width_pt = width * PT_PER_MM;
    let max_chars = (width_pt / (font_size * AVG_GLYPH_EM)).floor() as usize;
    wrap_text(text, max_chars.max(1))
}

/// US-style numeric date used by the prescription header.
pub(crate) fn us_date(date: chrono::NaiveDate) -> String {
    use chrono::Datelike;
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Long-form en-US date used by the invoice details panel.
pub(crate) fn long_date(date: chrono::NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Serialize a finished document to bytes.
pub(crate) fn save_document(doc: PdfDocumentReference) -> Result<Vec<u8>, RenderError> {
    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| RenderError::Write(e.to_string()))?;
    buf.into_inner()
        .map_err(|e| RenderError::Write(e.to_string()))
}

/// Write finished PDF bytes into the exports directory. The buffer is
/// complete before this is called, so a failed render never leaves a
/// partial file behind.
pub fn export_pdf_to_file(
    pdf_bytes: &[u8],
    filename: &str,
    exports_dir: &Path,
) -> Result<PathBuf, RenderError> {
    std::fs::create_dir_all(exports_dir)?;
    let path = exports_dir.join(filename);
    std::fs::write(&path, pdf_bytes)?;
    Ok(path)
}
