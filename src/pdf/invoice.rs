//! Invoice PDF rendering: a fixed single-page financial document with a
//! branded header, details panel, bill-to block, service table, totals
//! box, payment terms and footer.

use chrono::{Local, NaiveDateTime};
use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::*;
use crate::billing::money::format_amount;
use crate::models::{DoctorInfo, Invoice};

/// Shown in the Bill To block when the patient join came back empty.
const PATIENT_FALLBACK: &str = "Patient Name";

const PAYMENT_TERMS: [&str; 7] = [
    "• Payment is due within 30 days of invoice date",
    "• Late payments may be subject to additional fees",
    "• Accepted payment methods:",
    "  - Bank Transfer",
    "  - Credit/Debit Card",
    "  - Cash (in-person only)",
    "• For payment inquiries, contact us at the number above",
];

// Service table geometry. The description column wraps; the row grows
// with the wrapped line count but never shrinks below the minimum.
const TABLE_TOP: f32 = 140.0;
const AMOUNT_COLUMN_X: f32 = PAGE_WIDTH - 50.0;
const DESCRIPTION_WIDTH: f32 = CONTENT_WIDTH - 60.0;
const HEADER_BAND_HEIGHT: f32 = 15.0;
const MIN_ROW_HEIGHT: f32 = 30.0;
const LINE_HEIGHT: f32 = 5.0;
const BODY_SIZE: f32 = 10.0;

pub(crate) fn service_row_height(line_count: usize) -> f32 {
    MIN_ROW_HEIGHT.max(2.0 * LINE_HEIGHT + line_count as f32 * LINE_HEIGHT)
}

/// Render the invoice. A missing `doctor` substitutes the complete
/// default profile; the returned buffer is a finished PDF document.
pub fn generate_invoice_pdf(
    invoice: &Invoice,
    doctor: Option<&DoctorInfo>,
    generated_on: NaiveDateTime,
) -> Result<Vec<u8>, RenderError> {
    let default_doctor = DoctorInfo::default();
    let doctor = doctor.unwrap_or(&default_doctor);

    let (doc, page1, layer1) = PdfDocument::new(
        format!("Invoice {}", invoice.invoice_number),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let layer = doc.get_page(page1).get_layer(layer1);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Font(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Font(e.to_string()))?;
    let italic = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(|e| RenderError::Font(e.to_string()))?;

    // Branded header band with a contrasting title block on the right.
    fill_rect(&layer, 0.0, 0.0, PAGE_WIDTH, 35.0, ACCENT);
    add_text(&layer, &bold, &doctor.clinic, MARGIN, 25.0, 20.0, WHITE);
    add_text(&layer, &font, &doctor.address, MARGIN, 32.0, BODY_SIZE, WHITE);

    fill_rect(&layer, PAGE_WIDTH - 80.0, 5.0, 75.0, 25.0, PANEL_GRAY);
    add_text(&layer, &bold, "INVOICE", PAGE_WIDTH - 75.0, 20.0, 18.0, BLACK);
    add_text(
        &layer,
        &font,
        &format!("# {}", invoice.invoice_number),
        PAGE_WIDTH - 75.0,
        28.0,
        BODY_SIZE,
        BLACK,
    );

    // Details panel: dates and status on the left half, doctor contact
    // fields on the right.
    stroke_rect(&layer, MARGIN, 50.0, CONTENT_WIDTH, 40.0, BORDER_GRAY, 0.5);
    add_text(&layer, &bold, "Invoice Details", MARGIN + 5.0, 58.0, 12.0, BLACK);
    add_text(
        &layer,
        &font,
        &format!("Invoice Date: {}", long_date(invoice.created_at.date_naive())),
        MARGIN + 5.0,
        66.0,
        BODY_SIZE,
        BLACK,
    );
    add_text(
        &layer,
        &font,
        &format!("Due Date: {}", long_date(invoice.due_date)),
        MARGIN + 5.0,
        74.0,
        BODY_SIZE,
        BLACK,
    );
    add_text(
        &layer,
        &font,
        &format!("Status: {}", invoice.status.as_str().to_uppercase()),
        MARGIN + 5.0,
        82.0,
        BODY_SIZE,
        BLACK,
    );
    add_text(&layer, &font, &doctor.name, PAGE_WIDTH - 75.0, 66.0, BODY_SIZE, BLACK);
    add_text(
        &layer,
        &font,
        &format!("Phone: {}", doctor.phone),
        PAGE_WIDTH - 75.0,
        74.0,
        BODY_SIZE,
        BLACK,
    );
    add_text(
        &layer,
        &font,
        &format!("Email: {}", doctor.email),
        PAGE_WIDTH - 75.0,
        82.0,
        BODY_SIZE,
        BLACK,
    );

    // Bill To
    let patient = invoice.patient_name.as_deref().unwrap_or(PATIENT_FALLBACK);
    add_text(&layer, &bold, "Bill To:", MARGIN, 100.0, 12.0, BLACK);
    add_text(&layer, &font, patient, MARGIN, 110.0, 11.0, BLACK);
    add_text(&layer, &font, "Patient", MARGIN, 120.0, 11.0, BLACK);

    // Service table
    fill_rect(&layer, MARGIN, TABLE_TOP, CONTENT_WIDTH, HEADER_BAND_HEIGHT, ACCENT);
    add_text(&layer, &bold, "Service Description", MARGIN + 5.0, TABLE_TOP + 10.0, 11.0, WHITE);
    add_text(&layer, &bold, "Amount", AMOUNT_COLUMN_X, TABLE_TOP + 10.0, 11.0, WHITE);

    let lines = wrap_to_width(&invoice.service_description, DESCRIPTION_WIDTH, BODY_SIZE);
    let row_height = service_row_height(lines.len());
    let content_top = TABLE_TOP + HEADER_BAND_HEIGHT;

    fill_rect(&layer, MARGIN, content_top, CONTENT_WIDTH, row_height, ROW_GRAY);
    for (i, line) in lines.iter().enumerate() {
        add_text(
            &layer,
            &font,
            line,
            MARGIN + 5.0,
            content_top + 2.0 * LINE_HEIGHT + i as f32 * LINE_HEIGHT,
            BODY_SIZE,
            BLACK,
        );
    }
    add_text(
        &layer,
        &bold,
        &format_amount(invoice.amount),
        AMOUNT_COLUMN_X,
        content_top + 2.0 * LINE_HEIGHT,
        BODY_SIZE,
        BLACK,
    );

    let table_bottom = content_top + row_height;
    stroke_rect(
        &layer,
        MARGIN,
        TABLE_TOP,
        CONTENT_WIDTH,
        HEADER_BAND_HEIGHT + row_height,
        BORDER_GRAY,
        0.5,
    );
    add_line(&layer, AMOUNT_COLUMN_X - 5.0, TABLE_TOP, AMOUNT_COLUMN_X - 5.0, table_bottom, BORDER_GRAY, 0.5);

    // Totals box
    let totals_top = table_bottom + 10.0;
    fill_rect(&layer, PAGE_WIDTH - 80.0, totals_top, 75.0, 25.0, TOTALS_GRAY);
    add_text(&layer, &bold, "Total Amount:", PAGE_WIDTH - 75.0, totals_top + 10.0, 12.0, BLACK);
    add_text(
        &layer,
        &bold,
        &format_amount(invoice.amount),
        PAGE_WIDTH - 75.0,
        totals_top + 20.0,
        12.0,
        BLACK,
    );

    // Payment terms
    let terms_top = totals_top + 35.0;
    add_text(&layer, &bold, "Payment Terms & Methods", MARGIN, terms_top, 11.0, BLACK);
    for (i, term) in PAYMENT_TERMS.iter().enumerate() {
        add_text(
            &layer,
            &font,
            term,
            MARGIN,
            terms_top + 10.0 + i as f32 * LINE_HEIGHT,
            BODY_SIZE,
            BLACK,
        );
    }

    // Footer: pinned near the page foot, pushed down if a long service
    // description overgrew the table (text is never clipped).
    let footer_top = (terms_top + 46.0).max(PAGE_HEIGHT - 24.0);
    add_line(&layer, MARGIN, footer_top, PAGE_WIDTH - MARGIN, footer_top, BORDER_GRAY, 0.5);
    add_text_centered(
        &layer,
        &italic,
        "Thank you for choosing our healthcare services!",
        footer_top + 6.0,
        9.0,
        BLACK,
    );
    add_text_centered(
        &layer,
        &italic,
        "For any questions regarding this invoice, please contact us.",
        footer_top + 11.0,
        9.0,
        BLACK,
    );
    add_text(
        &layer,
        &font,
        &format!("Generated: {}", generated_on.format("%Y-%m-%d %H:%M")),
        MARGIN,
        footer_top + 17.0,
        8.0,
        BLACK,
    );
    add_text_right(
        &layer,
        &font,
        "Page 1 of 1",
        PAGE_WIDTH - MARGIN,
        footer_top + 17.0,
        8.0,
        BLACK,
    );

    save_document(doc)
}

/// Download name: `Invoice_{number}_{patient with whitespace as _}_{ISO date}.pdf`.
pub fn invoice_pdf_filename(invoice: &Invoice) -> String {
    let patient = invoice
        .patient_name
        .as_deref()
        .map(|name| name.split_whitespace().collect::<Vec<_>>().join("_"))
        .unwrap_or_else(|| "patient".into());
    format!(
        "Invoice_{}_{}_{}.pdf",
        invoice.invoice_number,
        patient,
        invoice.created_at.date_naive()
    )
}

/// Render and hand the finished document to the file sink.
pub fn download_invoice_pdf(
    invoice: &Invoice,
    doctor: Option<&DoctorInfo>,
    exports_dir: &std::path::Path,
) -> Result<std::path::PathBuf, RenderError> {
    let bytes = generate_invoice_pdf(invoice, doctor, Local::now().naive_local())?;
    export_pdf_to_file(&bytes, &invoice_pdf_filename(invoice), exports_dir)
}
