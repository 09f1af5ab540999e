//! Prescription PDF rendering: a single page with clinic identification,
//! patient block, boxed medication details, optional special
//! instructions, signature line and disclaimer.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::*;
use crate::models::Prescription;

const PATIENT_FALLBACK: &str = "Patient Name";
const DISCLAIMER: &str = "This is a computer generated prescription";
const LINE_HEIGHT: f32 = 5.0;

pub fn generate_prescription_pdf(rx: &Prescription) -> Result<Vec<u8>, RenderError> {
    let (doc, page1, layer1) = PdfDocument::new(
        format!("Prescription {}", rx.medication_name),
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

    add_text_centered(&layer, &bold, "PRESCRIPTION", 30.0, 20.0, BLACK);

    // Clinic and prescriber identification, prescription date opposite.
    add_text(&layer, &font, "DoctorConnect Healthcare", MARGIN, 50.0, 12.0, BLACK);
    add_text(&layer, &font, &format!("Dr. {}", rx.doctor_name), MARGIN, 60.0, 12.0, BLACK);
    add_text(&layer, &font, "Medical Practitioner", MARGIN, 70.0, 12.0, BLACK);
    add_text(
        &layer,
        &font,
        &format!("Date: {}", us_date(rx.prescribed_date)),
        140.0,
        50.0,
        12.0,
        BLACK,
    );

    let patient = rx.patient_name.as_deref().unwrap_or(PATIENT_FALLBACK);
    add_text(&layer, &bold, "Patient Information:", MARGIN, 90.0, 12.0, BLACK);
    add_text(&layer, &font, &format!("Name: {patient}"), MARGIN, 100.0, 12.0, BLACK);

    // Boxed medication block
    add_text(&layer, &bold, "Prescription Details:", MARGIN, 120.0, 12.0, BLACK);
    stroke_rect(&layer, MARGIN, 125.0, 170.0, 40.0, BLACK, 0.5);
    add_text(
        &layer,
        &font,
        &format!("Medication: {}", rx.medication_name),
        MARGIN + 5.0,
        135.0,
        12.0,
        BLACK,
    );
    add_text(&layer, &font, &format!("Dosage: {}", rx.dosage), MARGIN + 5.0, 145.0, 12.0, BLACK);
    add_text(
        &layer,
        &font,
        &format!("Frequency: {}", rx.frequency.as_str()),
        MARGIN + 5.0,
        155.0,
        12.0,
        BLACK,
    );
    add_text(&layer, &font, &format!("Duration: {}", rx.duration), MARGIN + 5.0, 165.0, 12.0, BLACK);

    // Special instructions only take up space when there are any.
    let mut y = 180.0;
    if let Some(instructions) = rx.special_instructions.as_deref().filter(|s| !s.is_empty()) {
        add_text(&layer, &bold, "Special Instructions:", MARGIN, y, 12.0, BLACK);
        let lines = wrap_to_width(instructions, 170.0, 12.0);
        for (i, line) in lines.iter().enumerate() {
            add_text(&layer, &font, line, MARGIN, y + 10.0 + i as f32 * LINE_HEIGHT, 12.0, BLACK);
        }
        y += 10.0 + lines.len() as f32 * LINE_HEIGHT;
    }

    add_text(
        &layer,
        &bold,
        "Doctor Signature: ____________________",
        MARGIN,
        y + 30.0,
        12.0,
        BLACK,
    );

    add_text_centered(&layer, &italic, DISCLAIMER, 280.0, 10.0, BLACK);

    save_document(doc)
}

/// Download name: `prescription_{patient name}_{prescribed ISO date}.pdf`.
pub fn prescription_pdf_filename(rx: &Prescription) -> String {
    let patient = rx.patient_name.as_deref().unwrap_or("patient");
    format!("prescription_{}_{}.pdf", patient, rx.prescribed_date)
}

/// Render and hand the finished document to the file sink.
pub fn download_prescription_pdf(
    rx: &Prescription,
    exports_dir: &std::path::Path,
) -> Result<std::path::PathBuf, RenderError> {
    let bytes = generate_prescription_pdf(rx)?;
    export_pdf_to_file(&bytes, &prescription_pdf_filename(rx), exports_dir)
}
