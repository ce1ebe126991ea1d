use crate::{QuizgenError, Result};

/// Extract plain text from an uploaded PDF.
///
/// A document that parses but contains no extractable text (scanned
/// images, empty pages) counts as a failure; there is nothing to
/// constrain question generation to.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| QuizgenError::SourceExtraction(format!("failed to parse PDF: {}", e)))?;

    if text.trim().is_empty() {
        return Err(QuizgenError::SourceExtraction(
            "PDF contained no extractable text".to_string(),
        ));
    }

    Ok(text)
}
