//! Source-material extraction for uploaded documents
//!
//! Turns an uploaded PDF into plain text the prompt builder can embed.

mod pdf;

pub use pdf::extract_pdf_text;
