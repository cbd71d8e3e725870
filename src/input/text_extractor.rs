//! Text extraction from uploaded document bytes
//!
//! Extraction is total: structured formats that fail to parse fall back to a
//! lossy UTF-8 decode of the raw bytes, so callers always get some string.

use crate::input::file_detector::FileType;
use log::{debug, warn};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::Read;

/// Extract plain text from a document, routing on the filename extension.
pub fn extract_text(bytes: &[u8], filename: &str) -> String {
    match FileType::from_filename(filename) {
        FileType::Pdf => match extract_pdf(bytes) {
            Some(text) => text,
            None => {
                warn!("PDF parsing failed for '{}', falling back to raw decode", filename);
                decode_lossy(bytes)
            }
        },
        FileType::Word => match extract_docx(bytes) {
            Some(text) => text,
            None => {
                warn!("Word parsing failed for '{}', falling back to raw decode", filename);
                decode_lossy(bytes)
            }
        },
        FileType::Text | FileType::Unknown => decode_lossy(bytes),
    }
}

fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn extract_pdf(bytes: &[u8]) -> Option<String> {
    let text = pdf_extract::extract_text_from_mem(bytes).ok()?;
    debug!("Extracted {} characters from PDF", text.len());
    Some(text)
}

/// Pull paragraph text out of the OOXML main document part.
///
/// A docx file is a ZIP container; the visible text lives in `w:t` runs
/// inside `w:p` paragraphs of `word/document.xml`. Legacy binary .doc files
/// fail the ZIP open and take the fallback path.
fn extract_docx(bytes: &[u8]) -> Option<String> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor).ok()?;
    let mut document = archive.by_name("word/document.xml").ok()?;
    let mut xml = String::new();
    document.read_to_string(&mut xml).ok()?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_run = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"t" => in_run = true,
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref t)) if in_run => {
                let run = t.unescape().ok()?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(_) => return None,
            _ => {}
        }
    }

    debug!("Extracted {} characters from Word document", text.len());
    Some(text)
}
