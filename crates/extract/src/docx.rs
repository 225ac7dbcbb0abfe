use std::io::{Cursor, Read};

use quick_xml::events::Event;

use crate::error::ExtractError;

/// Extract raw text from an in-memory DOCX file.
///
/// A DOCX is a ZIP archive; the body text lives in `word/document.xml` as
/// `<w:t>` runs grouped into `<w:p>` paragraphs. Each paragraph becomes one
/// blank-line-separated block of output.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Extraction(format!("failed to read DOCX as ZIP: {e}")))?;

    let mut doc_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| ExtractError::Extraction("invalid DOCX: missing word/document.xml".to_string()))?
        .read_to_string(&mut doc_xml)
        .map_err(|e| ExtractError::Extraction(format!("failed to read document.xml: {e}")))?;

    let mut reader = quick_xml::Reader::from_str(&doc_xml);
    let mut text = String::new();
    let mut paragraph = String::new();
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"p" => paragraph.clear(),
                b"t" => in_text_run = true,
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    if !paragraph.is_empty() {
                        text.push_str(&paragraph);
                        text.push_str("\n\n");
                        paragraph.clear();
                    }
                }
                b"t" => in_text_run = false,
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_text_run {
                    if let Ok(t) = e.unescape() {
                        paragraph.push_str(&t);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Extraction(format!("XML parse error: {e}"))),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}
