//! Text extraction from uploaded documents

use crate::error::{Result, AtsError};
use crate::input::file_detector::DocumentFormat;
use log::debug;
use pulldown_cmark::{Event, Parser, Tag};
use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;
use std::cell::Cell;
use std::io::{Cursor, Read};
use std::panic::{self, UnwindSafe};
use std::sync::Once;
use std::thread;
use zip::ZipArchive;

const DOCX_BODY_PART: &str = "word/document.xml";

/// Raw uploaded bytes plus the declared format. Lives for one extraction call.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    name: String,
    content: Vec<u8>,
    format: DocumentFormat,
}

impl Document {
    pub fn new(name: impl Into<String>, content: Vec<u8>, format: DocumentFormat) -> Self {
        Self {
            name: name.into(),
            content,
            format,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn format(&self) -> &DocumentFormat {
        &self.format
    }
}

/// Turns a document into plain text, or fails if it cannot be read.
pub trait TextExtractor {
    fn extract(&self, document: &Document) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, document: &Document) -> Result<String> {
        let bytes = document.content();

        // pdf-extract panics on some malformed inputs instead of returning an error
        let outcome = catch_parser_panic(|| pdf_extract::extract_text_from_mem(bytes));

        match outcome {
            Ok(Ok(text)) => {
                debug!("Extracted {} characters from PDF '{}'", text.len(), document.name());
                Ok(text)
            }
            Ok(Err(e)) => Err(AtsError::CorruptDocument(format!(
                "Failed to extract text from PDF '{}': {}",
                document.name(),
                e
            ))),
            Err(_) => Err(AtsError::CorruptDocument(format!(
                "Failed to extract text from PDF '{}': parser aborted",
                document.name()
            ))),
        }
    }
}

thread_local! {
    static QUIET_PANICS: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Runs a parser call, turning a panic into `Err` without the panic hook's stderr report.
/// Only panics on the calling thread are muted; other threads keep the previous hook.
fn catch_parser_panic<T>(parse: impl FnOnce() -> T + UnwindSafe) -> thread::Result<T> {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !QUIET_PANICS.with(Cell::get) {
                previous(info);
            }
        }));
    });

    QUIET_PANICS.with(|quiet| quiet.set(true));
    let outcome = panic::catch_unwind(parse);
    QUIET_PANICS.with(|quiet| quiet.set(false));
    outcome
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, document: &Document) -> Result<String> {
        let corrupt = |detail: String| {
            AtsError::CorruptDocument(format!(
                "Failed to extract text from DOCX '{}': {}",
                document.name(),
                detail
            ))
        };

        let mut archive = ZipArchive::new(Cursor::new(document.content()))
            .map_err(|e| corrupt(e.to_string()))?;

        let mut xml = String::new();
        let mut body = archive
            .by_name(DOCX_BODY_PART)
            .map_err(|e| corrupt(format!("{}: {}", DOCX_BODY_PART, e)))?;
        body.read_to_string(&mut xml)
            .map_err(|e| corrupt(e.to_string()))?;

        let text = docx_body_text(&xml).map_err(|e| corrupt(e.to_string()))?;
        debug!("Extracted {} characters from DOCX '{}'", text.len(), document.name());
        Ok(text)
    }
}

/// Collects the `w:t` runs of a WordprocessingML body, one line per paragraph.
fn docx_body_text(xml: &str) -> std::result::Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            XmlEvent::Start(e) if e.local_name().as_ref() == b"t" => in_run_text = true,
            XmlEvent::End(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            XmlEvent::Empty(e) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" | b"p" => text.push('\n'),
                _ => {}
            },
            XmlEvent::Text(t) if in_run_text => text.push_str(&t.unescape()?),
            XmlEvent::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

/// Routes a document to the extractor for its declared format.
#[derive(Default)]
pub struct DocumentExtractor;

impl TextExtractor for DocumentExtractor {
    fn extract(&self, document: &Document) -> Result<String> {
        match document.format() {
            DocumentFormat::Pdf => PdfExtractor.extract(document),
            DocumentFormat::Docx => DocxExtractor.extract(document),
            DocumentFormat::Other(_) => Err(AtsError::UnsupportedFormat(format!(
                "'{}' has format '{}', expected pdf or docx",
                document.name(),
                document.format()
            ))),
        }
    }
}

/// Render markdown to the plain text a reader would see.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::End(Tag::Paragraph) | Event::End(Tag::Heading(..)) | Event::End(Tag::Item) => {
                text.push('\n')
            }
            _ => {}
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
