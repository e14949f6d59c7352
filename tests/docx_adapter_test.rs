mod helpers;

use resume_review::application::ports::{FileLoader, FileLoaderError};
use resume_review::domain::{DOC_MIME, DOCX_MIME, PDF_MIME, RawDocument};
use resume_review::infrastructure::text_processing::DocxAdapter;

#[test]
fn given_valid_docx_when_extracting_then_returns_paragraphs() {
    let data = helpers::docx_with_paragraphs(&["Jane Doe", "Backend Developer"]);
    let document = RawDocument::new(data, DOCX_MIME, "jane.docx");

    let text = DocxAdapter::new().extract_text(&document).unwrap();

    assert_eq!(text, "Jane Doe\n\nBackend Developer");
}

#[test]
fn given_msword_label_with_docx_bytes_when_extracting_then_decodes() {
    let data = helpers::docx_with_paragraphs(&["Legacy label"]);
    let document = RawDocument::new(data, DOC_MIME, "legacy.doc");

    let text = DocxAdapter::new().extract_text(&document).unwrap();

    assert_eq!(text, "Legacy label");
}

#[test]
fn given_runs_tabs_and_breaks_when_parsing_xml_then_joins_runs_within_paragraph() {
    let xml = helpers::document_xml(concat!(
        "<w:p><w:pPr><w:pStyle w:val=\"Heading1\"/></w:pPr>",
        "<w:r><w:t>Skills</w:t></w:r><w:r><w:tab/><w:t>Rust</w:t></w:r>",
        "<w:r><w:br/><w:t xml:space=\"preserve\"> &amp; Go</w:t></w:r></w:p>",
        "<w:p></w:p>",
        "<w:p><w:r><w:t>Done</w:t></w:r></w:p>",
    ));

    let paragraphs = DocxAdapter::paragraphs_from_xml(&xml).unwrap();

    assert_eq!(paragraphs, vec!["Skills\tRust\n & Go".to_string(), "Done".to_string()]);
}

#[test]
fn given_docx_without_text_when_extracting_then_returns_no_text_found() {
    let data = helpers::docx_from_document_xml(&helpers::document_xml("<w:p></w:p>"));
    let document = RawDocument::new(data, DOCX_MIME, "blank.docx");

    let result = DocxAdapter::new().extract_text(&document);

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[test]
fn given_corrupt_bytes_when_extracting_docx_then_returns_extraction_failed() {
    let document = RawDocument::new(b"PK not really a zip".to_vec(), DOCX_MIME, "bad.docx");

    let result = DocxAdapter::new().extract_text(&document);

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[test]
fn given_zip_without_document_part_when_extracting_then_returns_extraction_failed() {
    let document = RawDocument::new(helpers::zip_without_document_part(), DOCX_MIME, "x.docx");

    let result = DocxAdapter::new().extract_text(&document);

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[test]
fn given_pdf_content_type_when_extracting_docx_then_returns_unsupported() {
    let data = helpers::docx_with_paragraphs(&["text"]);
    let document = RawDocument::new(data, PDF_MIME, "wrong.pdf");

    let result = DocxAdapter::new().extract_text(&document);

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
