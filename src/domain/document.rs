pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOC_MIME: &str = "application/msword";

/// An uploaded file as received from the transport layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub data: Vec<u8>,
    pub mime_type: String,
    pub filename: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Docx,
    Doc,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [Self::Pdf, Self::Docx, Self::Doc];

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            PDF_MIME => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            DOC_MIME => Some(Self::Doc),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => PDF_MIME,
            Self::Docx => DOCX_MIME,
            Self::Doc => DOC_MIME,
        }
    }
}

impl RawDocument {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
            filename: filename.into(),
        }
    }

    pub fn content_type(&self) -> Option<ContentType> {
        ContentType::from_mime(&self.mime_type)
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
