mod html_to_pdf;

pub use html_to_pdf::{HtmlToPdfConverter, PdfOptions, REPORT_FOOTER_RIGHT, REPORT_HEADER_RIGHT};
