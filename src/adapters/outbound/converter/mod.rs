mod wkhtmltopdf;

pub use wkhtmltopdf::{WkhtmltopdfConverter, DEFAULT_BINARY};
