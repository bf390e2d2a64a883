pub mod converter;
pub mod repositories;
pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use converter::{HtmlToPdfConverter, PdfOptions};
pub use repositories::MessageRepository;
pub use services::{ConversionService, ReportService};
pub use storage::Storage;
