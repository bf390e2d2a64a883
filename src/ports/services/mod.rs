mod conversion_service;
mod report_service;

pub use conversion_service::ConversionService;
pub use report_service::ReportService;
