mod conversion_service_impl;
mod report_service_impl;

pub use conversion_service_impl::ConversionServiceImpl;
pub use report_service_impl::{report_target_date, ReportServiceImpl, REPORT_TARGET_DATE};
