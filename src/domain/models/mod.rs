pub mod message;
pub mod object_reference;
pub mod report;
pub mod storage_config;

pub use message::Message;
pub use object_reference::ObjectReference;
pub use report::{render_report, report_object_key, REPORT_TEMPLATE};
pub use storage_config::{StaticCredentials, StorageConfig};
