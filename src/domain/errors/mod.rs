mod conversion_errors;
mod repository_errors;
mod step_errors;
mod storage_errors;
mod validation_errors;

pub use conversion_errors::*;
pub use repository_errors::*;
pub use step_errors::*;
pub use storage_errors::*;
pub use validation_errors::*;
