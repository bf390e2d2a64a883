//! Entry points the orchestrator invokes.
//!
//! Each invocation gets its own temporary working directory, removed when the
//! step returns whether it succeeded or not.

pub mod handlers;

pub use handlers::{
    handle_html_to_pdf, handle_make_report, run_conversion_step, run_report_step, HandlerError,
};
