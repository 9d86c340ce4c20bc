//! Contract analysis endpoint.

mod handler;
mod response;

pub use handler::{analyze, handle_analysis};
pub use response::{failure_response, method_not_allowed};
