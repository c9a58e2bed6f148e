pub mod api_error;
pub mod lenient;

pub use api_error::{ApiErrorFields, ErrorDetail, STATUS_ERROR, STATUS_SUCCESS};
