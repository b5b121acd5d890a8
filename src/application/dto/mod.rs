pub mod check_request;
pub mod check_response;

pub use check_request::CheckRequest;
pub use check_response::CheckResponse;
