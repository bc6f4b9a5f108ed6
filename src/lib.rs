pub mod errors;
mod header;
mod helpers;
mod html;
mod html_response;
mod response;
pub mod status;

pub use header::*;
pub use html::*;
pub use html_response::*;
pub use response::*;
