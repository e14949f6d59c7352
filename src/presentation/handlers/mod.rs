mod analyze;
mod health;
mod upload;

pub use analyze::analyze_handler;
pub use health::health_handler;
pub use upload::{UPLOAD_FIELD, upload_handler};
