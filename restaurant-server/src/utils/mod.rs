pub mod json;
pub mod logger;
pub mod validation;

pub use json::Json;
pub use logger::init_logger_with_file;
pub use validation::{required, validate_menu_window, validate_payload};
