pub mod exec;
pub mod sanitize;
pub mod template;
pub mod writer;

pub use exec::exec;
pub use sanitize::sanitize_feature;
pub use template::render;
pub use writer::{session_file_name, write_session_file};
