pub mod paths;

pub use paths::{file_name_lossy, open_bounded, validate_file_size};
