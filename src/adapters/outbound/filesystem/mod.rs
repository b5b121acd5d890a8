pub mod file_writer;
pub mod json_file_source;

pub use file_writer::FileSystemWriter;
pub use json_file_source::JsonFileSource;
