pub mod output;
pub mod source;

pub use output::{default_output_name, default_output_path, write_output};
pub use source::SourceLoader;
