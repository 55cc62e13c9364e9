mod output;

pub use output::DATA_FILE_SUFFIX;
pub use output::NOT_FOUND_FILE_SUFFIX;
pub use output::OutputManager;
