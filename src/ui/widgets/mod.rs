pub mod progress;

pub use progress::{percent_of, progress_text, ProgressBar};
