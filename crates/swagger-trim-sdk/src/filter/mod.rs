mod paths;

pub use paths::{filter_paths, PathFilterOutcome, PathWhitelist};
