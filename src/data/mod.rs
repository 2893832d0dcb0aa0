mod loader;

pub use loader::{asia_dataset, load_dataset_from_str, LoadError};
