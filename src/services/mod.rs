// Service exports
pub mod dataset;

pub use dataset::{boxers_with_gyms, write_csv, Dataset, DatasetError};
