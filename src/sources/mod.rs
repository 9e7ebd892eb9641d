pub mod ninjas;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod fake;

pub use ninjas::NinjasClient;
pub use traits::CarSource;
pub use types::{FilterMapping, YearResponse};
