pub mod models;
pub mod validation;
pub mod overlay;
pub mod dashboard;
pub mod errors;

pub use models::*;
pub use validation::*;
pub use overlay::*;
pub use dashboard::*;
pub use errors::*;
