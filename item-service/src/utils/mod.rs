pub mod path;
pub mod validation;

pub use path::ItemId;
pub use validation::ValidatedJson;
