mod outcome;
mod variant;

pub use outcome::Outcome;
pub use variant::Variant;
