pub mod validation_chain;
pub mod validation_rules;

pub use validation_chain::{ValidationChain, ValidationErrors, ValidationRule};
pub use validation_rules::{MinLengthRule, PresenceRule};
