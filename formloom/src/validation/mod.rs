//! Validation of submitted data.
//!
//! A [`Validator`] checks a data bag against per-field rule lists. Rules are
//! either objects implementing [`Rule`] or `name:params` strings resolved by
//! a [`RuleEngine`].
//!
//! # Example
//!
//! ```
//! use formloom::validation::Validator;
//!
//! let validator = Validator::new([("age", 16)]).rule("age", "required|numeric|min:18");
//!
//! assert!(validator.fails());
//! assert_eq!(validator.first_error("age"), Some("This field must be at least 18."));
//! ```

mod engine;
mod rule;
pub mod rules;
mod validator;

pub use engine::RuleEngine;
pub use engine::RuleFactory;
pub use rule::EncodedRule;
pub use rule::FieldRules;
pub use rule::Rule;
pub use rule::RuleToken;
pub use validator::ErrorBag;
pub use validator::Validator;
