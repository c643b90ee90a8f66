//! Validation engine
//!
//! Atomic [`Check`]s compose into [`Constraint`]s (`&` for all-of, `|` for
//! any-of, nested field mappings, per-item rules), constraints attach to a
//! field path through a [`Rule`], and rules gather into [`RuleGroup`]s.
//! [`validate`] runs them against a value and returns every failure as a
//! field-qualified [`ValidationError`], in declaration order.
//!
//! ```
//! use dendro_core::validation::{InRange, IsRequired, Rule, RuleGroup, validate};
//! use serde_json::json;
//!
//! let rules = RuleGroup::all([
//!     Rule::new("age", IsRequired),
//!     Rule::new("age", InRange::new(18, 99)),
//! ]);
//! assert!(validate(&json!({"age": 25}), &rules).is_ok());
//!
//! let errors = validate(&json!({"age": 10}), &rules).unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].field.to_string(), "age");
//! ```

mod check;
mod checks;
mod constraint;
mod engine;
mod error;
mod ops;
mod rules;

pub use check::{Check, Field, Requirement};
pub use checks::{
    Equals, InRange, InSet, IsOptional, IsRequired, IsType, Matches, MaxCount, MinCount,
    NotRequired, Predicate,
};
pub use constraint::Constraint;
pub use engine::{Validate, validate};
pub use error::{ValidationError, ValidationErrors};
pub use rules::{GroupMode, Member, Rule, RuleGroup};
