//! Built-in constraints
//!
//! # Categories
//!
//! - **Presence**: blank, nil
//! - **Logical**: boolean, dynamic type
//! - **String**: length, email, URL, regular expression
//! - **Numeric**: range, comparisons
//! - **Values**: equality, choice membership
//! - **Collection**: element count
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck_validator::prelude::*;
//!
//! let name = not_blank().in_group("create");
//! let age = range(18.0, 120.0);
//! let role = choice(["admin", "editor", "viewer"]).with_multiple(false);
//!
//! assert!(name.validate_any("Ann").is_ok());
//! assert!(age.validate_any(17).is_err());
//! assert!(role.validate_any("editor").is_ok());
//! ```

// Presence validators
pub mod blank;
pub mod nullable;

// Logical validators
pub mod boolean;
pub mod kind;

// String validators
pub mod content;
pub mod length;

// Numeric validators
pub mod range;

// Value validators
pub mod choice;
pub mod equality;

// Collection validators
pub mod size;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use blank::{Blank, NotBlank, blank, not_blank};
pub use boolean::{IsFalse, IsTrue, is_false, is_true};
pub use choice::{Choice, choice};
pub use content::{Email, Regexp, Url, email, regexp, url};
pub use equality::{EqualTo, NotEqualTo, equal_to, not_equal_to};
pub use kind::{OfType, of_type};
pub use length::{Length, LengthMode, length};
pub use nullable::{Nil, NotNil, nil, not_nil};
pub use range::{
    GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, Range, greater_than,
    greater_than_or_equal, less_than, less_than_or_equal, range,
};
pub use size::{Count, count};
