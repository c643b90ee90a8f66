//! Commonly used names
//!
//! ```
//! use dendro::prelude::*;
//! ```

pub use crate::builder::Get;
pub use crate::partials;
pub use dendro_core::prelude::*;
