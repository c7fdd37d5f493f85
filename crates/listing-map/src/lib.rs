//! Column-role resolution.
//!
//! Locates the price, mileage, year and descriptive columns of a raw listing
//! table whose column names vary by source site and language.
//!
//! # Example
//!
//! ```
//! use listing_map::{RoleSynonyms, resolve_roles};
//! use listing_model::ColumnRole;
//!
//! let columns = vec!["Prix (DH)".to_string(), "Kilométrage".to_string(), "Année".to_string()];
//! let binding = resolve_roles(&columns, &RoleSynonyms::default());
//!
//! assert_eq!(binding.source(ColumnRole::Price), Some("Prix (DH)"));
//! assert_eq!(binding.source(ColumnRole::Mileage), None);
//! ```

mod error;
mod resolver;
mod synonyms;

pub use error::{MappingError, Result};
pub use resolver::{require_roles, resolve_roles};
pub use synonyms::{MergeError, RoleSynonyms};
