//! Role resolution over a table's column names.

use listing_model::{ColumnBinding, ColumnRole};

use crate::error::{MappingError, Result};
use crate::synonyms::RoleSynonyms;

/// Bind each role to the first column, in table order, whose lower-cased
/// name contains one of the role's synonyms.
///
/// Matching is structural: "price_estimate" binds to Price. Roles with no
/// matching column stay unbound. Roles are resolved independently, so one
/// column may serve two roles.
pub fn resolve_roles(columns: &[String], synonyms: &RoleSynonyms) -> ColumnBinding {
    let mut binding = ColumnBinding::new();
    for role in ColumnRole::ALL {
        match columns
            .iter()
            .find(|column| synonyms.matches(role, column))
        {
            Some(column) => {
                tracing::debug!(role = %role, column = %column, "bound column role");
                binding.bind(role, column.clone());
            }
            None => {
                tracing::debug!(role = %role, "no column matches role");
            }
        }
    }
    binding
}

/// Fail on the first required role left unbound by [`resolve_roles`].
pub fn require_roles(
    binding: &ColumnBinding,
    columns: &[String],
    synonyms: &RoleSynonyms,
) -> Result<()> {
    match binding.missing_required().first() {
        Some(role) => Err(MappingError::RequiredRoleUnresolved {
            role: *role,
            synonyms: synonyms.for_role(*role).to_vec(),
            columns: columns.to_vec(),
        }),
        None => Ok(()),
    }
}
