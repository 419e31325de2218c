//! Label projection.

use serde::Serialize;

/// A named, colored tag attachable to issues.
///
/// Identity is the exact `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    /// Service-assigned identifier.
    pub id: i64,
    /// Label name, unique within a project.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Hex color triplet, e.g. `#d9534f`.
    pub color: String,
}
