//! Ownership authorization.

/// Returns true when the authenticated subject owns the resource.
///
/// Used to gate subject-scoped writes: the resource's declared owner must
/// equal the token subject. A mismatch is an authorization failure (403),
/// distinct from an authentication failure (401).
#[must_use]
pub fn owns_resource(subject: i64, resource_owner: i64) -> bool {
    subject == resource_owner
}
