//! Verified request identity.

use uuid::Uuid;

/// Identity recovered from a verified token, inserted into request
/// extensions by the auth gate. Only the gate constructs this type for a
/// live request; handlers consume it through the `AuthUser` extractor and
/// may treat it as authentic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
}
