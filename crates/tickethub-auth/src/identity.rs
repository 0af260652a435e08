//! The verified-caller capability type.

use tickethub_entity::user::RoleName;

/// The authenticated caller: user id and role, as carried by a verified
/// token.
///
/// An `Identity` can only be constructed by the token verifier in this
/// crate. Possession of one proves the bearer token checked out; handlers
/// and services never build it by hand, so revocation could later be added
/// by changing the verifier alone.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    user_id: i64,
    role: RoleName,
    /// Zero-sized private field that keeps construction inside this crate.
    _sealed: (),
}

impl Identity {
    pub(crate) fn new(user_id: i64, role: RoleName) -> Self {
        Self {
            user_id,
            role,
            _sealed: (),
        }
    }

    /// The caller's user id.
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// The caller's role at token issuance time.
    pub fn role(&self) -> RoleName {
        self.role
    }

    /// Whether the caller holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
