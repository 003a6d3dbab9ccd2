use serde::{Deserialize, Serialize};

/// Privileged role a user record may hold.
///
/// An ordinary student holds no role at all, so user records carry an
/// `Option<Role>`. The two privileged roles are deliberately not ordered:
/// Admin does not imply Instructor, each gate matches its role exactly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Instructor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Instructor => "Instructor",
            Role::Admin => "Admin",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
