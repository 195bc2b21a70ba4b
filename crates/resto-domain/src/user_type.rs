//! User account classifications.

use serde::{Deserialize, Serialize};

/// Reference rows of the `type_users` table.
///
/// Wire/storage id: 1 = User, 2 = Admin, 3 = Critique, 4 = Restaurateur.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[default]
    User = 1,
    Admin = 2,
    Critique = 3,
    Restaurateur = 4,
}

impl UserType {
    pub const ALL: [UserType; 4] = [
        UserType::User,
        UserType::Admin,
        UserType::Critique,
        UserType::Restaurateur,
    ];

    /// Convert from the stored id. Returns `None` for unknown ids.
    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Critique => "critique",
            Self::Restaurateur => "restaurateur",
        }
    }
}
