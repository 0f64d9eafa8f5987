//! Email address display type.

/// A sender address as recovered from a container envelope.
///
/// # Examples
/// - display name + address → `"Alice Example <alice@example.com>"`
/// - bare address → `"alice@example.com"`
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EmailAddress {
    /// Human-readable display name (may be empty).
    pub display_name: String,
    /// The bare email address (`user@domain`).
    pub address: String,
}

impl EmailAddress {
    /// Build an address from optional name and address parts.
    pub fn new(display_name: Option<&str>, address: &str) -> Self {
        Self {
            display_name: display_name.unwrap_or("").trim().to_string(),
            address: address.trim().to_string(),
        }
    }

    /// `true` if neither a display name nor an address was recovered.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_empty() && self.address.is_empty()
    }

    /// Format for display: `"Display Name <address>"` or just `"address"`.
    pub fn display(&self) -> String {
        if self.display_name.is_empty() {
            self.address.clone()
        } else if self.address.is_empty() {
            self.display_name.clone()
        } else {
            format!("{} <{}>", self.display_name, self.address)
        }
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
