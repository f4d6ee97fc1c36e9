//! Client-side user models.
//!
//! [`Identity`] is the profile record the backend returns on login and from
//! the search endpoints. The wire encoding is camelCase and every field
//! except `username` is defaulted, so a sparse record still parses.

use serde::{Deserialize, Serialize};

/// Self-reported experience level used on profiles and team posts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceTier {
    #[default]
    Beginner,
    Intermediate,
    Pro,
}

impl ExperienceTier {
    pub const ALL: [ExperienceTier; 3] = [
        ExperienceTier::Beginner,
        ExperienceTier::Intermediate,
        ExperienceTier::Pro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceTier::Beginner => "Beginner",
            ExperienceTier::Intermediate => "Intermediate",
            ExperienceTier::Pro => "Pro",
        }
    }

    /// Parse a tier from a form value, falling back to `Beginner`.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "Intermediate" => ExperienceTier::Intermediate,
            "Pro" => ExperienceTier::Pro,
            _ => ExperienceTier::Beginner,
        }
    }
}

impl std::fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user's profile record as known to the client.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub experience_tag: ExperienceTier,
    #[serde(default)]
    pub skill: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub likes_received: u32,
    #[serde(default)]
    pub liked_by: Vec<String>,
}

impl Identity {
    /// Display name: full name when set, otherwise the username.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.username
        } else {
            &self.name
        }
    }

    /// Whether this user carries a capability marker in its role set.
    ///
    /// Accepts both the raw marker (`"PRESIDENT"`) and the framework-prefixed
    /// form (`"ROLE_PRESIDENT"`) the backend sometimes emits. Views and the
    /// shell share this one check so role logic cannot drift between them.
    pub fn has_capability(&self, capability: &str) -> bool {
        let prefixed = format!("ROLE_{capability}");
        self.roles.iter().any(|r| r == capability || r == &prefixed)
    }

    /// Merge a partial edit into this identity (shallow field overwrite).
    pub fn apply(&mut self, patch: IdentityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(branch) = patch.branch {
            self.branch = branch;
        }
        if let Some(college) = patch.college {
            self.college = college;
        }
        if let Some(tier) = patch.experience_tag {
            self.experience_tag = tier;
        }
        if let Some(skill) = patch.skill {
            self.skill = skill;
        }
    }
}

/// Partial profile edit. `None` fields are left untouched by
/// [`Identity::apply`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_tag: Option<ExperienceTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<Vec<String>>,
}

/// An authenticated session: who is logged in and the bearer credential
/// presented on every authenticated request.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub identity: Identity,
    pub token: String,
}
