//! Wire models for the TeamFinder backend.
//!
//! Everything is camelCase JSON. List fields default to empty and record ids
//! are accepted as either JSON strings or numbers, since the backend is not
//! consistent about them.

use serde::{Deserialize, Deserializer, Serialize};
use session::{ExperienceTier, Identity};

/// Accept a JSON string or number and normalise it to a `String`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Response to a successful credential check: the code was dispatched
/// out-of-band and this is the masked destination to show the user.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SigninResponse {
    pub email: String,
}

/// Response to a successful OTP verification during login.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VerifyLoginResponse {
    pub user: Identity,
    pub token: String,
}

/// Account-creation payload sent once the signup OTP has been verified.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupPayload {
    pub name: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub branch: String,
    pub college: String,
    pub skill: Vec<String>,
}

/// A "team requirement" post in the feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPost {
    #[serde(deserialize_with = "string_or_number", default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub competition_name: String,
    #[serde(default)]
    pub competition_date: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub experience_tag: ExperienceTier,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub requested_usernames: Vec<String>,
    #[serde(default)]
    pub accepted_usernames: Vec<String>,
}

impl TeamPost {
    /// Owner plus everyone accepted so far.
    pub fn team_size(&self) -> usize {
        self.accepted_usernames.len() + 1
    }
}

/// Payload for creating a team requirement post.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamPost {
    pub username: String,
    pub competition_name: String,
    pub competition_date: String,
    pub position: String,
    pub experience_tag: ExperienceTier,
    pub team_name: String,
}

/// An official campus event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusEvent {
    #[serde(deserialize_with = "string_or_number", default)]
    pub id: String,
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "string_or_number", default)]
    pub max_team_size: String,
    #[serde(deserialize_with = "string_or_number", default)]
    pub prize_pool: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub club_name: String,
    #[serde(default)]
    pub posted_by: String,
}

/// Payload for hosting a campus event.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampusEvent {
    pub heading: String,
    pub date: String,
    pub description: String,
    pub max_team_size: String,
    pub prize_pool: String,
    pub venue: String,
    pub club_name: String,
    pub posted_by: String,
}

/// The search endpoints return either an array of users or a single user
/// object. Normalise both shapes to a vec, dropping anything unparsable.
pub fn normalize_search_results(value: serde_json::Value) -> Vec<Identity> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        obj @ serde_json::Value::Object(_) => serde_json::from_value(obj)
            .map(|identity| vec![identity])
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn team_post_accepts_numeric_and_string_ids() {
        let numeric: TeamPost = serde_json::from_value(json!({
            "id": 42,
            "username": "alice",
        }))
        .unwrap();
        assert_eq!(numeric.id, "42");

        let textual: TeamPost = serde_json::from_value(json!({
            "id": "663a1f",
            "username": "alice",
            "requestedUsernames": ["bob"],
        }))
        .unwrap();
        assert_eq!(textual.id, "663a1f");
        assert_eq!(textual.requested_usernames, vec!["bob".to_string()]);
        assert!(textual.accepted_usernames.is_empty());
        assert_eq!(textual.team_size(), 1);
    }

    #[test]
    fn new_post_serialises_camel_case() {
        let post = NewTeamPost {
            username: "alice".into(),
            competition_name: "Spring Hackathon".into(),
            competition_date: "2026-04-01".into(),
            position: "Backend Dev".into(),
            experience_tag: ExperienceTier::Intermediate,
            team_name: "The Bug Smashers".into(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["competitionName"], "Spring Hackathon");
        assert_eq!(json["experienceTag"], "Intermediate");
        assert_eq!(json["teamName"], "The Bug Smashers");
    }

    #[test]
    fn search_results_normalise_array_and_single_object() {
        let list = normalize_search_results(json!([
            {"username": "alice"},
            {"username": "bob"},
        ]));
        assert_eq!(list.len(), 2);

        let single = normalize_search_results(json!({"username": "carol"}));
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].username, "carol");

        assert!(normalize_search_results(json!(null)).is_empty());
        assert!(normalize_search_results(json!("oops")).is_empty());
    }

    #[test]
    fn campus_event_tolerates_numeric_fields() {
        let event: CampusEvent = serde_json::from_value(json!({
            "id": 7,
            "heading": "Annual Spring Hackathon",
            "maxTeamSize": 4,
            "prizePool": "$1000",
            "postedBy": "president_jo",
        }))
        .unwrap();
        assert_eq!(event.id, "7");
        assert_eq!(event.max_team_size, "4");
        assert_eq!(event.prize_pool, "$1000");
    }
}
