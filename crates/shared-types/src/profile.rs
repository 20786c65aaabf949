//! Profile entity and its canonical skill/service shapes
//!
//! Older profile payloads carried skills as bare strings and services
//! without ids or ordering. Both are resolved once, at the deserialization
//! boundary, into a single canonical shape so nothing downstream has to
//! duck-type entries at render time.

use serde::{Deserialize, Deserializer, Serialize};

/// A single skill, canonical form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub order_index: u32,
}

/// A single offered service, canonical form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    /// Icon name consumed by the frontend icon set (e.g. "Globe")
    pub icon: String,
    pub title: String,
    pub order_index: u32,
}

/// Wire form of a skill entry: legacy bare string or (possibly partial)
/// object. Resolved into [`Skill`] during profile deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SkillEntry {
    Name(String),
    Object {
        #[serde(default)]
        id: Option<String>,
        name: String,
        #[serde(rename = "orderIndex", default)]
        order_index: Option<u32>,
    },
}

impl SkillEntry {
    fn resolve(self, position: usize) -> Skill {
        match self {
            SkillEntry::Name(name) => Skill {
                id: format!("skill-{}", position + 1),
                name,
                order_index: position as u32,
            },
            SkillEntry::Object {
                id,
                name,
                order_index,
            } => Skill {
                id: id.unwrap_or_else(|| format!("skill-{}", position + 1)),
                name,
                order_index: order_index.unwrap_or(position as u32),
            },
        }
    }
}

/// Wire form of a service entry, id and ordering optional in legacy data
#[derive(Debug, Clone, Deserialize)]
struct ServiceEntry {
    #[serde(default)]
    id: Option<String>,
    icon: String,
    title: String,
    #[serde(rename = "orderIndex", default)]
    order_index: Option<u32>,
}

impl ServiceEntry {
    fn resolve(self, position: usize) -> Service {
        Service {
            id: self.id.unwrap_or_else(|| format!("service-{}", position + 1)),
            icon: self.icon,
            title: self.title,
            order_index: self.order_index.unwrap_or(position as u32),
        }
    }
}

fn deserialize_skills<'de, D>(deserializer: D) -> Result<Vec<Skill>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<SkillEntry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| entry.resolve(i))
        .collect())
}

fn deserialize_services<'de, D>(deserializer: D) -> Result<Vec<Service>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<ServiceEntry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| entry.resolve(i))
        .collect())
}

/// Public profile of a portfolio owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub skill_set: Vec<Skill>,
    #[serde(default, deserialize_with = "deserialize_services")]
    pub services: Vec<Service>,
    #[serde(default = "default_contact_label")]
    pub contact_button_label: String,
    #[serde(default = "default_hire_label")]
    pub hire_button_label: String,
}

fn default_contact_label() -> String {
    "Contact Me".to_string()
}

fn default_hire_label() -> String {
    "Hire Me".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_legacy_string_skills_normalize() {
        let profile: Profile = serde_json::from_value(json!({
            "username": "john",
            "displayName": "John Doe",
            "skillSet": ["React", "Figma"],
            "services": [{"icon": "Globe", "title": "Web Development"}]
        }))
        .unwrap();

        assert_eq!(
            profile.skill_set,
            vec![
                Skill {
                    id: "skill-1".to_string(),
                    name: "React".to_string(),
                    order_index: 0
                },
                Skill {
                    id: "skill-2".to_string(),
                    name: "Figma".to_string(),
                    order_index: 1
                },
            ]
        );
        assert_eq!(profile.services[0].id, "service-1");
        assert_eq!(profile.services[0].order_index, 0);
        assert_eq!(profile.contact_button_label, "Contact Me");
    }

    #[test]
    fn test_canonical_skills_pass_through() {
        let profile: Profile = serde_json::from_value(json!({
            "username": "partho5",
            "displayName": "Partho Protim",
            "skillSet": [
                {"id": "skill-9", "name": "Node.js", "orderIndex": 7}
            ],
            "services": []
        }))
        .unwrap();

        assert_eq!(profile.skill_set[0].id, "skill-9");
        assert_eq!(profile.skill_set[0].order_index, 7);
    }

    #[test]
    fn test_mixed_entries_get_positional_defaults() {
        let profile: Profile = serde_json::from_value(json!({
            "username": "a",
            "displayName": "A",
            "skillSet": ["Rust", {"name": "Tokio"}]
        }))
        .unwrap();

        assert_eq!(profile.skill_set[1].id, "skill-2");
        assert_eq!(profile.skill_set[1].name, "Tokio");
        assert_eq!(profile.skill_set[1].order_index, 1);
    }
}
