//! Process-local profile and project stores
//!
//! A [`Store`] is created once in `main` and handed to the service function
//! explicitly; handlers never reach for ambient globals. Keys are sanitized
//! usernames (trimmed, lowercased, 1..=50 chars), making lookups
//! case-insensitive.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use page_builder_config::defaults::default_page;
use page_builder_shared::{PageConfig, PortfolioError, Profile, Project, Result};

/// In-memory backing store for profiles and per-user project lists
pub struct Store {
    profiles: RwLock<HashMap<String, Profile>>,
    projects: RwLock<HashMap<String, Vec<Project>>>,
}

impl Store {
    /// An empty store (used by tests)
    pub fn new() -> Self {
        Store {
            profiles: RwLock::new(HashMap::new()),
            projects: RwLock::new(HashMap::new()),
        }
    }

    /// A store pre-populated with demo data
    pub fn seeded() -> Self {
        let mut profiles = HashMap::new();
        for profile in seed_profiles() {
            profiles.insert(profile.username.clone(), profile);
        }
        let projects = seed_projects().into_iter().collect::<HashMap<_, _>>();
        Store {
            profiles: RwLock::new(profiles),
            projects: RwLock::new(projects),
        }
    }

    pub async fn get_profile(&self, username: &str) -> Option<Profile> {
        self.profiles.read().await.get(username).cloned()
    }

    pub async fn upsert_profile(&self, profile: Profile) -> Result<Profile> {
        let key = sanitize_username(&profile.username)?;
        let mut stored = profile;
        stored.username = key.clone();
        self.profiles.write().await.insert(key, stored.clone());
        Ok(stored)
    }

    /// Projects for a user; unknown users get an empty list, not an error
    pub async fn list_projects(&self, username: &str) -> Vec<Project> {
        self.projects
            .read()
            .await
            .get(username)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn find_project(
        &self,
        username: &str,
        category: &str,
        slug: &str,
    ) -> Option<Project> {
        self.projects.read().await.get(username).and_then(|list| {
            list.iter()
                .find(|p| page_builder_shared::project::slugify(&p.name) == slug && p.category == category)
                .cloned()
        })
    }

    /// Create a project under a user. Generates the id, stamps createdAt,
    /// and stores the layout flattened; a missing layout defaults to one
    /// row with one rectangle.
    pub async fn create_project(&self, username: &str, mut project: Project) -> Result<Project> {
        let key = sanitize_username(username)?;

        project.id = Uuid::new_v4().to_string();
        project.created_at = Some(Utc::now().to_rfc3339());
        project.updated_at = None;

        let config = match project.page_config() {
            Ok(config) if !config.is_empty() => config,
            Ok(_) => default_page(),
            Err(e) => return Err(e),
        };
        project.store_config(&config);

        let mut projects = self.projects.write().await;
        projects.entry(key).or_default().push(project.clone());
        Ok(project)
    }

    /// Merge updated fields onto a stored project and stamp updatedAt.
    /// Last write wins; there is no version check.
    pub async fn update_project(
        &self,
        username: &str,
        project_id: &str,
        update: ProjectUpdate,
    ) -> Result<Project> {
        let key = sanitize_username(username)?;
        let mut projects = self.projects.write().await;
        let list = projects
            .get_mut(&key)
            .ok_or_else(|| PortfolioError::ProjectNotFound {
                id: project_id.to_string(),
            })?;
        let project = list
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| PortfolioError::ProjectNotFound {
                id: project_id.to_string(),
            })?;

        if let Some(name) = update.name {
            project.name = name;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        if let Some(media) = update.media {
            project.media = media;
        }
        if let Some(category) = update.category {
            project.category = category;
        }
        if let Some(config) = update.config {
            project.store_config(&config);
        }
        project.updated_at = Some(Utc::now().to_rfc3339());
        Ok(project.clone())
    }

    pub async fn delete_project(&self, username: &str, project_id: &str) -> Result<()> {
        let key = sanitize_username(username)?;
        let mut projects = self.projects.write().await;
        let list = projects
            .get_mut(&key)
            .ok_or_else(|| PortfolioError::ProjectNotFound {
                id: project_id.to_string(),
            })?;
        let before = list.len();
        list.retain(|p| p.id != project_id);
        if list.len() == before {
            return Err(PortfolioError::ProjectNotFound {
                id: project_id.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

/// Partial project update carried by the PUT body
#[derive(Debug, Default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub media: Option<Vec<String>>,
    pub category: Option<String>,
    pub config: Option<PageConfig>,
}

/// Normalize a username into a store key: trimmed, lowercased, 1..=50 chars
pub fn sanitize_username(raw: &str) -> Result<String> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() || name.len() > 50 {
        return Err(PortfolioError::InvalidUsername {
            message: "Username must be between 1 and 50 characters".to_string(),
        });
    }
    Ok(name)
}

fn seed_profiles() -> Vec<Profile> {
    vec![serde_json::from_value(serde_json::json!({
        "username": "demo",
        "displayName": "Demo Maker",
        "role": "Full-stack Developer",
        "bio": "I build sales-driven, user-focused software.",
        "skillSet": [
            {"id": "skill-1", "name": "Rust", "orderIndex": 0},
            {"id": "skill-2", "name": "TypeScript", "orderIndex": 1},
            {"id": "skill-3", "name": "PostgreSQL", "orderIndex": 2}
        ],
        "services": [
            {"id": "service-1", "icon": "Globe", "title": "Web Development", "orderIndex": 0},
            {"id": "service-2", "icon": "Zap", "title": "Automation", "orderIndex": 1}
        ],
        "contactButtonLabel": "Contact Me",
        "hireButtonLabel": "Hire Me"
    }))
    .expect("seed profile is well-formed")]
}

fn seed_projects() -> Vec<(String, Vec<Project>)> {
    let project: Project = serde_json::from_value(serde_json::json!({
        "id": "1",
        "name": "Vocabulary Research Platform",
        "description": "A web application for researching and learning vocabulary.",
        "media": ["https://example.com/cover.jpg"],
        "category": "web-application",
        "config": [
            {"id": "row-1", "shapes": [{
                "id": "shape-1",
                "componentType": "rectangle",
                "content": "<div class='text-black text-3xl font-bold text-center'>Vocabulary Learning Platform</div>",
                "styleName": "purple",
                "size": 100,
                "positioning": "center",
                "animation": "fadeIn",
                "delay": 0
            }]},
            {"id": "row-2", "shapes": [{
                "id": "shape-1",
                "componentType": "circle",
                "content": "<div class='text-white text-lg text-center'>Research</div>",
                "styleName": "gradientBlue",
                "size": 50,
                "positioning": "center",
                "animation": "slideRight",
                "delay": 0.2
            }]}
        ]
    }))
    .expect("seed project is well-formed");

    vec![("demo".to_string(), vec![project])]
}
