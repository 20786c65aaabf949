//! Shared types for the portfolio page builder
//!
//! This crate contains the types shared between the config validator, the
//! renderer, the dashboard editor, and the API server: the closed vocabulary
//! of valid component values, the shape/row/page configuration model, the
//! profile and project entities, and the common error type.

pub mod config;
pub mod errors;
pub mod profile;
pub mod project;
pub mod vocabulary;

pub use config::{PageConfig, RowConfig, ShapeDescriptor};
pub use errors::{PortfolioError, Result};
pub use profile::{Profile, Service, Skill};
pub use project::Project;
pub use vocabulary::{AnimationType, ComponentType, Positioning, StyleName, SIZES};
