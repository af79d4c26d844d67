//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches, where the entity is mutable
//!
//! Choice columns decode straight into the closed enums from
//! `workbridge_core`; rating and upload columns are plain scalars on rows
//! and validated newtypes on DTOs.

pub mod application;
pub mod category;
pub mod feedback;
pub mod interaction;
pub mod interview;
pub mod job;
pub mod message;
pub mod offer;
pub mod profile;
pub mod skill;
pub mod user;
pub mod verification;
