//! # Clinic Boarding Service
//!
//! Cage and boarding allocation engine for a veterinary clinic backend:
//! tracks physical boarding cages, their availability status, and the
//! check-in/check-out lifecycle of the pets occupying them.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, the cage status state machine,
//!   repository and directory traits
//! - **application**: Business logic services (cage registry, boarding
//!   ledger, availability queries, stay-cost exposure)
//! - **infrastructure**: External concerns (SeaORM persistence, migrations,
//!   in-memory storage for tests and development)
//! - **api**: REST API with Swagger documentation
//! - **shared**: Cross-cutting helpers (retry with backoff)

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, Migrator, SeaOrmRepositoryProvider};

// Re-export API surface
pub use api::{create_api_router, AppState};
