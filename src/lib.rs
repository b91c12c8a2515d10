//! archviz - architecture inventory explorer
//!
//! This library keeps an inventory of applications, their components and the
//! external applications they talk to, narrows it with cascading facet
//! filters and draws the result as PlantUML diagrams, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inventory`): Records, facet resolution and scope projection
//! - **Application Layer** (`application`): The inventory store, use cases and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Localization** (`i18n`): English and Spanish message catalogs
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use archviz::prelude::*;
//!
//! let store = InventoryStore::open(MemoryStore::new());
//! let explore = ExploreInventoryUseCase::new(store.applications(), store.entities());
//!
//! let filters = explore.select(&[(Facet::ApplicationId, FilterValue::parse("APL-1"))]);
//! let text = explore.diagram_text(
//!     &filters,
//!     DiagramKind::Entities,
//!     &TypeVisibility::all(),
//!     &Translator::new(Locale::En),
//! );
//! assert!(text.starts_with("@startuml"));
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod i18n;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrNotifier;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonFileStore, MemoryStore, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        ListingFormatter, PlantUmlEntityFormatter, PlantUmlRelationFormatter,
    };
    pub use crate::adapters::outbound::network::{CachingDiagramRenderer, PlantUmlServerRenderer};
    pub use crate::application::dto::{DiagramKind, ImageFormat};
    pub use crate::application::read_models::DiagramModel;
    pub use crate::application::use_cases::{
        ExploreInventoryUseCase, ManageInventoryUseCase, RenderDiagramUseCase, RenderState,
    };
    pub use crate::application::{InventoryStore, PersistenceMode};
    pub use crate::i18n::{Locale, MessageKey, Translator};
    pub use crate::inventory::domain::{
        Application, Component, ComponentType, Entity, EntityType, Facet, FacetOptions,
        FilterSelection, FilterValue, RelatedApplication, TypeVisibility,
    };
    pub use crate::inventory::services::{
        ComponentDraft, FacetResolver, RecordValidator, RelatedAppDraft, Scope, ScopeProjector,
    };
    pub use crate::ports::outbound::{
        DiagramFormatter, DiagramRenderer, KeyValueStore, Notification, Notifier, OutputPresenter,
    };
    pub use crate::shared::Result;
}
