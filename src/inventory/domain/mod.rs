pub mod application;
pub mod component;
pub mod entity;
pub mod filters;
pub mod related_app;
pub mod seed;

pub use application::{Application, Disposition, Domain};
pub use component::{Component, ComponentType};
pub use entity::{Entity, EntityKind, EntityType};
pub use filters::{
    Facet, FacetOptions, FilterSelection, FilterValue, TypeVisibility, ALL_LITERAL, FACET_COUNT,
};
pub use related_app::{RelatedAppType, RelatedApplication};
