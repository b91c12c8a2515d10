mod facet_resolver;
mod record_validator;
mod scope_projector;

pub use facet_resolver::FacetResolver;
pub use record_validator::{
    ComponentDraft, FieldError, RecordValidator, RelatedAppDraft, ValidationErrors,
};
pub use scope_projector::{Scope, ScopeProjector};
