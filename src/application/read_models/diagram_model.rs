use crate::inventory::domain::{Application, Entity, TypeVisibility};
use crate::inventory::services::Scope;

/// Everything a diagram formatter needs, already filtered
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagramModel {
    /// Visible entities, in store order (components first)
    pub entities: Vec<Entity>,
    /// The application the diagram is about, when unambiguous
    pub selected_application: Option<Application>,
    /// Applications in view
    pub applications: Vec<Application>,
}

impl DiagramModel {
    pub fn new(
        entities: Vec<Entity>,
        selected_application: Option<Application>,
        applications: Vec<Application>,
    ) -> Self {
        Self {
            entities,
            selected_application,
            applications,
        }
    }

    /// Builds the model from a projected scope, dropping hidden entity types
    pub fn from_scope(scope: &Scope, visibility: &TypeVisibility) -> Self {
        Self {
            entities: scope.entities(visibility),
            selected_application: scope.selected_application.clone(),
            applications: scope.applications.clone(),
        }
    }
}
