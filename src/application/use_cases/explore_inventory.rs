use crate::application::dto::DiagramKind;
use crate::application::factories::FormatterFactory;
use crate::application::read_models::DiagramModel;
use crate::i18n::Translator;
use crate::inventory::domain::{
    Application, Entity, Facet, FacetOptions, FilterSelection, FilterValue, TypeVisibility,
};
use crate::inventory::services::{FacetResolver, Scope, ScopeProjector};

/// ExploreInventoryUseCase - Read side of the inventory
///
/// Borrows the current collections and answers the questions a view asks:
/// which filter values are available, what is in scope, and what the
/// diagram text looks like. Nothing here mutates or performs I/O.
pub struct ExploreInventoryUseCase<'a> {
    applications: &'a [Application],
    entities: &'a [Entity],
}

impl<'a> ExploreInventoryUseCase<'a> {
    pub fn new(applications: &'a [Application], entities: &'a [Entity]) -> Self {
        Self {
            applications,
            entities,
        }
    }

    /// Builds a converged selection from user choices
    ///
    /// Choices are applied in cascade order, each through the same
    /// cascading change a user makes one at a time, starting from the
    /// converged initial state.
    ///
    /// # Arguments
    /// * `choices` - Requested facet values, in any order
    pub fn select(&self, choices: &[(Facet, FilterValue)]) -> FilterSelection {
        let mut ordered = choices.to_vec();
        ordered.sort_by_key(|(facet, _)| *facet);

        let (initial, _) = self.reset();
        ordered
            .into_iter()
            .fold(initial, |filters, (facet, value)| {
                FacetResolver::apply(self.applications, &filters, facet, value)
            })
    }

    /// The converged all-"all" selection and full type visibility
    pub fn reset(&self) -> (FilterSelection, TypeVisibility) {
        (
            FacetResolver::converge(self.applications, &FilterSelection::new()),
            TypeVisibility::all(),
        )
    }

    pub fn options(&self, filters: &FilterSelection) -> FacetOptions {
        FacetResolver::resolve(self.applications, filters)
    }

    pub fn scope(&self, filters: &FilterSelection) -> Scope {
        ScopeProjector::project(self.applications, self.entities, filters)
    }

    /// Diagram source text for the current scope
    pub fn diagram_text(
        &self,
        filters: &FilterSelection,
        kind: DiagramKind,
        visibility: &TypeVisibility,
        translator: &Translator,
    ) -> String {
        let model = DiagramModel::from_scope(&self.scope(filters), visibility);
        FormatterFactory::create(kind).format(&model, translator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::inventory::domain::seed;

    fn seeded() -> (Vec<Application>, Vec<Entity>) {
        let entities = seed::default_components()
            .into_iter()
            .map(Entity::from)
            .chain(seed::default_related_apps().into_iter().map(Entity::from))
            .collect();
        (seed::default_applications(), entities)
    }

    #[test]
    fn test_select_orders_choices_by_cascade() {
        let (apps, entities) = seeded();
        let explore = ExploreInventoryUseCase::new(&apps, &entities);

        let filters = explore.select(&[
            (Facet::Segment, FilterValue::parse("Retail")),
            (Facet::Country, FilterValue::parse("USA")),
        ]);
        assert!(filters.get(Facet::Country).is("USA"));
        assert!(filters.get(Facet::Segment).is("Retail"));
        assert_eq!(filters.application_id(), Some("APL-3"));
    }

    #[test]
    fn test_unreachable_choice_on_collapsed_facet_takes_singleton() {
        let (apps, entities) = seeded();
        let explore = ExploreInventoryUseCase::new(&apps, &entities);

        let filters = explore.select(&[
            (Facet::Country, FilterValue::parse("Global")),
            (Facet::Segment, FilterValue::parse("Corporate")),
        ]);
        assert!(filters.get(Facet::Segment).is("Retail"));
        assert_eq!(filters.application_id(), Some("APL-1"));
    }

    #[test]
    fn test_unreachable_choice_on_open_facet_matches_nothing() {
        let (apps, entities) = seeded();
        let explore = ExploreInventoryUseCase::new(&apps, &entities);

        let filters = explore.select(&[
            (Facet::Country, FilterValue::parse("USA")),
            (Facet::Domain1, FilterValue::parse("Logistics")),
        ]);
        assert!(filters.get(Facet::Domain1).is("Logistics"));
        assert!(explore.scope(&filters).applications.is_empty());
    }

    #[test]
    fn test_reset_clears_choices() {
        let (apps, entities) = seeded();
        let explore = ExploreInventoryUseCase::new(&apps, &entities);

        let (filters, visibility) = explore.reset();
        assert!(filters.iter().all(|(_, value)| value.is_all()));
        assert_eq!(visibility, TypeVisibility::all());
        assert_eq!(filters, explore.select(&[]));
    }

    #[test]
    fn test_unfiltered_scope_shows_everything() {
        let (apps, entities) = seeded();
        let explore = ExploreInventoryUseCase::new(&apps, &entities);
        let scope = explore.scope(&explore.select(&[]));
        assert_eq!(scope.applications.len(), 3);
        assert_eq!(scope.components.len() + scope.related_apps.len(), entities.len());
        assert!(scope.selected_application.is_none());
    }

    #[test]
    fn test_diagram_text_is_stable() {
        let (apps, entities) = seeded();
        let explore = ExploreInventoryUseCase::new(&apps, &entities);
        let filters = explore.select(&[(Facet::ApplicationId, FilterValue::parse("APL-1"))]);
        let translator = Translator::new(Locale::En);

        let first = explore.diagram_text(
            &filters,
            DiagramKind::Entities,
            &TypeVisibility::all(),
            &translator,
        );
        let second = explore.diagram_text(
            &filters,
            DiagramKind::Entities,
            &TypeVisibility::all(),
            &translator,
        );
        assert_eq!(first, second);
        assert!(first.contains("title Architecture for Core System"));
    }
}
