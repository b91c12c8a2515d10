use crate::inventory::domain::{
    Application, Component, Entity, Facet, FilterSelection, RelatedApplication, TypeVisibility,
};
use std::collections::HashSet;

/// Facets that narrow the application subset; the explicit application pick
/// is handled separately
const SUBSET_FACETS: [Facet; 7] = [
    Facet::Country,
    Facet::Segment,
    Facet::Domain1,
    Facet::Domain2,
    Facet::Domain3,
    Facet::Disposition,
    Facet::CurrencyIssues,
];

/// The filtered view of the inventory
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scope {
    /// Applications in view
    pub applications: Vec<Application>,
    /// Components in view, in store order
    pub components: Vec<Component>,
    /// Related applications in view, in store order
    pub related_apps: Vec<RelatedApplication>,
    /// The single application the view is about, if it is unambiguous
    pub selected_application: Option<Application>,
}

impl Scope {
    /// Diagram entities: components then related apps, minus hidden types
    pub fn entities(&self, visibility: &TypeVisibility) -> Vec<Entity> {
        self.components
            .iter()
            .cloned()
            .map(Entity::Component)
            .chain(self.related_apps.iter().cloned().map(Entity::RelatedApplication))
            .filter(|entity| visibility.is_visible(entity.entity_type()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.related_apps.is_empty()
    }
}

/// ScopeProjector - Computes the final filtered entity sets
pub struct ScopeProjector;

impl ScopeProjector {
    /// Projects the inventory through a (converged) filter selection
    ///
    /// An explicit application pick wins over the other facets. When nothing
    /// matches and no application was picked, the facet subset itself is
    /// presented so applications without components stay visible.
    pub fn project(
        applications: &[Application],
        entities: &[Entity],
        filters: &FilterSelection,
    ) -> Scope {
        let subset: Vec<&Application> = applications
            .iter()
            .filter(|app| filters.admits(app, &SUBSET_FACETS))
            .collect();
        let subset_ids: HashSet<&str> = subset
            .iter()
            .copied()
            .map(|app: &Application| app.id.as_str())
            .collect();

        let in_scope = |application_id: &str| match filters.application_id() {
            Some(chosen) => application_id == chosen,
            None => subset_ids.contains(application_id),
        };

        let components: Vec<Component> = entities
            .iter()
            .filter_map(Entity::as_component)
            .filter(|c| in_scope(c.application_id.as_str()))
            .cloned()
            .collect();
        let related_apps: Vec<RelatedApplication> = entities
            .iter()
            .filter_map(Entity::as_related_app)
            .filter(|r| in_scope(r.application_id.as_str()))
            .cloned()
            .collect();

        let owner_ids: HashSet<&str> = components
            .iter()
            .map(|c| c.application_id.as_str())
            .chain(related_apps.iter().map(|r| r.application_id.as_str()))
            .collect();

        let scoped_applications: Vec<Application> =
            if owner_ids.is_empty() && filters.application_id().is_none() {
                subset.into_iter().cloned().collect()
            } else {
                applications
                    .iter()
                    .filter(|app| owner_ids.contains(app.id.as_str()))
                    .cloned()
                    .collect()
            };

        let selected_application = match filters.application_id() {
            Some(chosen) => applications.iter().find(|app| app.id == chosen).cloned(),
            None => match scoped_applications.as_slice() {
                [only] => Some(only.clone()),
                _ => None,
            },
        };

        Scope {
            applications: scoped_applications,
            components,
            related_apps,
            selected_application,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::{ComponentType, Domain, EntityType, FilterValue};

    fn app(id: &str, country: &str) -> Application {
        Application::new(id, format!("App {}", id), country, "Retail", Domain::new("a", "b", id))
    }

    fn component(id: &str, app_id: &str) -> Entity {
        Component::new(id, format!("Comp {}", id), app_id, ComponentType::Component, 1).into()
    }

    fn ids(scope: &Scope) -> Vec<String> {
        scope.applications.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_country_filter_selects_matching_components() {
        let apps = vec![app("APL-1", "Global"), app("APL-2", "USA")];
        let entities = vec![component("A1", "APL-1"), component("B1", "APL-2")];
        let filters =
            FilterSelection::new().select(Facet::Country, FilterValue::parse("Global"));

        let scope = ScopeProjector::project(&apps, &entities, &filters);
        assert_eq!(scope.components.len(), 1);
        assert_eq!(scope.components[0].id, "A1");
        assert_eq!(scope.selected_application.unwrap().id, "APL-1");
    }

    #[test]
    fn test_explicit_application_bypasses_facet_subset() {
        let apps = vec![app("APL-1", "Global"), app("APL-2", "USA")];
        let entities = vec![component("A1", "APL-1"), component("B1", "APL-2")];
        let filters = FilterSelection::new()
            .select(Facet::Country, FilterValue::parse("Global"))
            .select(Facet::ApplicationId, FilterValue::parse("APL-2"));

        let scope = ScopeProjector::project(&apps, &entities, &filters);
        assert_eq!(scope.components[0].id, "B1");
        assert_eq!(scope.selected_application.unwrap().id, "APL-2");
    }

    #[test]
    fn test_multiple_owners_leave_selection_ambiguous() {
        let apps = vec![app("APL-1", "USA"), app("APL-2", "USA")];
        let entities = vec![component("A1", "APL-1"), component("B1", "APL-2")];

        let scope = ScopeProjector::project(&apps, &entities, &FilterSelection::new());
        assert_eq!(ids(&scope), vec!["APL-1", "APL-2"]);
        assert!(scope.selected_application.is_none());
    }

    #[test]
    fn test_applications_without_entities_are_dropped_when_others_match() {
        let apps = vec![app("APL-1", "USA"), app("APL-2", "USA")];
        let entities = vec![component("A1", "APL-1")];

        let scope = ScopeProjector::project(&apps, &entities, &FilterSelection::new());
        assert_eq!(ids(&scope), vec!["APL-1"]);
        assert_eq!(scope.selected_application.unwrap().id, "APL-1");
    }

    #[test]
    fn test_empty_match_falls_back_to_facet_subset() {
        let apps = vec![app("APL-1", "USA"), app("APL-2", "USA"), app("APL-3", "Chile")];
        let filters = FilterSelection::new().select(Facet::Country, FilterValue::parse("USA"));

        let scope = ScopeProjector::project(&apps, &[], &filters);
        assert!(scope.is_empty());
        assert_eq!(ids(&scope), vec!["APL-1", "APL-2"]);
        assert!(scope.selected_application.is_none());
    }

    #[test]
    fn test_fallback_single_application_is_selected() {
        let apps = vec![app("APL-1", "USA"), app("APL-3", "Chile")];
        let filters = FilterSelection::new().select(Facet::Country, FilterValue::parse("Chile"));

        let scope = ScopeProjector::project(&apps, &[], &filters);
        assert_eq!(scope.selected_application.unwrap().id, "APL-3");
    }

    #[test]
    fn test_no_fallback_when_application_is_picked() {
        let apps = vec![app("APL-1", "USA"), app("APL-2", "USA")];
        let filters =
            FilterSelection::new().select(Facet::ApplicationId, FilterValue::parse("APL-2"));

        let scope = ScopeProjector::project(&apps, &[component("A1", "APL-1")], &filters);
        assert!(scope.applications.is_empty());
        assert_eq!(scope.selected_application.unwrap().id, "APL-2");
    }

    #[test]
    fn test_unknown_application_pick_selects_nothing() {
        let apps = vec![app("APL-1", "USA")];
        let filters =
            FilterSelection::new().select(Facet::ApplicationId, FilterValue::parse("APL-404"));
        let scope = ScopeProjector::project(&apps, &[component("A1", "APL-1")], &filters);
        assert!(scope.selected_application.is_none());
        assert!(scope.components.is_empty());
    }

    #[test]
    fn test_related_apps_follow_the_same_scope() {
        let apps = vec![app("APL-1", "USA"), app("APL-2", "Chile")];
        let entities = vec![
            RelatedApplication::new("R1", "SAP", "SAP ERP", "APL-1").into(),
            RelatedApplication::new("R2", "CRM", "CRM", "APL-2").into(),
        ];
        let filters = FilterSelection::new().select(Facet::Country, FilterValue::parse("Chile"));

        let scope = ScopeProjector::project(&apps, &entities, &filters);
        assert_eq!(scope.related_apps.len(), 1);
        assert_eq!(scope.related_apps[0].id, "R2");
        assert_eq!(scope.selected_application.unwrap().id, "APL-2");
    }

    #[test]
    fn test_entities_respect_type_visibility() {
        let apps = vec![app("APL-1", "USA")];
        let entities = vec![
            component("A1", "APL-1"),
            RelatedApplication::new("R1", "SAP", "SAP ERP", "APL-1").into(),
        ];
        let scope = ScopeProjector::project(&apps, &entities, &FilterSelection::new());

        assert_eq!(scope.entities(&TypeVisibility::all()).len(), 2);
        let visible = scope.entities(&TypeVisibility::hiding(&[EntityType::ExternalApplication]));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id(), "A1");
    }
}
