use super::escape_quotes;
use crate::application::read_models::DiagramModel;
use crate::i18n::{MessageKey, Translator};
use crate::ports::outbound::DiagramFormatter;
use std::collections::HashSet;

/// PlantUmlRelationFormatter adapter for the application relation diagram
///
/// A relation is recorded on either side (or both); each unordered pair is
/// drawn once, as written by the first application that records it.
pub struct PlantUmlRelationFormatter;

impl PlantUmlRelationFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlantUmlRelationFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramFormatter for PlantUmlRelationFormatter {
    fn format(&self, model: &DiagramModel, translator: &Translator) -> String {
        if model.applications.is_empty() {
            return format!(
                "@startuml\n' {}\n@enduml",
                translator.t(MessageKey::NoAppsForFilters)
            );
        }

        let mut output = String::from("@startuml AppRelations\n!theme plain\n");
        output.push_str(&format!(
            "title {}\n\n",
            translator.t(MessageKey::AppRelationships)
        ));
        output.push_str(
            "skinparam rectangle {\n  RoundCorner 20\n  BackgroundColor SkyBlue\n  BorderColor DarkBlue\n}\n",
        );

        for app in &model.applications {
            output.push_str(&format!(
                "rectangle \"[{}]\\n{}\" as {}\n",
                app.id,
                escape_quotes(&app.name),
                app.id
            ));
        }
        output.push('\n');

        let in_view: HashSet<&str> = model.applications.iter().map(|a| a.id.as_str()).collect();
        let mut drawn: HashSet<(&str, &str)> = HashSet::new();
        for app in &model.applications {
            for target in &app.related_application_ids {
                if !in_view.contains(target.as_str()) {
                    continue;
                }
                let pair = if app.id.as_str() <= target.as_str() {
                    (app.id.as_str(), target.as_str())
                } else {
                    (target.as_str(), app.id.as_str())
                };
                if drawn.insert(pair) {
                    output.push_str(&format!("{} -- {}\n", app.id, target));
                }
            }
        }

        output.push_str("@enduml");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::inventory::domain::{Application, Domain};

    fn app(id: &str, related: &[&str]) -> Application {
        Application::new(id, format!("App {}", id), "Global", "Retail", Domain::new("a", "b", "c"))
            .with_related(related)
    }

    fn format(apps: Vec<Application>) -> String {
        let model = DiagramModel::new(vec![], None, apps);
        PlantUmlRelationFormatter::new().format(&model, &Translator::new(Locale::En))
    }

    #[test]
    fn test_one_sided_relation_yields_one_edge() {
        let text = format(vec![app("APL-1", &["APL-2"]), app("APL-2", &[])]);
        assert_eq!(text.matches(" -- ").count(), 1);
        assert!(text.contains("APL-1 -- APL-2\n"));
    }

    #[test]
    fn test_mutual_relation_is_deduplicated() {
        let text = format(vec![app("APL-2", &["APL-1"]), app("APL-1", &["APL-2"])]);
        assert_eq!(text.matches(" -- ").count(), 1);
        assert!(text.contains("APL-2 -- APL-1\n"));
    }

    #[test]
    fn test_relation_outside_view_is_skipped() {
        let text = format(vec![app("APL-1", &["APL-9"])]);
        assert!(!text.contains(" -- "));
        assert!(text.contains("rectangle \"[APL-1]\\nApp APL-1\" as APL-1\n"));
    }

    #[test]
    fn test_document_layout() {
        let text = format(vec![app("APL-1", &["APL-2"]), app("APL-2", &[])]);
        let expected = "@startuml AppRelations
!theme plain
title Application Relationships

skinparam rectangle {
  RoundCorner 20
  BackgroundColor SkyBlue
  BorderColor DarkBlue
}
rectangle \"[APL-1]\\nApp APL-1\" as APL-1
rectangle \"[APL-2]\\nApp APL-2\" as APL-2

APL-1 -- APL-2
@enduml";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_view_yields_wrapper_only() {
        assert_eq!(
            format(vec![]),
            "@startuml\n' No applications match the current filters\n@enduml"
        );
    }
}
