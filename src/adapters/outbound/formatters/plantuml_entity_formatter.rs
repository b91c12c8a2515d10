use super::escape_quotes;
use crate::application::read_models::DiagramModel;
use crate::i18n::{MessageKey, Translator};
use crate::inventory::domain::Entity;
use crate::ports::outbound::DiagramFormatter;
use std::collections::HashSet;

const STYLE: &str = "skinparam componentStyle uml2
skinparam shadowing false
skinparam rectangle {
  RoundCorner 20
  BackgroundColor LightBlue
}
skinparam node {
  BackgroundColor LightGray
}
";

/// PlantUmlEntityFormatter adapter for the component hierarchy diagram
///
/// Nodes are ordered by ascending level (related applications first, as
/// level 0) with a stable sort. Edges follow store order and are only drawn
/// when the parent is itself in the diagram; dangling parents are skipped.
pub struct PlantUmlEntityFormatter;

impl PlantUmlEntityFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Title subject and caption text
    fn heading(model: &DiagramModel, t: &Translator) -> (String, String) {
        match &model.selected_application {
            Some(app) => (app.name.clone(), app.description.clone()),
            None if model.applications.len() > 1 => (
                t.t(MessageKey::MultipleApplications).to_string(),
                t.format(
                    MessageKey::AggregateOfApplications,
                    &[("count", model.applications.len().to_string().as_str())],
                ),
            ),
            None => (
                t.t(MessageKey::CurrentSelection).to_string(),
                t.t(MessageKey::DiagramBasedOnFilters).to_string(),
            ),
        }
    }

    fn node(entity: &Entity) -> String {
        match entity {
            Entity::RelatedApplication(r) => format!(
                "rectangle \"[{}]\\n{}\" as {} #LightGray\n",
                r.code,
                escape_quotes(&r.name),
                r.id
            ),
            Entity::Component(c) => format!(
                "[{}] as \"{}\\n<size:10>[{}] | APM: {}</size>\"\n",
                c.id,
                escape_quotes(&c.name),
                c.component_type,
                c.id
            ),
        }
    }
}

impl Default for PlantUmlEntityFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramFormatter for PlantUmlEntityFormatter {
    fn format(&self, model: &DiagramModel, translator: &Translator) -> String {
        let (subject, caption) = Self::heading(model, translator);

        if model.entities.is_empty() {
            return format!(
                "@startuml\n' {}\n@enduml",
                translator.format(MessageKey::NoComponentsToDisplayFor, &[("appName", subject.as_str())])
            );
        }

        let mut output = String::from("@startuml\n!theme plain\n");
        output.push_str(&format!(
            "title {} {}\n",
            translator.t(MessageKey::ArchitectureFor),
            subject
        ));
        if !caption.is_empty() {
            output.push_str(&format!("caption \"{}\"\n\n", escape_quotes(&caption)));
        }
        output.push_str(STYLE);
        output.push('\n');

        let mut ordered: Vec<&Entity> = model.entities.iter().collect();
        ordered.sort_by_key(|entity| entity.level());
        for entity in ordered {
            output.push_str(&Self::node(entity));
        }
        output.push('\n');

        output.push_str(&format!("' {}\n", translator.t(MessageKey::Relationships)));
        let ids: HashSet<&str> = model.entities.iter().map(Entity::id).collect();
        for entity in &model.entities {
            if let Some(parent) = entity.parent_id().filter(|p| ids.contains(p)) {
                output.push_str(&format!("{} <|-- {}\n", parent, entity.id()));
            }
        }

        output.push_str("@enduml");
        output
    }
}
