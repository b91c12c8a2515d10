/// Formatter adapters for the PlantUML diagrams and the textual listings
mod listing_formatter;
mod plantuml_entity_formatter;
mod plantuml_relation_formatter;

pub use listing_formatter::ListingFormatter;
pub use plantuml_entity_formatter::PlantUmlEntityFormatter;
pub use plantuml_relation_formatter::PlantUmlRelationFormatter;

/// PlantUML labels cannot carry a double quote; it becomes two single quotes
pub(crate) fn escape_quotes(text: &str) -> String {
    text.replace('"', "''")
}
