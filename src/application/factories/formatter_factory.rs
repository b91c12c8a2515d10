use crate::adapters::outbound::formatters::{PlantUmlEntityFormatter, PlantUmlRelationFormatter};
use crate::application::dto::DiagramKind;
use crate::ports::outbound::DiagramFormatter;

/// Factory for creating diagram formatters
///
/// This factory encapsulates the creation logic for the formatter
/// implementations. It belongs in the application layer as it selects
/// infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the requested diagram kind
    ///
    /// # Examples
    /// ```
    /// use archviz::application::dto::DiagramKind;
    /// use archviz::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(DiagramKind::Relations);
    /// ```
    pub fn create(kind: DiagramKind) -> Box<dyn DiagramFormatter> {
        match kind {
            DiagramKind::Entities => Box::new(PlantUmlEntityFormatter::new()),
            DiagramKind::Relations => Box::new(PlantUmlRelationFormatter::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::DiagramModel;
    use crate::i18n::{Locale, Translator};

    #[test]
    fn test_each_kind_produces_its_empty_diagram() {
        let translator = Translator::new(Locale::En);
        let empty = DiagramModel::default();

        let entities = FormatterFactory::create(DiagramKind::Entities).format(&empty, &translator);
        assert!(entities.contains("No items to display for"));

        let relations = FormatterFactory::create(DiagramKind::Relations).format(&empty, &translator);
        assert!(relations.contains("No applications match"));
    }
}
