use crate::application::read_models::DiagramModel;
use crate::i18n::Translator;

/// DiagramFormatter port for producing diagram source text
///
/// Implementations are pure: the same model and locale always produce
/// byte-identical text.
pub trait DiagramFormatter {
    /// Serializes the model into diagram source text
    ///
    /// # Arguments
    /// * `model` - Entities and applications in view
    /// * `translator` - Supplies the localized title and comment strings
    ///
    /// # Returns
    /// The complete diagram document, including its start and end markers
    fn format(&self, model: &DiagramModel, translator: &Translator) -> String;
}
