use serde::{Deserialize, Serialize};

/// Type marker persisted with every related application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelatedAppType {
    #[default]
    #[serde(alias = "AplicacionExterna")]
    ExternalApplication,
}

impl RelatedAppType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelatedAppType::ExternalApplication => "ExternalApplication",
        }
    }
}

/// Placeholder for an external application an application talks to
///
/// Shares the id namespace with [`super::Component`] and can be the parent
/// of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedApplication {
    pub id: String,
    #[serde(alias = "codigo")]
    pub code: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(rename = "type", default, alias = "tipo")]
    pub app_type: RelatedAppType,
    #[serde(alias = "aplicacionId")]
    pub application_id: String,
}

impl RelatedApplication {
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
        application_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            app_type: RelatedAppType::ExternalApplication,
            application_id: application_id.into(),
        }
    }
}
