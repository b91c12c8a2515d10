use crate::inventory::domain::{Component, ComponentType, Entity, RelatedApplication};
use std::fmt;

/// Raw component form input, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentDraft {
    pub id: String,
    pub name: String,
    pub application_id: String,
    /// Empty means "no parent"
    pub parent_id: String,
    pub component_type: String,
    pub level: i64,
}

impl ComponentDraft {
    /// Draft pre-filled from an existing record, as an edit form would be
    pub fn from_component(component: &Component) -> Self {
        Self {
            id: component.id.clone(),
            name: component.name.clone(),
            application_id: component.application_id.clone(),
            parent_id: component.parent_id.clone().unwrap_or_default(),
            component_type: component.component_type.as_str().to_string(),
            level: i64::from(component.level),
        }
    }
}

/// Raw related-application form input, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedAppDraft {
    pub id: String,
    pub code: String,
    pub name: String,
    pub application_id: String,
}

impl RelatedAppDraft {
    pub fn from_related_app(app: &RelatedApplication) -> Self {
        Self {
            id: app.id.clone(),
            code: app.code.clone(),
            name: app.name.clone(),
            application_id: app.application_id.clone(),
        }
    }
}

/// A single rejected form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field errors of one submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

/// RecordValidator - Turns form drafts into typed records
///
/// Uniqueness is not checked here; the store does that against the shared
/// id namespace at submission time.
pub struct RecordValidator;

impl RecordValidator {
    /// Validates a component draft
    ///
    /// # Arguments
    /// * `draft` - Raw form values
    /// * `entities` - Current entities, used to check the parent link
    pub fn validate_component(
        draft: &ComponentDraft,
        entities: &[Entity],
    ) -> Result<Component, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let id = Self::required(&mut errors, "id", &draft.id, "ID is required.");
        let name = Self::required(&mut errors, "name", &draft.name, "Name is required.");
        let application_id = Self::required(
            &mut errors,
            "applicationId",
            &draft.application_id,
            "Application ID is required.",
        );

        let component_type = match draft.component_type.trim() {
            "" => {
                errors.push("type", "Type is required.");
                None
            }
            raw => match raw.parse::<ComponentType>() {
                Ok(t) => Some(t),
                Err(message) => {
                    errors.push("type", message);
                    None
                }
            },
        };

        let level = match u32::try_from(draft.level) {
            Ok(level) if level >= 1 => Some(level),
            _ => {
                errors.push("level", "Level must be at least 1.");
                None
            }
        };

        let parent_id = match draft.parent_id.trim() {
            "" => None,
            parent if parent == id => {
                errors.push("parentId", "A component cannot be its own parent.");
                None
            }
            parent => {
                let valid = entities
                    .iter()
                    .any(|e| e.id() == parent && e.application_id() == application_id);
                if !valid {
                    errors.push(
                        "parentId",
                        format!(
                            "Parent '{}' is not an entity of application '{}'.",
                            parent, application_id
                        ),
                    );
                }
                Some(parent.to_string())
            }
        };

        match (component_type, level) {
            (Some(component_type), Some(level)) if errors.is_empty() => Ok(Component {
                id: id.to_string(),
                name: name.to_string(),
                application_id: application_id.to_string(),
                parent_id,
                component_type,
                level,
            }),
            _ => Err(errors),
        }
    }

    /// Validates a related-application draft; the type is always ExternalApplication
    pub fn validate_related_app(
        draft: &RelatedAppDraft,
    ) -> Result<RelatedApplication, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let id = Self::required(&mut errors, "id", &draft.id, "ID is required.");
        let code = Self::required(&mut errors, "code", &draft.code, "Code is required.");
        let name = Self::required(&mut errors, "name", &draft.name, "Name is required.");
        let application_id = Self::required(
            &mut errors,
            "applicationId",
            &draft.application_id,
            "Application ID is required.",
        );

        if errors.is_empty() {
            Ok(RelatedApplication::new(id, code, name, application_id))
        } else {
            Err(errors)
        }
    }

    fn required<'a>(
        errors: &mut ValidationErrors,
        field: &'static str,
        value: &'a str,
        message: &str,
    ) -> &'a str {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            errors.push(field, message);
        }
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ComponentDraft {
        ComponentDraft {
            id: "A5".to_string(),
            name: "Cache".to_string(),
            application_id: "APL-1".to_string(),
            parent_id: String::new(),
            component_type: "Module".to_string(),
            level: 1,
        }
    }

    fn entities() -> Vec<Entity> {
        vec![
            Component::new("A1", "Core", "APL-1", ComponentType::Component, 1).into(),
            Component::new("B1", "Reports", "APL-2", ComponentType::Component, 1).into(),
            RelatedApplication::new("R1", "SAP", "SAP ERP", "APL-1").into(),
        ]
    }

    #[test]
    fn test_valid_component_draft() {
        let component = RecordValidator::validate_component(&draft(), &entities()).unwrap();
        assert_eq!(component.id, "A5");
        assert_eq!(component.component_type, ComponentType::Module);
        assert_eq!(component.parent_id, None);
    }

    #[test]
    fn test_component_fields_are_trimmed() {
        let mut d = draft();
        d.id = "  A5 ".to_string();
        d.parent_id = " A1 ".to_string();
        let component = RecordValidator::validate_component(&d, &entities()).unwrap();
        assert_eq!(component.id, "A5");
        assert_eq!(component.parent_id.as_deref(), Some("A1"));
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let d = ComponentDraft {
            level: 0,
            ..ComponentDraft::default()
        };
        let errors = RecordValidator::validate_component(&d, &[]).unwrap_err();
        for field in ["id", "name", "applicationId", "type", "level"] {
            assert!(errors.has_field(field), "missing error for {}", field);
        }
    }

    #[test]
    fn test_negative_level_rejected() {
        let mut d = draft();
        d.level = -3;
        let errors = RecordValidator::validate_component(&d, &entities()).unwrap_err();
        assert!(errors.has_field("level"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let mut d = draft();
        d.component_type = "Database".to_string();
        let errors = RecordValidator::validate_component(&d, &entities()).unwrap_err();
        assert!(errors.to_string().contains("Invalid component type"));
    }

    #[test]
    fn test_related_app_can_be_parent() {
        let mut d = draft();
        d.parent_id = "R1".to_string();
        let component = RecordValidator::validate_component(&d, &entities()).unwrap();
        assert_eq!(component.parent_id.as_deref(), Some("R1"));
    }

    #[test]
    fn test_parent_from_other_application_rejected() {
        let mut d = draft();
        d.parent_id = "B1".to_string();
        let errors = RecordValidator::validate_component(&d, &entities()).unwrap_err();
        assert!(errors.has_field("parentId"));
    }

    #[test]
    fn test_self_parent_rejected() {
        let mut d = draft();
        d.parent_id = "A5".to_string();
        let errors = RecordValidator::validate_component(&d, &entities()).unwrap_err();
        assert!(errors.to_string().contains("own parent"));
    }

    #[test]
    fn test_related_app_draft() {
        let d = RelatedAppDraft {
            id: "R9".to_string(),
            code: "CRM".to_string(),
            name: "Salesforce".to_string(),
            application_id: "APL-2".to_string(),
        };
        let app = RecordValidator::validate_related_app(&d).unwrap();
        assert_eq!(app.code, "CRM");

        let errors = RecordValidator::validate_related_app(&RelatedAppDraft::default()).unwrap_err();
        assert_eq!(errors.errors().len(), 4);
    }

    #[test]
    fn test_draft_round_trips_existing_component() {
        let component = Component::new("A2", "API", "APL-1", ComponentType::Service, 2)
            .with_parent("A1");
        let d = ComponentDraft::from_component(&component);
        let validated = RecordValidator::validate_component(&d, &entities()).unwrap();
        assert_eq!(validated, component);
    }
}
