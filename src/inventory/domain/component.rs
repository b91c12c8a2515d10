use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of an internal building block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    #[serde(alias = "Componente")]
    Component,
    #[serde(alias = "Servicio")]
    Service,
    #[serde(alias = "Módulo")]
    Module,
    #[serde(alias = "Clase")]
    Class,
}

impl ComponentType {
    pub const ALL: [ComponentType; 4] = [
        ComponentType::Component,
        ComponentType::Service,
        ComponentType::Module,
        ComponentType::Class,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Component => "Component",
            ComponentType::Service => "Service",
            ComponentType::Module => "Module",
            ComponentType::Class => "Class",
        }
    }

    fn legacy_name(&self) -> &'static str {
        match self {
            ComponentType::Component => "Componente",
            ComponentType::Service => "Servicio",
            ComponentType::Module => "Módulo",
            ComponentType::Class => "Clase",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ComponentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s) || t.legacy_name() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid component type: {}. Expected one of Component, Service, Module, Class",
                    s
                )
            })
    }
}

/// A component owned by an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "aplicacionId")]
    pub application_id: String,
    #[serde(default, alias = "padreId")]
    pub parent_id: Option<String>,
    #[serde(rename = "type", alias = "tipo")]
    pub component_type: ComponentType,
    /// Hierarchy depth, 1 for roots; not checked against the parent's level
    #[serde(alias = "nivel")]
    pub level: u32,
}

impl Component {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        application_id: impl Into<String>,
        component_type: ComponentType,
        level: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            application_id: application_id.into(),
            parent_id: None,
            component_type,
            level,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_type_from_str() {
        assert_eq!(
            "service".parse::<ComponentType>().unwrap(),
            ComponentType::Service
        );
        assert_eq!(
            "Módulo".parse::<ComponentType>().unwrap(),
            ComponentType::Module
        );
        assert!("Database".parse::<ComponentType>().is_err());
    }

    #[test]
    fn test_component_serializes_type_field() {
        let component = Component::new("A2", "Products API", "APL-1", ComponentType::Service, 2)
            .with_parent("A1");
        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["type"], "Service");
        assert_eq!(json["parentId"], "A1");
        assert_eq!(json["applicationId"], "APL-1");
    }

    #[test]
    fn test_component_reads_first_version_records() {
        let json = r#"{ "id": "A1", "nombre": "Microservicio Core", "aplicacionId": "APL-1",
                        "padreId": null, "tipo": "Componente", "nivel": 1 }"#;
        let component: Component = serde_json::from_str(json).unwrap();
        assert_eq!(component.name, "Microservicio Core");
        assert_eq!(component.component_type, ComponentType::Component);
        assert_eq!(component.parent_id, None);
        assert_eq!(component.level, 1);
    }
}
