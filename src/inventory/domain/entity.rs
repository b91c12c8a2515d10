use super::{Component, ComponentType, RelatedApplication};
use std::fmt;
use std::str::FromStr;

/// Which of the two node kinds an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Component,
    RelatedApplication,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Component => f.write_str("component"),
            EntityKind::RelatedApplication => f.write_str("related application"),
        }
    }
}

/// Node type as shown in listings and used by the type visibility toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityType {
    Component,
    Service,
    Module,
    Class,
    ExternalApplication,
}

impl EntityType {
    pub const ALL: [EntityType; 5] = [
        EntityType::Component,
        EntityType::Service,
        EntityType::Module,
        EntityType::Class,
        EntityType::ExternalApplication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Component => "Component",
            EntityType::Service => "Service",
            EntityType::Module => "Module",
            EntityType::Class => "Class",
            EntityType::ExternalApplication => "ExternalApplication",
        }
    }
}

impl From<ComponentType> for EntityType {
    fn from(value: ComponentType) -> Self {
        match value {
            ComponentType::Component => EntityType::Component,
            ComponentType::Service => EntityType::Service,
            ComponentType::Module => EntityType::Module,
            ComponentType::Class => EntityType::Class,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(component_type) = s.parse::<ComponentType>() {
            return Ok(component_type.into());
        }
        match s.trim() {
            "ExternalApplication" | "external" | "AplicacionExterna" => {
                Ok(EntityType::ExternalApplication)
            }
            other => Err(format!(
                "Invalid entity type: {}. Expected one of Component, Service, Module, Class, ExternalApplication",
                other
            )),
        }
    }
}

/// A diagram node: one id namespace over both entity kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Component(Component),
    RelatedApplication(RelatedApplication),
}

impl Entity {
    pub fn id(&self) -> &str {
        match self {
            Entity::Component(c) => &c.id,
            Entity::RelatedApplication(r) => &r.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::Component(c) => &c.name,
            Entity::RelatedApplication(r) => &r.name,
        }
    }

    pub fn application_id(&self) -> &str {
        match self {
            Entity::Component(c) => &c.application_id,
            Entity::RelatedApplication(r) => &r.application_id,
        }
    }

    /// Related applications are always roots
    pub fn parent_id(&self) -> Option<&str> {
        match self {
            Entity::Component(c) => c.parent_id.as_deref(),
            Entity::RelatedApplication(_) => None,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Component(_) => EntityKind::Component,
            Entity::RelatedApplication(_) => EntityKind::RelatedApplication,
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Entity::Component(c) => c.component_type.into(),
            Entity::RelatedApplication(_) => EntityType::ExternalApplication,
        }
    }

    /// Sort key for diagrams; related applications rank as level 0
    pub fn level(&self) -> u32 {
        match self {
            Entity::Component(c) => c.level,
            Entity::RelatedApplication(_) => 0,
        }
    }

    pub fn as_component(&self) -> Option<&Component> {
        match self {
            Entity::Component(c) => Some(c),
            Entity::RelatedApplication(_) => None,
        }
    }

    pub fn as_related_app(&self) -> Option<&RelatedApplication> {
        match self {
            Entity::Component(_) => None,
            Entity::RelatedApplication(r) => Some(r),
        }
    }

    /// Clears the parent link if it points at `parent_id`; returns whether it did
    pub fn detach_from(&mut self, parent_id: &str) -> bool {
        match self {
            Entity::Component(c) if c.parent_id.as_deref() == Some(parent_id) => {
                c.parent_id = None;
                true
            }
            _ => false,
        }
    }
}

impl From<Component> for Entity {
    fn from(value: Component) -> Self {
        Entity::Component(value)
    }
}

impl From<RelatedApplication> for Entity {
    fn from(value: RelatedApplication) -> Self {
        Entity::RelatedApplication(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_accessors() {
        let component: Entity = Component::new("A2", "API", "APL-1", ComponentType::Service, 2)
            .with_parent("A1")
            .into();
        assert_eq!(component.id(), "A2");
        assert_eq!(component.parent_id(), Some("A1"));
        assert_eq!(component.kind(), EntityKind::Component);
        assert_eq!(component.entity_type(), EntityType::Service);
        assert_eq!(component.level(), 2);

        let related: Entity = RelatedApplication::new("R1", "SAP", "SAP ERP", "APL-1").into();
        assert_eq!(related.parent_id(), None);
        assert_eq!(related.entity_type(), EntityType::ExternalApplication);
        assert_eq!(related.level(), 0);
    }

    #[test]
    fn test_detach_from_only_matching_parent() {
        let mut child: Entity = Component::new("A2", "API", "APL-1", ComponentType::Service, 2)
            .with_parent("A1")
            .into();
        assert!(!child.detach_from("B1"));
        assert_eq!(child.parent_id(), Some("A1"));
        assert!(child.detach_from("A1"));
        assert_eq!(child.parent_id(), None);
    }

    #[test]
    fn test_entity_type_from_str() {
        assert_eq!(
            "ExternalApplication".parse::<EntityType>().unwrap(),
            EntityType::ExternalApplication
        );
        assert_eq!("class".parse::<EntityType>().unwrap(), EntityType::Class);
        assert!("Widget".parse::<EntityType>().is_err());
    }
}
