/// Which diagram to produce from the current scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagramKind {
    /// Component hierarchy of the applications in view
    #[default]
    Entities,
    /// Peer relations between the applications in view
    Relations,
}

impl std::str::FromStr for DiagramKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entities" | "components" => Ok(DiagramKind::Entities),
            "relations" | "relationships" => Ok(DiagramKind::Relations),
            _ => Err(format!(
                "Invalid diagram kind: {}. Please specify 'entities' or 'relations'",
                s
            )),
        }
    }
}

impl std::fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagramKind::Entities => write!(f, "entities"),
            DiagramKind::Relations => write!(f, "relations"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_diagram_kind_from_str() {
        assert_eq!(DiagramKind::from_str("ENTITIES").unwrap(), DiagramKind::Entities);
        assert_eq!(DiagramKind::from_str("relations").unwrap(), DiagramKind::Relations);
        assert!(DiagramKind::from_str("sequence").is_err());
    }

    #[test]
    fn test_diagram_kind_display() {
        assert_eq!(DiagramKind::Relations.to_string(), "relations");
    }
}
