use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// `File` when an output path was given, `Stdout` otherwise
    pub fn from_output(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use archviz::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presenter_type_from_output() {
        assert_eq!(PresenterType::from_output(None), PresenterType::Stdout);
        assert_eq!(
            PresenterType::from_output(Some(PathBuf::from("out.puml"))),
            PresenterType::File(PathBuf::from("out.puml"))
        );
    }

    #[test]
    fn test_create_file_presenter_writes_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagram.puml");
        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("@startuml\n@enduml").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "@startuml\n@enduml");
    }
}
