//! Localization: a closed message catalog for English and Spanish
//!
//! Messages are addressed by [`MessageKey`]. Templates use `{name}`
//! placeholders filled by [`Translator::format`]. String keys coming from
//! data (entity type names) go through [`Translator::lookup`], which returns
//! the key itself when the catalog has no entry for it.

mod catalog;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(format!("Invalid locale: {}. Expected one of en, es", other)),
        }
    }
}

macro_rules! message_keys {
    ($($variant:ident => $key:literal),+ $(,)?) => {
        /// Every message the interface can show
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $($variant),+
        }

        impl MessageKey {
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant),+];

            /// Catalog key as used in the stored message tables
            pub fn as_key(self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $key),+
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(MessageKey::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

message_keys! {
    AppTitle => "appTitle",
    // diagram text
    ArchitectureFor => "architectureFor",
    Relationships => "relationships",
    NoComponentsToDisplayFor => "noComponentsToDisplayFor",
    CurrentSelection => "currentSelection",
    DiagramBasedOnFilters => "diagramBasedOnFilters",
    MultipleApplications => "multipleApplications",
    AggregateOfApplications => "aggregateOfApplications",
    AppRelationships => "appRelationships",
    NoAppsForFilters => "noAppsForFilters",
    // listings
    CurrentView => "currentView",
    Overview => "overview",
    DetailsFor => "detailsFor",
    NoApplicationsMatch => "noApplicationsMatch",
    MultipleApplicationsMatch => "multipleApplicationsMatch",
    NoComponentsForFilters => "noComponentsForFilters",
    NoRelatedApps => "noRelatedApps",
    ComponentManagerTitle => "componentManagerTitle",
    RelatedAppManagerTitle => "relatedAppManagerTitle",
    FilterByType => "filterByType",
    Country => "country",
    Segment => "segment",
    Domain1 => "domain1",
    Domain2 => "domain2",
    Domain3 => "domain3",
    Disposition => "disposition",
    CurrencyIssues => "currencyIssues",
    ApplicationId => "applicationId",
    Id => "id",
    Name => "name",
    Code => "code",
    Type => "type",
    Level => "level",
    Parent => "parent",
    NoneLabel => "none",
    // notifications
    AddComponentToastTitle => "addComponentToastTitle",
    AddComponentToastDescription => "addComponentToastDescription",
    UpdateComponentToastTitle => "updateComponentToastTitle",
    UpdateComponentToastDescription => "updateComponentToastDescription",
    DeleteComponentToastTitle => "deleteComponentToastTitle",
    DeleteComponentToastDescription => "deleteComponentToastDescription",
    AddRelatedAppToastTitle => "addRelatedAppToastTitle",
    AddRelatedAppToastDescription => "addRelatedAppToastDescription",
    UpdateRelatedAppToastTitle => "updateRelatedAppToastTitle",
    UpdateRelatedAppToastDescription => "updateRelatedAppToastDescription",
    DeleteRelatedAppToastTitle => "deleteRelatedAppToastTitle",
    DeleteRelatedAppToastDescription => "deleteRelatedAppToastDescription",
    DuplicateIdErrorToastTitle => "duplicateIdErrorToastTitle",
    DuplicateIdErrorToastDescription => "duplicateIdErrorToastDescription",
    SelectApplicationErrorTitle => "selectApplicationErrorTitle",
    SelectApplicationErrorDescription => "selectApplicationErrorDescription",
    ValidationErrorTitle => "validationErrorTitle",
    UnknownEntityError => "unknownEntityError",
    UnknownApplicationError => "unknownApplicationError",
    KindMismatchError => "kindMismatchError",
    PersistenceErrorTitle => "persistenceErrorTitle",
    PersistenceErrorDescription => "persistenceErrorDescription",
    RenderingDiagram => "renderingDiagram",
    RenderErrorTitle => "renderErrorTitle",
    RenderErrorDescription => "renderErrorDescription",
    LocaleChangedToastTitle => "localeChangedToastTitle",
    // entity type labels, keyed by the type name itself
    TypeComponent => "Component",
    TypeService => "Service",
    TypeModule => "Module",
    TypeClass => "Class",
    TypeExternalApplication => "ExternalApplication",
}

/// Resolves message keys against one locale's catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Template for `key` in the active locale, placeholders untouched
    pub fn t(&self, key: MessageKey) -> &'static str {
        catalog::template(self.locale, key)
    }

    /// Template for `key` with every `{name}` placeholder replaced
    ///
    /// Placeholders without a matching argument are left as written.
    pub fn format(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.t(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }

    /// Looks up a raw string key; unknown keys translate to themselves
    pub fn lookup<'a>(&self, key: &'a str) -> &'a str {
        match MessageKey::from_key(key) {
            Some(known) => self.t(known),
            None => key,
        }
    }
}
