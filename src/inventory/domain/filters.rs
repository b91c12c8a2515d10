use super::{Application, EntityType};
use std::collections::BTreeSet;
use std::fmt;

/// Number of facets in the cascade
pub const FACET_COUNT: usize = 8;

/// Literal used for the "no restriction" pseudo-value
pub const ALL_LITERAL: &str = "all";

/// One filterable dimension, declared in cascade order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    Country,
    Segment,
    Domain1,
    Domain2,
    Domain3,
    Disposition,
    CurrencyIssues,
    ApplicationId,
}

impl Facet {
    pub const ALL: [Facet; FACET_COUNT] = [
        Facet::Country,
        Facet::Segment,
        Facet::Domain1,
        Facet::Domain2,
        Facet::Domain3,
        Facet::Disposition,
        Facet::CurrencyIssues,
        Facet::ApplicationId,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The first facet lists every value of the full dataset and never collapses
    pub fn is_root(self) -> bool {
        self == Facet::Country
    }

    pub fn key(self) -> &'static str {
        match self {
            Facet::Country => "country",
            Facet::Segment => "segment",
            Facet::Domain1 => "domain1",
            Facet::Domain2 => "domain2",
            Facet::Domain3 => "domain3",
            Facet::Disposition => "disposition",
            Facet::CurrencyIssues => "currencyIssues",
            Facet::ApplicationId => "applicationId",
        }
    }

    /// Value of this facet for `app`, `None` when the optional attribute is unset
    pub fn value_of(self, app: &Application) -> Option<String> {
        match self {
            Facet::Country => Some(app.country.clone()),
            Facet::Segment => Some(app.segment.clone()),
            Facet::Domain1 => Some(app.domain.level1.clone()),
            Facet::Domain2 => Some(app.domain.level2.clone()),
            Facet::Domain3 => Some(app.domain.level3.clone()),
            Facet::Disposition => app.disposition.map(|d| d.as_str().to_string()),
            Facet::CurrencyIssues => app
                .currency_issues
                .map(|flag| if flag { "yes" } else { "no" }.to_string()),
            Facet::ApplicationId => Some(app.id.clone()),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A facet selection: no restriction, or one exact value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FilterValue {
    #[default]
    All,
    Value(String),
}

impl FilterValue {
    /// Parses user input; the literal `all` means no restriction
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_LITERAL {
            FilterValue::All
        } else {
            FilterValue::Value(raw.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            FilterValue::All => None,
            FilterValue::Value(v) => Some(v),
        }
    }

    pub fn is(&self, value: &str) -> bool {
        self.as_value() == Some(value)
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::All => f.write_str(ALL_LITERAL),
            FilterValue::Value(v) => f.write_str(v),
        }
    }
}

/// Current selection for every facet
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    values: [FilterValue; FACET_COUNT],
}

impl FilterSelection {
    /// Selection with every facet set to "all"
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, facet: Facet) -> &FilterValue {
        &self.values[facet.index()]
    }

    /// Sets `facet` and resets every facet after it to "all"
    pub fn select(&self, facet: Facet, value: FilterValue) -> Self {
        let mut next = self.clone();
        next.values[facet.index()] = value;
        for downstream in &mut next.values[facet.index() + 1..] {
            *downstream = FilterValue::All;
        }
        next
    }

    /// Explicitly chosen application, if any
    pub fn application_id(&self) -> Option<&str> {
        self.get(Facet::ApplicationId).as_value()
    }

    /// True when `app` passes every facet in `facets` that is not "all"
    pub fn admits(&self, app: &Application, facets: &[Facet]) -> bool {
        facets.iter().all(|&facet| match self.get(facet) {
            FilterValue::All => true,
            FilterValue::Value(wanted) => facet.value_of(app).as_deref() == Some(wanted.as_str()),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Facet, &FilterValue)> {
        Facet::ALL.into_iter().zip(self.values.iter())
    }
}

/// Option list exposed for each facet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOptions {
    options: [Vec<FilterValue>; FACET_COUNT],
}

impl FacetOptions {
    pub fn new(options: [Vec<FilterValue>; FACET_COUNT]) -> Self {
        Self { options }
    }

    pub fn get(&self, facet: Facet) -> &[FilterValue] {
        &self.options[facet.index()]
    }

    /// The single concrete value a facet collapsed to, if it did
    pub fn collapsed(&self, facet: Facet) -> Option<&str> {
        match self.get(facet) {
            [only] => only.as_value(),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Facet, &[FilterValue])> {
        Facet::ALL
            .into_iter()
            .zip(self.options.iter().map(|values| values.as_slice()))
    }
}

/// Which entity types reach the entity diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeVisibility {
    visible: BTreeSet<EntityType>,
}

impl TypeVisibility {
    pub fn all() -> Self {
        Self {
            visible: EntityType::ALL.into_iter().collect(),
        }
    }

    pub fn hiding(types: &[EntityType]) -> Self {
        let mut visibility = Self::all();
        for entity_type in types {
            visibility.visible.remove(entity_type);
        }
        visibility
    }

    pub fn toggle(&mut self, entity_type: EntityType) {
        if !self.visible.remove(&entity_type) {
            self.visible.insert(entity_type);
        }
    }

    pub fn is_visible(&self, entity_type: EntityType) -> bool {
        self.visible.contains(&entity_type)
    }
}

impl Default for TypeVisibility {
    fn default() -> Self {
        Self::all()
    }
}
