use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-level business domain classification of an application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    #[serde(alias = "nivel1")]
    pub level1: String,
    #[serde(alias = "nivel2")]
    pub level2: String,
    #[serde(alias = "nivel3")]
    pub level3: String,
}

impl Domain {
    pub fn new(
        level1: impl Into<String>,
        level2: impl Into<String>,
        level3: impl Into<String>,
    ) -> Self {
        Self {
            level1: level1.into(),
            level2: level2.into(),
            level3: level3.into(),
        }
    }
}

/// Portfolio decision recorded against an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    Keep,
    Update,
    Remove,
    Investigate,
}

impl Disposition {
    pub const ALL: [Disposition; 4] = [
        Disposition::Keep,
        Disposition::Update,
        Disposition::Remove,
        Disposition::Investigate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Keep => "Keep",
            Disposition::Update => "Update",
            Disposition::Remove => "Remove",
            Disposition::Investigate => "Investigate",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Disposition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Disposition::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Invalid disposition: {}. Expected one of Keep, Update, Remove, Investigate",
                    s
                )
            })
    }
}

/// An application of the inventory; owner of components and related apps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "descripcion")]
    pub description: String,
    #[serde(alias = "pais")]
    pub country: String,
    #[serde(alias = "segmento")]
    pub segment: String,
    #[serde(alias = "dominio")]
    pub domain: Domain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_issues: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposition: Option<Disposition>,
    /// Peer applications; recorded on one side only
    #[serde(default, alias = "relaciones")]
    pub related_application_ids: Vec<String>,
}

impl Application {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        country: impl Into<String>,
        segment: impl Into<String>,
        domain: Domain,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            country: country.into(),
            segment: segment.into(),
            domain,
            currency_issues: None,
            disposition: None,
            related_application_ids: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = Some(disposition);
        self
    }

    pub fn with_currency_issues(mut self, currency_issues: bool) -> Self {
        self.currency_issues = Some(currency_issues);
        self
    }

    pub fn with_related(mut self, ids: &[&str]) -> Self {
        self.related_application_ids = ids.iter().map(|id| id.to_string()).collect();
        self
    }
}
