use crate::i18n::{MessageKey, Translator};
use crate::inventory::domain::{Facet, FacetOptions, FilterSelection};
use crate::inventory::services::Scope;

/// ListingFormatter adapter for the textual (Markdown) views
///
/// Renders the facet option lists and the scoped inventory as Markdown
/// tables, with every label taken from the active locale.
pub struct ListingFormatter<'a> {
    translator: &'a Translator,
}

impl<'a> ListingFormatter<'a> {
    pub fn new(translator: &'a Translator) -> Self {
        Self { translator }
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn label(&self, facet: Facet) -> &'static str {
        let key = match facet {
            Facet::Country => MessageKey::Country,
            Facet::Segment => MessageKey::Segment,
            Facet::Domain1 => MessageKey::Domain1,
            Facet::Domain2 => MessageKey::Domain2,
            Facet::Domain3 => MessageKey::Domain3,
            Facet::Disposition => MessageKey::Disposition,
            Facet::CurrencyIssues => MessageKey::CurrencyIssues,
            Facet::ApplicationId => MessageKey::ApplicationId,
        };
        self.translator.t(key)
    }

    /// One row per facet: flag name, selected value, available options
    pub fn format_options(&self, filters: &FilterSelection, options: &FacetOptions) -> String {
        let mut output = String::from("| Facet | Flag | Selected | Options |\n");
        output.push_str("|-------|------|----------|---------|\n");

        for (facet, values) in options.iter() {
            let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            output.push_str(&format!(
                "| {} | --{} | {} | {} |\n",
                self.label(facet),
                Self::flag(facet),
                Self::cell(&filters.get(facet).to_string()),
                Self::cell(&values.join(", "))
            ));
        }
        output
    }

    /// CLI flag spelling of a facet
    fn flag(facet: Facet) -> &'static str {
        match facet {
            Facet::Country => "country",
            Facet::Segment => "segment",
            Facet::Domain1 => "domain1",
            Facet::Domain2 => "domain2",
            Facet::Domain3 => "domain3",
            Facet::Disposition => "disposition",
            Facet::CurrencyIssues => "currency-issues",
            Facet::ApplicationId => "app",
        }
    }

    /// Applications, components and related applications in scope
    pub fn format_scope(&self, scope: &Scope) -> String {
        let t = self.translator;
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", t.t(MessageKey::Overview)));
        match (&scope.selected_application, scope.applications.len()) {
            (Some(app), _) => output.push_str(&format!(
                "{} **{}** ({})\n\n{}\n\n",
                t.t(MessageKey::DetailsFor),
                Self::cell(&app.name),
                app.id,
                app.description
            )),
            (None, 0) => output.push_str(&format!("{}\n\n", t.t(MessageKey::NoApplicationsMatch))),
            (None, count) => output.push_str(&format!(
                "{}\n\n",
                t.format(
                    MessageKey::MultipleApplicationsMatch,
                    &[("count", count.to_string().as_str())]
                )
            )),
        }

        if !scope.applications.is_empty() {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                t.t(MessageKey::Id),
                t.t(MessageKey::Name),
                t.t(MessageKey::Country),
                t.t(MessageKey::Segment),
                t.t(MessageKey::Disposition)
            ));
            output.push_str("|----|----|----|----|----|\n");
            for app in &scope.applications {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    app.id,
                    Self::cell(&app.name),
                    Self::cell(&app.country),
                    Self::cell(&app.segment),
                    app.disposition.map(|d| d.as_str()).unwrap_or("-")
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!("## {}\n\n", t.t(MessageKey::ComponentManagerTitle)));
        if scope.components.is_empty() {
            output.push_str(&format!("{}\n\n", t.t(MessageKey::NoComponentsForFilters)));
        } else {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                t.t(MessageKey::Id),
                t.t(MessageKey::Name),
                t.t(MessageKey::Type),
                t.t(MessageKey::Level),
                t.t(MessageKey::Parent),
                t.t(MessageKey::ApplicationId)
            ));
            output.push_str("|----|----|----|----|----|----|\n");
            for c in &scope.components {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} |\n",
                    c.id,
                    Self::cell(&c.name),
                    t.lookup(c.component_type.as_str()),
                    c.level,
                    c.parent_id.as_deref().unwrap_or(t.t(MessageKey::NoneLabel)),
                    c.application_id
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!("## {}\n\n", t.t(MessageKey::RelatedAppManagerTitle)));
        if scope.related_apps.is_empty() {
            output.push_str(&format!("{}\n", t.t(MessageKey::NoRelatedApps)));
        } else {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                t.t(MessageKey::Id),
                t.t(MessageKey::Code),
                t.t(MessageKey::Name),
                t.t(MessageKey::Type),
                t.t(MessageKey::ApplicationId)
            ));
            output.push_str("|----|----|----|----|----|\n");
            for r in &scope.related_apps {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    r.id,
                    Self::cell(&r.code),
                    Self::cell(&r.name),
                    t.lookup(r.app_type.as_str()),
                    r.application_id
                ));
            }
        }
        output
    }
}
