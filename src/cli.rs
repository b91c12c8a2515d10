use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use archviz::application::dto::{DiagramKind, ImageFormat};
use archviz::i18n::Locale;
use archviz::inventory::domain::{EntityType, Facet, FilterValue};
use archviz::inventory::services::{ComponentDraft, RelatedAppDraft};

/// Explore an architecture inventory and draw it as PlantUML diagrams
#[derive(Parser, Debug)]
#[command(name = "archviz")]
#[command(version)]
#[command(about = "Explore an architecture inventory and draw it as PlantUML diagrams", long_about = None)]
pub struct Args {
    /// Directory holding the persisted inventory
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (defaults to archviz.config.yml in the data directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Interface language for this run: en or es
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub filters: FilterArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Facet selection shared by every command
///
/// Each flag takes a value or `all`. Flags are applied in cascade order. A
/// value that does not exist below an earlier choice matches nothing, unless
/// the earlier choices leave that facet a single value, which then replaces
/// it.
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct FilterArgs {
    #[arg(long, global = true)]
    pub country: Option<String>,

    #[arg(long, global = true)]
    pub segment: Option<String>,

    #[arg(long, global = true)]
    pub domain1: Option<String>,

    #[arg(long, global = true)]
    pub domain2: Option<String>,

    #[arg(long, global = true)]
    pub domain3: Option<String>,

    /// Keep, Update, Remove or Investigate
    #[arg(long, global = true)]
    pub disposition: Option<String>,

    /// yes or no
    #[arg(long, global = true)]
    pub currency_issues: Option<String>,

    /// Application id
    #[arg(long, global = true, value_name = "ID")]
    pub app: Option<String>,

    /// Entity type to leave out of the entity diagram (repeatable)
    #[arg(long = "hide-type", global = true, value_name = "TYPE")]
    pub hide_types: Vec<EntityType>,
}

impl FilterArgs {
    /// Requested facet values, in cascade order
    pub fn choices(&self) -> Vec<(Facet, FilterValue)> {
        [
            (Facet::Country, &self.country),
            (Facet::Segment, &self.segment),
            (Facet::Domain1, &self.domain1),
            (Facet::Domain2, &self.domain2),
            (Facet::Domain3, &self.domain3),
            (Facet::Disposition, &self.disposition),
            (Facet::CurrencyIssues, &self.currency_issues),
            (Facet::ApplicationId, &self.app),
        ]
        .into_iter()
        .filter_map(|(facet, value)| value.as_deref().map(|v| (facet, FilterValue::parse(v))))
        .collect()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available values of every filter
    Options,

    /// List the applications, components and related applications in view
    Scope,

    /// Print the PlantUML source of a diagram
    Diagram {
        /// entities or relations
        #[arg(long, default_value = "entities")]
        kind: DiagramKind,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the rendering service URL of a diagram
    Url {
        #[arg(long, default_value = "entities")]
        kind: DiagramKind,

        /// png, svg or txt (defaults to the configured format)
        #[arg(long)]
        format: Option<ImageFormat>,
    },

    /// Render a diagram through the rendering service
    Render {
        #[arg(long, default_value = "entities")]
        kind: DiagramKind,

        /// png, svg or txt (defaults to the configured format)
        #[arg(long)]
        format: Option<ImageFormat>,

        /// Image file to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Add, edit or delete components
    Component {
        #[command(subcommand)]
        action: ComponentAction,
    },

    /// Add, edit or delete related applications
    Related {
        #[command(subcommand)]
        action: RelatedAction,
    },

    /// Change and remember the interface language
    Locale {
        /// en or es
        locale: Locale,
    },
}

#[derive(Subcommand, Debug)]
pub enum ComponentAction {
    /// Add a component to the selected application (--app)
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        /// Component, Service, Module or Class
        #[arg(long = "type", value_name = "TYPE")]
        component_type: String,
        #[arg(long, allow_negative_numbers = true)]
        level: i64,
        /// Parent entity id
        #[arg(long, default_value = "")]
        parent: String,
        /// Owning application (defaults to --app)
        #[arg(long, value_name = "ID", default_value = "")]
        application: String,
    },

    /// Edit a component; omitted fields keep their value
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "type", value_name = "TYPE")]
        component_type: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        level: Option<i64>,
        /// Parent entity id; an empty value clears it
        #[arg(long)]
        parent: Option<String>,
        #[arg(long, value_name = "ID")]
        application: Option<String>,
    },

    /// Delete a component; its children are kept and detached
    Delete { id: String },
}

impl ComponentAction {
    /// Draft for `add`
    pub fn add_draft(
        id: &str,
        name: &str,
        component_type: &str,
        level: i64,
        parent: &str,
        application: &str,
    ) -> ComponentDraft {
        ComponentDraft {
            id: id.to_string(),
            name: name.to_string(),
            application_id: application.to_string(),
            parent_id: parent.to_string(),
            component_type: component_type.to_string(),
            level,
        }
    }
}

/// Field overrides for `component edit`
#[derive(Debug, Default)]
pub struct ComponentChanges {
    pub name: Option<String>,
    pub component_type: Option<String>,
    pub level: Option<i64>,
    pub parent: Option<String>,
    pub application: Option<String>,
}

impl ComponentChanges {
    pub fn apply(self, mut draft: ComponentDraft) -> ComponentDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(component_type) = self.component_type {
            draft.component_type = component_type;
        }
        if let Some(level) = self.level {
            draft.level = level;
        }
        if let Some(parent) = self.parent {
            draft.parent_id = parent;
        }
        if let Some(application) = self.application {
            draft.application_id = application;
        }
        draft
    }
}

#[derive(Subcommand, Debug)]
pub enum RelatedAction {
    /// Add a related application to the selected application (--app)
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
    },

    /// Edit a related application; omitted fields keep their value
    Edit {
        id: String,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },

    /// Delete a related application; components under it are detached
    Delete { id: String },
}

impl RelatedAction {
    pub fn apply_changes(
        mut draft: RelatedAppDraft,
        code: Option<String>,
        name: Option<String>,
    ) -> RelatedAppDraft {
        if let Some(code) = code {
            draft.code = code;
        }
        if let Some(name) = name {
            draft.name = name;
        }
        draft
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
