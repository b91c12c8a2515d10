mod cli;

use archviz::adapters::outbound::console::StderrNotifier;
use archviz::adapters::outbound::filesystem::{JsonFileStore, MemoryStore};
use archviz::adapters::outbound::formatters::ListingFormatter;
use archviz::adapters::outbound::network::{CachingDiagramRenderer, PlantUmlServerRenderer};
use archviz::application::dto::{DiagramKind, ImageFormat};
use archviz::application::factories::{PresenterFactory, PresenterType};
use archviz::application::use_cases::{
    ExploreInventoryUseCase, ManageInventoryUseCase, RenderDiagramUseCase, RenderState,
};
use archviz::application::InventoryStore;
use archviz::config::{self, Config};
use archviz::i18n::Translator;
use archviz::inventory::domain::{FilterSelection, TypeVisibility};
use archviz::inventory::services::RelatedAppDraft;
use archviz::ports::outbound::KeyValueStore;
use archviz::shared::error::{ExitCode, InventoryError};
use archviz::shared::Result;
use cli::{Args, Command, ComponentAction, ComponentChanges, FilterArgs, RelatedAction};
use std::path::{Path, PathBuf};
use std::process;

type Backend = Box<dyn KeyValueStore>;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_logger(args.verbose);

    if let Err(e) = run(args).await {
        let code = exit_code_for(&e);

        // Rejections were already reported through the notifier
        if code != ExitCode::Rejected {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }
            eprintln!();
        }

        process::exit(code.as_i32());
    }
}

fn init_logger(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if error.downcast_ref::<InventoryError>().is_some() {
        ExitCode::Rejected
    } else {
        ExitCode::ApplicationError
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let data_dir = args
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(config::default_data_dir);

    let store = InventoryStore::open(open_backend(&data_dir));
    let locale = args
        .locale
        .or(config.locale)
        .or(store.stored_locale())
        .unwrap_or_default();
    let translator = Translator::new(locale);
    log::debug!("Using data directory {} and locale {}", data_dir.display(), locale);

    match args.command {
        Command::Options => {
            let explore = ExploreInventoryUseCase::new(store.applications(), store.entities());
            let filters = explore.select(&args.filters.choices());
            let listing = ListingFormatter::new(&translator)
                .format_options(&filters, &explore.options(&filters));
            PresenterFactory::create(PresenterType::Stdout).present(&listing)
        }
        Command::Scope => {
            let explore = ExploreInventoryUseCase::new(store.applications(), store.entities());
            let filters = explore.select(&args.filters.choices());
            let listing = ListingFormatter::new(&translator).format_scope(&explore.scope(&filters));
            PresenterFactory::create(PresenterType::Stdout).present(&listing)
        }
        Command::Diagram { kind, output } => {
            let text = diagram_text(&store, &args.filters, &config, kind, &translator);
            PresenterFactory::create(PresenterType::from_output(output)).present(&text)
        }
        Command::Url { kind, format } => {
            let text = diagram_text(&store, &args.filters, &config, kind, &translator);
            let renderer = render_use_case(&config, translator)?;
            let url = renderer.url(&text, format.unwrap_or(config.render.format))?;
            PresenterFactory::create(PresenterType::Stdout).present(&url)
        }
        Command::Render {
            kind,
            format,
            output,
        } => {
            let text = diagram_text(&store, &args.filters, &config, kind, &translator);
            let renderer = render_use_case(&config, translator)?;
            render(&renderer, &text, format.unwrap_or(config.render.format), output).await
        }
        Command::Component { action } => {
            let filters = selection(&store, &args.filters);
            let mut manage = ManageInventoryUseCase::new(store, StderrNotifier::new(), translator);
            match action {
                ComponentAction::Add {
                    id,
                    name,
                    component_type,
                    level,
                    parent,
                    application,
                } => {
                    let draft = ComponentAction::add_draft(
                        &id,
                        &name,
                        &component_type,
                        level,
                        &parent,
                        &application,
                    );
                    manage.add_component(draft, &filters)?;
                }
                ComponentAction::Edit {
                    id,
                    name,
                    component_type,
                    level,
                    parent,
                    application,
                } => {
                    let changes = ComponentChanges {
                        name,
                        component_type,
                        level,
                        parent,
                        application,
                    };
                    let draft = changes.apply(manage.component_draft(&id)?);
                    manage.update_component(draft)?;
                }
                ComponentAction::Delete { id } => {
                    manage.delete_entity(&id)?;
                }
            }
            Ok(())
        }
        Command::Related { action } => {
            let filters = selection(&store, &args.filters);
            let mut manage = ManageInventoryUseCase::new(store, StderrNotifier::new(), translator);
            match action {
                RelatedAction::Add { id, code, name } => {
                    let draft = RelatedAction::apply_changes(
                        RelatedAppDraft {
                            id,
                            ..Default::default()
                        },
                        Some(code),
                        Some(name),
                    );
                    manage.add_related_app(draft, &filters)?;
                }
                RelatedAction::Edit { id, code, name } => {
                    let draft =
                        RelatedAction::apply_changes(manage.related_app_draft(&id)?, code, name);
                    manage.update_related_app(draft)?;
                }
                RelatedAction::Delete { id } => {
                    manage.delete_entity(&id)?;
                }
            }
            Ok(())
        }
        Command::Locale { locale } => {
            let mut manage = ManageInventoryUseCase::new(store, StderrNotifier::new(), translator);
            manage.set_locale(locale);
            Ok(())
        }
    }
}

/// Explicit `--config`, else `archviz.config.yml` in the data directory
fn load_config(args: &Args) -> Result<Config> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path);
    }
    let dir = args.data_dir.clone().unwrap_or_else(config::default_data_dir);
    Ok(config::discover_config(&dir)?.unwrap_or_default())
}

/// Falls back to an in-memory store when the data directory is unusable
fn open_backend(data_dir: &Path) -> Backend {
    match JsonFileStore::open(data_dir) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::error!("{:#}", e);
            log::error!("Continuing without persistence; changes will be lost on exit");
            Box::new(MemoryStore::new())
        }
    }
}

fn selection(store: &InventoryStore<Backend>, filters: &FilterArgs) -> FilterSelection {
    ExploreInventoryUseCase::new(store.applications(), store.entities()).select(&filters.choices())
}

/// Configured visible types, minus `--hide-type`
fn visibility(config: &Config, filters: &FilterArgs) -> TypeVisibility {
    let mut visibility = config.visibility();
    for hidden in &filters.hide_types {
        if visibility.is_visible(*hidden) {
            visibility.toggle(*hidden);
        }
    }
    visibility
}

fn diagram_text(
    store: &InventoryStore<Backend>,
    filter_args: &FilterArgs,
    config: &Config,
    kind: DiagramKind,
    translator: &Translator,
) -> String {
    let explore = ExploreInventoryUseCase::new(store.applications(), store.entities());
    let filters = explore.select(&filter_args.choices());
    explore.diagram_text(&filters, kind, &visibility(config, filter_args), translator)
}

fn render_use_case(
    config: &Config,
    translator: Translator,
) -> Result<RenderDiagramUseCase<CachingDiagramRenderer<PlantUmlServerRenderer>, StderrNotifier>> {
    let server = PlantUmlServerRenderer::new(
        &config.render.base_url,
        config.render.timeout,
        config.render.max_retries,
    )?;
    Ok(RenderDiagramUseCase::new(
        CachingDiagramRenderer::new(server),
        StderrNotifier::new(),
        translator,
    ))
}

/// Writes the image, or the diagram text to stdout when rendering failed
async fn render(
    renderer: &RenderDiagramUseCase<CachingDiagramRenderer<PlantUmlServerRenderer>, StderrNotifier>,
    text: &str,
    format: ImageFormat,
    output: PathBuf,
) -> Result<()> {
    match renderer.render(text, format).await {
        RenderState::Ready { image, .. } => {
            PresenterFactory::create(PresenterType::File(output)).present_bytes(&image)
        }
        RenderState::Fallback { source, .. } => {
            PresenterFactory::create(PresenterType::Stdout).present(&source)
        }
        RenderState::Idle | RenderState::Loading { .. } => Ok(()),
    }
}
