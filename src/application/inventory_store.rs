use crate::i18n::Locale;
use crate::inventory::domain::{
    seed, Application, Component, Entity, EntityKind, RelatedApplication,
};
use crate::ports::outbound::KeyValueStore;
use crate::shared::error::InventoryError;
use crate::shared::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const COMPONENTS_KEY: &str = "components";
pub const APPLICATIONS_KEY: &str = "applications";
pub const RELATED_APPS_KEY: &str = "relatedApps";
pub const LOCALE_KEY: &str = "locale";

/// Outcome of a store mutation; rejections leave the store untouched
pub type Mutation<T> = std::result::Result<T, InventoryError>;

/// Whether mutations still reach the backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceMode {
    Persistent,
    /// A read or write failed; changes live only until the process exits
    MemoryOnly,
}

/// InventoryStore - Owns the inventory collections and keeps them persisted
///
/// Components and related applications share one id namespace and are held
/// together as [`Entity`] values. Every successful mutation re-serializes
/// the affected keys through the injected [`KeyValueStore`]. Persistence is
/// best effort: the first failure is logged and the store continues in
/// memory only, without retrying.
pub struct InventoryStore<S: KeyValueStore> {
    backend: S,
    applications: Vec<Application>,
    entities: Vec<Entity>,
    locale: Option<Locale>,
    mode: PersistenceMode,
}

impl<S: KeyValueStore> InventoryStore<S> {
    /// Loads every key from `backend`, seeding the ones that are absent
    ///
    /// Seeded collections are written back immediately. A value that cannot
    /// be read or parsed is replaced by its seed for this session, and the
    /// store switches to memory-only mode so the stored value is not
    /// overwritten.
    pub fn open(backend: S) -> Self {
        let mut store = Self {
            backend,
            applications: Vec::new(),
            entities: Vec::new(),
            locale: None,
            mode: PersistenceMode::Persistent,
        };

        let applications = store.load_or_seed(APPLICATIONS_KEY, seed::default_applications);
        let components = store.load_or_seed(COMPONENTS_KEY, seed::default_components);
        let related_apps = store.load_or_seed(RELATED_APPS_KEY, seed::default_related_apps);

        store.applications = applications;
        store.entities = components
            .into_iter()
            .map(Entity::Component)
            .chain(related_apps.into_iter().map(Entity::RelatedApplication))
            .collect();
        store.locale = store.load_locale();

        log::info!(
            "Inventory loaded: {} application(s), {} entit(ies)",
            store.applications.len(),
            store.entities.len()
        );
        store
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn application(&self, id: &str) -> Option<&Application> {
        self.applications.iter().find(|app| app.id == id)
    }

    /// All entities: components first, then related applications, each in
    /// insertion order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.entities.iter().filter_map(Entity::as_component)
    }

    pub fn related_apps(&self) -> impl Iterator<Item = &RelatedApplication> {
        self.entities.iter().filter_map(Entity::as_related_app)
    }

    /// Locale saved by a previous session, if any
    pub fn stored_locale(&self) -> Option<Locale> {
        self.locale
    }

    pub fn mode(&self) -> PersistenceMode {
        self.mode
    }

    pub fn is_persistent(&self) -> bool {
        self.mode == PersistenceMode::Persistent
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Adds a component under a fresh id
    ///
    /// # Errors
    /// - `DuplicateId` if any component or related application has the id
    /// - `UnknownApplication` if the owning application does not exist
    pub fn add_component(&mut self, component: Component) -> Mutation<()> {
        self.ensure_insertable(&component.id, &component.application_id)?;
        let position = self.components().count();
        self.entities.insert(position, Entity::Component(component));
        self.persist_entities();
        Ok(())
    }

    /// Replaces the component with the same id
    ///
    /// # Errors
    /// - `UnknownEntity` if no entity has the id
    /// - `KindMismatch` if the id belongs to a related application
    /// - `UnknownApplication` if the owning application does not exist
    pub fn update_component(&mut self, component: Component) -> Mutation<()> {
        let index = self.replaceable(
            &component.id,
            &component.application_id,
            EntityKind::Component,
        )?;
        self.entities[index] = Entity::Component(component);
        self.persist_entities();
        Ok(())
    }

    /// Adds a related application under a fresh id
    pub fn add_related_app(&mut self, related: RelatedApplication) -> Mutation<()> {
        self.ensure_insertable(&related.id, &related.application_id)?;
        self.entities.push(Entity::RelatedApplication(related));
        self.persist_entities();
        Ok(())
    }

    /// Replaces the related application with the same id
    pub fn update_related_app(
        &mut self,
        related: RelatedApplication,
    ) -> Mutation<()> {
        let index = self.replaceable(
            &related.id,
            &related.application_id,
            EntityKind::RelatedApplication,
        )?;
        self.entities[index] = Entity::RelatedApplication(related);
        self.persist_entities();
        Ok(())
    }

    /// Removes one entity and detaches its direct children
    ///
    /// Children keep existing with no parent; nothing is deleted
    /// transitively.
    ///
    /// # Returns
    /// The removed entity
    pub fn delete_entity(&mut self, id: &str) -> Mutation<Entity> {
        let index = self
            .entities
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| InventoryError::UnknownEntity { id: id.to_string() })?;
        let removed = self.entities.remove(index);

        let detached = self
            .entities
            .iter_mut()
            .map(|entity| entity.detach_from(id))
            .filter(|changed| *changed)
            .count();
        if detached > 0 {
            log::debug!("Detached {} child(ren) of '{}'", detached, id);
        }

        self.persist_entities();
        Ok(removed)
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale);
        self.persist_value(LOCALE_KEY, &locale);
    }

    fn ensure_insertable(&self, id: &str, application_id: &str) -> Mutation<()> {
        if self.entity(id).is_some() {
            return Err(InventoryError::DuplicateId { id: id.to_string() });
        }
        self.ensure_application(application_id)
    }

    fn replaceable(
        &self,
        id: &str,
        application_id: &str,
        expected: EntityKind,
    ) -> Mutation<usize> {
        let index = self
            .entities
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| InventoryError::UnknownEntity { id: id.to_string() })?;

        let actual = self.entities[index].kind();
        if actual != expected {
            return Err(InventoryError::KindMismatch {
                id: id.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        self.ensure_application(application_id)?;
        Ok(index)
    }

    fn ensure_application(&self, application_id: &str) -> Mutation<()> {
        match self.application(application_id) {
            Some(_) => Ok(()),
            None => Err(InventoryError::UnknownApplication {
                id: application_id.to_string(),
            }),
        }
    }

    fn load_or_seed<T, F>(&mut self, key: &str, seed: F) -> Vec<T>
    where
        T: Serialize + DeserializeOwned,
        F: Fn() -> Vec<T>,
    {
        match self.read_json::<Vec<T>>(key) {
            Ok(Some(values)) => values,
            Ok(None) => {
                log::info!("No stored value for '{}', seeding defaults", key);
                let values = seed();
                self.persist_value(key, &values);
                values
            }
            Err(e) => {
                self.degrade(&e);
                seed()
            }
        }
    }

    fn load_locale(&mut self) -> Option<Locale> {
        let raw = match self.backend.get(LOCALE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                self.degrade(&e);
                return None;
            }
        };

        // Accept a bare code as well as a JSON string
        let locale = serde_json::from_str::<Locale>(&raw)
            .ok()
            .or_else(|| raw.parse::<Locale>().ok());
        if locale.is_none() {
            log::warn!("Ignoring unknown stored locale '{}'", raw);
        }
        locale
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.get(key)? {
            Some(raw) => {
                let value = serde_json::from_str(&raw)
                    .with_context(|| format!("Stored value '{}' is not valid JSON", key))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn persist_entities(&mut self) {
        let components: Vec<&Component> = self.components().collect();
        let related_apps: Vec<&RelatedApplication> = self.related_apps().collect();
        let components = serde_json::to_string(&components);
        let related_apps = serde_json::to_string(&related_apps);

        match (components, related_apps) {
            (Ok(components), Ok(related_apps)) => {
                self.write(COMPONENTS_KEY, &components);
                self.write(RELATED_APPS_KEY, &related_apps);
            }
            (Err(e), _) | (_, Err(e)) => self.degrade(&anyhow::Error::from(e)),
        }
    }

    fn persist_value<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.write(key, &json),
            Err(e) => self.degrade(&anyhow::Error::from(e)),
        }
    }

    fn write(&mut self, key: &str, json: &str) {
        if self.mode == PersistenceMode::MemoryOnly {
            return;
        }
        if let Err(e) = self.backend.set(key, json) {
            self.degrade(&e);
        }
    }

    fn degrade(&mut self, error: &anyhow::Error) {
        if self.mode == PersistenceMode::Persistent {
            log::error!("Persistence failed, continuing in memory only: {:#}", error);
            self.mode = PersistenceMode::MemoryOnly;
        }
    }
}
