use crate::application::inventory_store::{InventoryStore, Mutation};
use crate::i18n::{Locale, MessageKey, Translator};
use crate::inventory::domain::{Component, Entity, EntityKind, FilterSelection, RelatedApplication};
use crate::inventory::services::{ComponentDraft, RecordValidator, RelatedAppDraft};
use crate::ports::outbound::{KeyValueStore, Notification, Notifier};
use crate::shared::error::InventoryError;

/// ManageInventoryUseCase - Validated edits with user feedback
///
/// Wraps the [`InventoryStore`] mutations: drafts are validated first,
/// rejections never touch the store, and every outcome (success or
/// rejection) is reported through the [`Notifier`] in the active locale.
///
/// # Type Parameters
/// * `S` - KeyValueStore implementation backing the store
/// * `N` - Notifier implementation
pub struct ManageInventoryUseCase<S: KeyValueStore, N: Notifier> {
    store: InventoryStore<S>,
    notifier: N,
    translator: Translator,
}

impl<S: KeyValueStore, N: Notifier> ManageInventoryUseCase<S, N> {
    pub fn new(store: InventoryStore<S>, notifier: N, translator: Translator) -> Self {
        Self {
            store,
            notifier,
            translator,
        }
    }

    pub fn store(&self) -> &InventoryStore<S> {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Adds a component to the selected application
    ///
    /// An empty `application_id` in the draft is filled with the selected
    /// application.
    ///
    /// # Errors
    /// - `NoApplicationSelected` when `filters` has no explicit application
    /// - `Invalid` when the draft fails validation
    /// - `DuplicateId` / `UnknownApplication` from the store
    pub fn add_component(
        &mut self,
        mut draft: ComponentDraft,
        filters: &FilterSelection,
    ) -> Mutation<Component> {
        let selected = self.selected_application(filters)?;
        if draft.application_id.trim().is_empty() {
            draft.application_id = selected;
        }

        let component = self.validate_component(&draft)?;
        self.track_persistence(|store| store.add_component(component.clone()))?;
        self.notify_success(
            MessageKey::AddComponentToastTitle,
            MessageKey::AddComponentToastDescription,
            &[("componentName", component.name.as_str())],
        );
        Ok(component)
    }

    /// Replaces an existing component
    pub fn update_component(&mut self, draft: ComponentDraft) -> Mutation<Component> {
        let component = self.validate_component(&draft)?;
        self.track_persistence(|store| store.update_component(component.clone()))?;
        self.notify_success(
            MessageKey::UpdateComponentToastTitle,
            MessageKey::UpdateComponentToastDescription,
            &[("componentName", component.name.as_str())],
        );
        Ok(component)
    }

    /// Adds a related application; it always belongs to the selected
    /// application
    pub fn add_related_app(
        &mut self,
        mut draft: RelatedAppDraft,
        filters: &FilterSelection,
    ) -> Mutation<RelatedApplication> {
        draft.application_id = self.selected_application(filters)?;

        let related = self.validate_related_app(&draft)?;
        self.track_persistence(|store| store.add_related_app(related.clone()))?;
        self.notify_success(
            MessageKey::AddRelatedAppToastTitle,
            MessageKey::AddRelatedAppToastDescription,
            &[("appName", related.name.as_str())],
        );
        Ok(related)
    }

    pub fn update_related_app(&mut self, draft: RelatedAppDraft) -> Mutation<RelatedApplication> {
        let related = self.validate_related_app(&draft)?;
        self.track_persistence(|store| store.update_related_app(related.clone()))?;
        self.notify_success(
            MessageKey::UpdateRelatedAppToastTitle,
            MessageKey::UpdateRelatedAppToastDescription,
            &[("appName", related.name.as_str())],
        );
        Ok(related)
    }

    /// Deletes a component or related application; its children are
    /// detached, not deleted
    pub fn delete_entity(&mut self, id: &str) -> Mutation<Entity> {
        let removed = self.track_persistence(|store| store.delete_entity(id))?;
        match &removed {
            Entity::Component(c) => self.notify_success(
                MessageKey::DeleteComponentToastTitle,
                MessageKey::DeleteComponentToastDescription,
                &[("componentName", c.name.as_str())],
            ),
            Entity::RelatedApplication(r) => self.notify_success(
                MessageKey::DeleteRelatedAppToastTitle,
                MessageKey::DeleteRelatedAppToastDescription,
                &[("appName", r.name.as_str())],
            ),
        }
        Ok(removed)
    }

    /// Switches the interface language and remembers it
    pub fn set_locale(&mut self, locale: Locale) {
        let was_persistent = self.store.is_persistent();
        self.store.set_locale(locale);
        self.translator = Translator::new(locale);
        self.report_degradation(was_persistent);
        self.notifier.notify(&Notification::success(
            self.translator.t(MessageKey::LocaleChangedToastTitle),
            locale.as_str(),
        ));
    }

    /// Editable draft of an existing component
    pub fn component_draft(&self, id: &str) -> Mutation<ComponentDraft> {
        match self.store.entity(id) {
            Some(Entity::Component(c)) => Ok(ComponentDraft::from_component(c)),
            Some(other) => Err(self.reject(InventoryError::KindMismatch {
                id: id.to_string(),
                expected: EntityKind::Component.to_string(),
                actual: other.kind().to_string(),
            })),
            None => Err(self.reject(InventoryError::UnknownEntity { id: id.to_string() })),
        }
    }

    /// Editable draft of an existing related application
    pub fn related_app_draft(&self, id: &str) -> Mutation<RelatedAppDraft> {
        match self.store.entity(id) {
            Some(Entity::RelatedApplication(r)) => Ok(RelatedAppDraft::from_related_app(r)),
            Some(other) => Err(self.reject(InventoryError::KindMismatch {
                id: id.to_string(),
                expected: EntityKind::RelatedApplication.to_string(),
                actual: other.kind().to_string(),
            })),
            None => Err(self.reject(InventoryError::UnknownEntity { id: id.to_string() })),
        }
    }

    fn selected_application(&self, filters: &FilterSelection) -> Mutation<String> {
        match filters.application_id() {
            Some(id) => Ok(id.to_string()),
            None => Err(self.reject(InventoryError::NoApplicationSelected)),
        }
    }

    fn validate_component(&self, draft: &ComponentDraft) -> Mutation<Component> {
        RecordValidator::validate_component(draft, self.store.entities())
            .map_err(|errors| self.reject(errors.into()))
    }

    fn validate_related_app(&self, draft: &RelatedAppDraft) -> Mutation<RelatedApplication> {
        RecordValidator::validate_related_app(draft).map_err(|errors| self.reject(errors.into()))
    }

    /// Runs a store mutation, reporting rejections and a switch to
    /// memory-only mode
    fn track_persistence<T, F>(&mut self, mutation: F) -> Mutation<T>
    where
        F: FnOnce(&mut InventoryStore<S>) -> Mutation<T>,
    {
        let was_persistent = self.store.is_persistent();
        let outcome = mutation(&mut self.store);
        self.report_degradation(was_persistent);
        outcome.map_err(|e| self.reject(e))
    }

    fn report_degradation(&self, was_persistent: bool) {
        if was_persistent && !self.store.is_persistent() {
            self.notifier.notify(&Notification::error(
                self.translator.t(MessageKey::PersistenceErrorTitle),
                self.translator.t(MessageKey::PersistenceErrorDescription),
            ));
        }
    }

    fn notify_success(&self, title: MessageKey, description: MessageKey, args: &[(&str, &str)]) {
        self.notifier.notify(&Notification::success(
            self.translator.t(title),
            self.translator.format(description, args),
        ));
    }

    /// Reports a rejection to the user and hands it back to the caller
    fn reject(&self, error: InventoryError) -> InventoryError {
        let t = &self.translator;
        let (title, description) = match &error {
            InventoryError::DuplicateId { id } => (
                t.t(MessageKey::DuplicateIdErrorToastTitle),
                t.format(MessageKey::DuplicateIdErrorToastDescription, &[("componentId", id.as_str())]),
            ),
            InventoryError::NoApplicationSelected => (
                t.t(MessageKey::SelectApplicationErrorTitle),
                t.t(MessageKey::SelectApplicationErrorDescription).to_string(),
            ),
            InventoryError::UnknownEntity { id } => (
                t.t(MessageKey::ValidationErrorTitle),
                t.format(MessageKey::UnknownEntityError, &[("id", id.as_str())]),
            ),
            InventoryError::UnknownApplication { id } => (
                t.t(MessageKey::ValidationErrorTitle),
                t.format(MessageKey::UnknownApplicationError, &[("appId", id.as_str())]),
            ),
            InventoryError::KindMismatch { id, .. } => (
                t.t(MessageKey::ValidationErrorTitle),
                t.format(MessageKey::KindMismatchError, &[("id", id.as_str())]),
            ),
            InventoryError::Invalid(errors) => {
                (t.t(MessageKey::ValidationErrorTitle), errors.to_string())
            }
        };
        log::info!("Rejected: {}", error);
        self.notifier.notify(&Notification::error(title, description));
        error
    }
}
