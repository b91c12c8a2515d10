use super::{Locale, MessageKey};

pub(super) fn template(locale: Locale, key: MessageKey) -> &'static str {
    let (en, es) = entry(key);
    match locale {
        Locale::En => en,
        Locale::Es => es,
    }
}

fn entry(key: MessageKey) -> (&'static str, &'static str) {
    use MessageKey::*;

    match key {
        AppTitle => ("Architecture Visualizer", "Visualizador de Arquitectura"),

        ArchitectureFor => ("Architecture for", "Arquitectura de"),
        Relationships => ("Relationships", "Relaciones"),
        NoComponentsToDisplayFor => (
            "No items to display for {appName}",
            "No hay elementos para mostrar de {appName}",
        ),
        CurrentSelection => ("the current selection", "la selección actual"),
        DiagramBasedOnFilters => (
            "Diagram based on active filters.",
            "Diagrama basado en los filtros activos.",
        ),
        MultipleApplications => ("Multiple Applications", "Múltiples Aplicaciones"),
        AggregateOfApplications => (
            "Aggregate of {count} applications.",
            "Agregado de {count} aplicaciones.",
        ),
        AppRelationships => ("Application Relationships", "Relaciones entre Aplicaciones"),
        NoAppsForFilters => (
            "No applications match the current filters",
            "Ninguna aplicación coincide con los filtros actuales",
        ),

        CurrentView => ("the current view", "la vista actual"),
        Overview => ("Overview", "Resumen"),
        DetailsFor => ("Details for", "Detalles de"),
        NoApplicationsMatch => (
            "No applications match the selected filters.",
            "Ninguna aplicación coincide con los filtros seleccionados.",
        ),
        MultipleApplicationsMatch => (
            "{count} applications match the selected filters.",
            "{count} aplicaciones coinciden con los filtros seleccionados.",
        ),
        NoComponentsForFilters => (
            "No items to display with current filters.",
            "No hay elementos para mostrar con los filtros actuales.",
        ),
        NoRelatedApps => ("No related applications.", "Sin aplicaciones relacionadas."),
        ComponentManagerTitle => ("Components", "Componentes"),
        RelatedAppManagerTitle => ("Related Applications", "Aplicaciones Relacionadas"),
        FilterByType => ("Filter by type", "Filtrar por tipo"),
        Country => ("Country", "País"),
        Segment => ("Segment", "Segmento"),
        Domain1 => ("Domain (level 1)", "Dominio (nivel 1)"),
        Domain2 => ("Domain (level 2)", "Dominio (nivel 2)"),
        Domain3 => ("Domain (level 3)", "Dominio (nivel 3)"),
        Disposition => ("Disposition", "Disposición"),
        CurrencyIssues => ("Currency issues", "Problemas de vigencia"),
        ApplicationId => ("Application", "Aplicación"),
        Id => ("ID", "ID"),
        Name => ("Name", "Nombre"),
        Code => ("Code", "Código"),
        Type => ("Type", "Tipo"),
        Level => ("Level", "Nivel"),
        Parent => ("Parent", "Padre"),
        NoneLabel => ("None", "Ninguno"),

        AddComponentToastTitle => ("Component added", "Componente agregado"),
        AddComponentToastDescription => (
            "Component \"{componentName}\" was added.",
            "El componente \"{componentName}\" fue agregado.",
        ),
        UpdateComponentToastTitle => ("Component updated", "Componente actualizado"),
        UpdateComponentToastDescription => (
            "Component \"{componentName}\" was updated.",
            "El componente \"{componentName}\" fue actualizado.",
        ),
        DeleteComponentToastTitle => ("Component deleted", "Componente eliminado"),
        DeleteComponentToastDescription => (
            "Component \"{componentName}\" was deleted.",
            "El componente \"{componentName}\" fue eliminado.",
        ),
        AddRelatedAppToastTitle => ("Related application added", "Aplicación relacionada agregada"),
        AddRelatedAppToastDescription => (
            "Related application \"{appName}\" was added.",
            "La aplicación relacionada \"{appName}\" fue agregada.",
        ),
        UpdateRelatedAppToastTitle => (
            "Related application updated",
            "Aplicación relacionada actualizada",
        ),
        UpdateRelatedAppToastDescription => (
            "Related application \"{appName}\" was updated.",
            "La aplicación relacionada \"{appName}\" fue actualizada.",
        ),
        DeleteRelatedAppToastTitle => (
            "Related application deleted",
            "Aplicación relacionada eliminada",
        ),
        DeleteRelatedAppToastDescription => (
            "Related application \"{appName}\" was deleted.",
            "La aplicación relacionada \"{appName}\" fue eliminada.",
        ),
        DuplicateIdErrorToastTitle => ("Duplicate ID", "ID duplicado"),
        DuplicateIdErrorToastDescription => (
            "An item with ID \"{componentId}\" already exists.",
            "Ya existe un elemento con el ID \"{componentId}\".",
        ),
        SelectApplicationErrorTitle => ("No application selected", "Ninguna aplicación seleccionada"),
        SelectApplicationErrorDescription => (
            "Select a specific application before adding items.",
            "Seleccione una aplicación específica antes de agregar elementos.",
        ),
        ValidationErrorTitle => ("Invalid data", "Datos inválidos"),
        UnknownEntityError => (
            "No item with ID \"{id}\" exists.",
            "No existe ningún elemento con el ID \"{id}\".",
        ),
        UnknownApplicationError => (
            "Application \"{appId}\" does not exist.",
            "La aplicación \"{appId}\" no existe.",
        ),
        KindMismatchError => (
            "ID \"{id}\" belongs to a different kind of item.",
            "El ID \"{id}\" pertenece a otro tipo de elemento.",
        ),
        PersistenceErrorTitle => ("Could not save data", "No se pudieron guardar los datos"),
        PersistenceErrorDescription => (
            "Changes are kept in memory only for this session.",
            "Los cambios se mantienen solo en memoria durante esta sesión.",
        ),
        RenderingDiagram => ("Rendering diagram...", "Generando diagrama..."),
        RenderErrorTitle => ("Diagram could not be rendered", "No se pudo generar el diagrama"),
        RenderErrorDescription => (
            "Showing the diagram source instead.",
            "Se muestra el código del diagrama en su lugar.",
        ),
        LocaleChangedToastTitle => ("Language changed", "Idioma cambiado"),

        TypeComponent => ("Component", "Componente"),
        TypeService => ("Service", "Servicio"),
        TypeModule => ("Module", "Módulo"),
        TypeClass => ("Class", "Clase"),
        TypeExternalApplication => ("External Application", "Aplicación Externa"),
    }
}
