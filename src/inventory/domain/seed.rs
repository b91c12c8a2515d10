//! Built-in datasets used when the store holds nothing yet

use super::{
    Application, Component, ComponentType, Disposition, Domain, RelatedApplication,
};

pub fn default_applications() -> Vec<Application> {
    vec![
        Application::new(
            "APL-1",
            "Core System",
            "Global",
            "Retail",
            Domain::new("Sales", "Catalog", "Inventory"),
        )
        .with_description("Product catalog and stock management platform.")
        .with_disposition(Disposition::Keep)
        .with_currency_issues(false)
        .with_related(&["APL-2"]),
        Application::new(
            "APL-2",
            "Reporting",
            "USA",
            "Corporate",
            Domain::new("Finance", "Analytics", "Reports"),
        )
        .with_description("Scheduled and on-demand business reports.")
        .with_disposition(Disposition::Update)
        .with_currency_issues(true),
        Application::new(
            "APL-3",
            "Customer Portal",
            "USA",
            "Retail",
            Domain::new("Sales", "Channels", "Web"),
        )
        .with_description("Self-service web front end for \"premium\" customers.")
        .with_disposition(Disposition::Investigate)
        .with_currency_issues(false)
        .with_related(&["APL-1", "APL-2"]),
    ]
}

pub fn default_components() -> Vec<Component> {
    vec![
        Component::new("A1", "Core Microservice", "APL-1", ComponentType::Component, 1),
        Component::new("A2", "Products API", "APL-1", ComponentType::Service, 2).with_parent("A1"),
        Component::new("A3", "Inventory Module", "APL-1", ComponentType::Module, 3)
            .with_parent("A2"),
        Component::new("A4", "SQL Database", "APL-1", ComponentType::Class, 2).with_parent("A1"),
        Component::new("B1", "Report Server", "APL-2", ComponentType::Component, 1),
        Component::new("B2", "PDF Exporter", "APL-2", ComponentType::Service, 2).with_parent("B1"),
        Component::new("C1", "Web Frontend", "APL-3", ComponentType::Component, 1)
            .with_parent("R2"),
    ]
}

pub fn default_related_apps() -> Vec<RelatedApplication> {
    vec![
        RelatedApplication::new("R1", "SAP", "SAP ERP", "APL-1"),
        RelatedApplication::new("R2", "IDP", "Identity Provider", "APL-3"),
    ]
}
