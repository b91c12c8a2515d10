mod explore_inventory;
mod manage_inventory;
mod render_diagram;

pub use explore_inventory::ExploreInventoryUseCase;
pub use manage_inventory::ManageInventoryUseCase;
pub use render_diagram::{RenderDiagramUseCase, RenderState};
