pub mod repositories;
pub mod state;

pub use repositories::SeaOrmCatalogRepository;
pub use state::AppState;
