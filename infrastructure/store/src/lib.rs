pub mod cart;
pub mod menu;
pub mod order;

pub use cart::InMemoryCartRepository;
pub use menu::StaticMenuCatalog;
pub use order::SampleOrderRepository;
