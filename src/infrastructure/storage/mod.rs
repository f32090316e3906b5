mod store_factory;

pub use store_factory::{ObjectStoreFactory, StoreFactoryError};
