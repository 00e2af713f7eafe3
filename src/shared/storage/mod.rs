mod kv_store;
mod kv_store_memory;
mod kv_store_postgres;

pub use kv_store::{KvStore, KvStoreError, CONTACT_MESSAGES_KEY, PORTFOLIO_KEY};
pub use kv_store_memory::InMemoryKvStore;
pub use kv_store_postgres::PostgresKvStore;
