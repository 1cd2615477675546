//! Todo Persistence Layer
//!
//! Item models, the key-value store seam and the list owner.
//! This layer has NO DOM dependencies (serde for the stored encoding only).

mod error;
mod model;
mod store;
mod todo_list;

pub use error::{PersistError, PersistResult};
pub use model::{default_todos, AuthoredTodo, TodoText};
pub use store::{KeyValueStore, MemoryStore};
pub use todo_list::TodoList;
