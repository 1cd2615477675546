//! UI Components
//!
//! Leptos components rendering todo fragments.

mod todo_card;
mod static_todo_list;
mod saved_todo_list;

pub use todo_card::{AuthoredTodoCard, TextTodoCard};
pub use static_todo_list::StaticTodoList;
pub use saved_todo_list::{SavedList, SavedTodoList};
