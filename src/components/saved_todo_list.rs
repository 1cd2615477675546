//! Saved Todo List Component
//!
//! Keyed view over the persisted list. A prepend inserts one node at the
//! front instead of re-rendering the list.

use leptos::prelude::*;
use todo_persist::{TodoList, TodoText};

use crate::components::TextTodoCard;
use crate::rows::keyed_rows;
use crate::storage::BrowserStorage;

/// List state of the saved board
pub type SavedList = TodoList<TodoText, BrowserStorage>;

#[component]
pub fn SavedTodoList<S>(todos: RwSignal<TodoList<TodoText, S>>) -> impl IntoView
where
    S: Send + Sync + 'static,
{
    view! {
        <For
            each=move || todos.with(|list| keyed_rows(list.entries()))
            key=|(ordinal, _)| *ordinal
            children=|(_, text)| view! { <TextTodoCard text=text /> }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_persist::MemoryStore;

    fn render(todos: RwSignal<TodoList<TodoText, MemoryStore>>) -> String {
        Owner::new().with(|| view! { <SavedTodoList todos=todos /> }.to_html())
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle).unwrap_or_else(|| panic!("'{}' not rendered in {}", needle, html))
    }

    #[test]
    fn test_saved_list_renders_newest_first() {
        let store = MemoryStore::with_value("todos", r#"["B","A"]"#);
        let list = TodoList::load(store, "todos").expect("Failed to load");
        let html = render(RwSignal::new(list));

        assert_eq!(html.matches("<article>").count(), 2);
        assert!(position(&html, "<span>B") < position(&html, "<span>A"));
    }

    #[test]
    fn test_prepended_todo_renders_first() {
        let store = MemoryStore::new();
        let mut list = TodoList::load(store, "todos").expect("Failed to load");
        list.prepend("A".to_string()).unwrap();
        list.prepend("B".to_string()).unwrap();
        let html = render(RwSignal::new(list));

        assert!(position(&html, "<span>B") < position(&html, "<span>A"));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let list = TodoList::load(MemoryStore::new(), "todos").expect("Failed to load");
        let html = render(RwSignal::new(list));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn test_saved_text_is_escaped() {
        let store = MemoryStore::with_value("todos", r#"["<b>bold</b>"]"#);
        let list = TodoList::load(store, "todos").expect("Failed to load");
        let html = render(RwSignal::new(list));

        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
