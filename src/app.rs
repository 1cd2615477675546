//! Board Mounting
//!
//! Entry points wiring configuration, storage and components onto the
//! page markup. Each board is independent of the other.

use leptos::prelude::*;
use todo_persist::{AuthoredTodo, TodoList, TodoText};

use crate::components::{SavedList, SavedTodoList, StaticTodoList};
use crate::config::BoardConfig;
use crate::dom;
use crate::error::BoardResult;
use crate::storage::BrowserStorage;

/// Replace the container content with `todos`, once
pub fn mount_static_board(config: &BoardConfig, todos: Vec<AuthoredTodo>) -> BoardResult<()> {
    let doc = dom::page_document()?;
    let container = dom::query(&doc, &config.list_selector)?;

    let count = todos.len();
    dom::replace_children(container, move || view! { <StaticTodoList todos=todos /> })?;

    log::info!("[STATIC] Rendered {} todos", count);
    Ok(())
}

/// Restore the saved list, render it and add a todo on every form submission
pub fn mount_saved_board(config: &BoardConfig) -> BoardResult<()> {
    let doc = dom::page_document()?;
    let form = dom::query(&doc, &config.form_selector)?;
    let input = dom::query_as::<web_sys::HtmlInputElement>(&doc, &config.input_selector)?;
    let container = dom::query(&doc, &config.list_selector)?;

    let list: SavedList = TodoList::load(BrowserStorage, config.storage_key.clone())?;
    let todos = RwSignal::new(list);

    // Existing markup is replaced even when nothing was saved
    dom::replace_children(container, move || view! { <SavedTodoList todos=todos /> })?;

    dom::on_submit(&form, move |ev: web_sys::Event| {
        ev.prevent_default();
        let text: TodoText = input.value();

        let mut saved = Ok(());
        todos.update(|list| saved = list.prepend(text));
        if let Err(err) = saved {
            log::error!("[SAVED] Failed to save todo: {}", err);
        }

        input.set_value("");
    })?;

    Ok(())
}
