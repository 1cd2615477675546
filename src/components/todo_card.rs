//! Todo Card Components
//!
//! One fragment per todo. Text is inserted as text nodes.

use leptos::prelude::*;
use todo_persist::AuthoredTodo;

/// Fragment of the static board
#[component]
pub fn AuthoredTodoCard(todo: AuthoredTodo) -> impl IntoView {
    let AuthoredTodo { author, text } = todo;

    view! {
        <article class="todo-item">
            <div class="content">
                <span class="text">{text}</span>
                <span class="author">{author}</span>
            </div>
            // Visual only
            <div class="action-icons">
                <span>"Delete"</span>
                <span>"Done"</span>
            </div>
        </article>
    }
}

/// Fragment of the saved board
#[component]
pub fn TextTodoCard(text: String) -> impl IntoView {
    view! {
        <article>
            <span>{text}</span>
        </article>
    }
}
