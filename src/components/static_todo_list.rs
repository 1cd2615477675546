//! Static Todo List Component

use leptos::prelude::*;
use todo_persist::AuthoredTodo;

use crate::components::AuthoredTodoCard;

/// Renders the given todos once, in input order
#[component]
pub fn StaticTodoList(todos: Vec<AuthoredTodo>) -> impl IntoView {
    todos
        .into_iter()
        .map(|todo| view! { <AuthoredTodoCard todo=todo /> })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_persist::default_todos;

    fn render(todos: Vec<AuthoredTodo>) -> String {
        view! { <StaticTodoList todos=todos /> }.to_html()
    }

    #[test]
    fn test_one_fragment_per_todo() {
        let html = render(default_todos());

        assert_eq!(html.matches(r#"<article class="todo-item">"#).count(), 3);
        assert_eq!(html.matches(r#"class="author""#).count(), 3);
        assert_eq!(html.matches("Niklas").count(), 3);
        assert_eq!(html.matches("Delete").count(), 3);
    }

    #[test]
    fn test_fragments_keep_input_order() {
        let html = render(default_todos());

        let positions: Vec<usize> = ["Clean the bathroom", "Do 15 push-ups", "Do the laundry"]
            .iter()
            .map(|text| html.find(text).unwrap_or_else(|| panic!("'{}' not rendered", text)))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_text_and_author_are_escaped() {
        let html = render(vec![AuthoredTodo::new("<i>me</i>", "<b>t</b>")]);

        assert!(html.contains("&lt;b&gt;t&lt;/b&gt;"));
        assert!(html.contains("&lt;i&gt;me&lt;/i&gt;"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<i>"));
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        let html = render(Vec::new());
        assert!(!html.contains("<article"));
    }
}
