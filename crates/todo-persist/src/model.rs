//! Todo Models

use serde::{Deserialize, Serialize};

/// Entry of the saved board: free text only
pub type TodoText = String;

/// Entry of the static board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoredTodo {
    pub author: String,
    pub text: String,
}

impl AuthoredTodo {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

/// Built-in list shown by the static board
pub fn default_todos() -> Vec<AuthoredTodo> {
    vec![
        AuthoredTodo::new("Niklas", "Clean the bathroom"),
        AuthoredTodo::new("Niklas", "Do 15 push-ups"),
        AuthoredTodo::new("Niklas", "Do the laundry"),
    ]
}
