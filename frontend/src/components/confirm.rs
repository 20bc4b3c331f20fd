//! Blocking "are you sure" prompts before destructive actions.
//!
//! Components take the prompt as a `Callback<String, bool>` prop so a test
//! harness or an embedding page can answer it without a real browser dialog.

use yew::Callback;

pub type Confirm = Callback<String, bool>;

/// Default prompt backed by `window.confirm`. Without a window it answers no.
pub fn browser_confirm() -> Confirm {
    Callback::from(|message: String| {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(&message).ok())
            .unwrap_or(false)
    })
}

/// Question asked before a place is deleted.
pub fn delete_prompt(title: &str) -> String {
    format!("Удалить \"{title}\"?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_place() {
        assert_eq!(delete_prompt("Эрмитаж"), "Удалить \"Эрмитаж\"?");
    }
}
