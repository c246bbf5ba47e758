//! Interactive command-line surface.

pub mod prompt;

pub use prompt::{parse_choice, prompt_sort_key, resolve_choice, INVALID_CHOICE_MESSAGE, PROMPT};
