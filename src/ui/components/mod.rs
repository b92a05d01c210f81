pub mod about;
pub mod keymap_view;
pub mod open_prompt;
pub mod status_bar;
