pub mod components;
pub mod main_view;
