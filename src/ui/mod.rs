pub(crate) mod app;
pub(crate) mod commands;
pub(crate) mod form;
pub(crate) mod render;
pub(crate) mod screens;
pub(crate) mod theme;
pub(crate) mod util;

#[cfg(test)]
#[path = "util_tests.rs"]
mod util_tests;


#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
