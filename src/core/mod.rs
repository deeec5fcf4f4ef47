pub mod app;
pub mod ascii;
pub mod commands;
pub mod config;
pub mod emulators;
pub mod format;
pub mod llm;
pub mod paths;
pub mod persistence;
pub mod session;
