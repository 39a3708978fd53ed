// src/lib.rs - Library interface for the reader, transformer and renderer

pub mod axis_names;
pub mod constants;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
