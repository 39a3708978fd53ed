// src/plot_functions/mod.rs

pub mod plot_pid_trace;
