#![forbid(unsafe_code)]

pub mod app_services;
pub mod code_runner;
pub mod config;
pub mod error;
pub mod progress_service;

pub use app_services::AppServices;
pub use code_runner::{CodeRunner, DEFAULT_RUN_DELAY, EditorReset, RunTicket};
pub use config::{AppConfig, DEFAULT_DATABASE_URL};
pub use error::AppServicesError;
pub use progress_service::{Persistence, ProgressService, ProgressUpdate};
