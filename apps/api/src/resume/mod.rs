// Résumé resource: merge engine, service operations, and HTTP handlers.

pub mod handlers;
pub mod merge;
pub mod service;

pub use service::ResumeService;
