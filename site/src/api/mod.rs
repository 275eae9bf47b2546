pub mod image;
pub mod ingest;
pub mod projects;
