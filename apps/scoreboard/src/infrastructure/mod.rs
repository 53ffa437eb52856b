// Infrastructure layer module
// Adapters that expose the domain to concurrent callers

pub mod repositories;
