//! Process bootstrap helpers run once from `main` before serving.

pub mod logger;
