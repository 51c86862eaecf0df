// Handlers module - API endpoint handlers

pub mod liveness;
pub mod openai;
