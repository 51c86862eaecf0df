// Mappers module
// Translates between the OpenAI surface and the Julius backend

pub mod openai;
