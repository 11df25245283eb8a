pub mod agent;
pub mod openai;
pub mod translator;
