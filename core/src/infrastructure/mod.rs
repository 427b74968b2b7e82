pub mod capture;
pub mod llm;
