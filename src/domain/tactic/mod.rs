pub mod client;
pub mod dto;
pub mod handler;
pub mod prompt;
pub mod service;
pub mod validator;

pub use client::{AiClient, AiClientTrait, OpenAiClient};
pub use dto::{GenerateTacticRequest, GenerateTacticResponse};
pub use service::TacticService;
