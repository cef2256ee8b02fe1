pub mod a001_llm_model;
pub mod a002_upload_settings;
pub mod a003_chat_message;
