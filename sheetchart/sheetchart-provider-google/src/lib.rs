pub mod contracts;
pub mod sheets_client;
