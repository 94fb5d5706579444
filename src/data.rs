pub mod list_url;
pub mod simple_message;
