pub mod database;
pub mod prefix_db;
pub mod document_db;
pub mod document_store;
pub mod case_numbers;
pub mod bot_notes;
pub mod prefixes;
pub mod message_handler;
pub mod bot_init;
