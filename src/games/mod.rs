pub mod hangman;
pub mod rps;
pub mod scramble;
pub mod table;
pub mod words;
