mod conversation_test;
mod language_test;
