pub mod candidates;
pub mod common;
pub mod dict;
pub mod mapping;
pub mod search;
pub mod settings;
pub mod stats;
pub mod text;
pub mod token;
