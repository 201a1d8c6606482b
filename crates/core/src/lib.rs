#![deny(warnings)]

pub mod bulk;
pub mod cache;
pub mod config;
pub mod content;
pub mod context;
pub mod language;
pub mod phrases;
pub mod prefs;
pub mod resolver;
pub mod translate;
