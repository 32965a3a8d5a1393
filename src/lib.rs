pub mod catalog;
pub mod cli;
pub mod config;
pub mod console;
pub mod contact;
pub mod logging;
pub mod notify;
pub mod selection;
pub mod session;
pub mod submission;
pub mod view;
