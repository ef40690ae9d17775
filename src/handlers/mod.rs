pub mod auth;
pub mod tasks;
pub mod web;
