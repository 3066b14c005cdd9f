pub mod crud;
pub mod dashboard;
mod screens;
