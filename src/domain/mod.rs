pub mod health;
pub mod humanize;
