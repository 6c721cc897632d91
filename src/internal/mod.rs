pub mod favorites;
pub mod history;
pub mod models;
pub mod notification;
pub mod samples;
pub mod ui;
