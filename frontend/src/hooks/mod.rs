pub mod use_controller;
pub mod use_countdown;
