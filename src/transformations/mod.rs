pub mod config;
pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod replicate;
pub mod runner;
pub mod service;
pub mod sleeper;
pub mod structs;
