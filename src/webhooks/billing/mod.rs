pub mod controller;
pub mod service;
pub mod structs;
