//! Application service layer - config, workbook resolution, export

pub mod config;
pub mod export;
pub mod repository;
