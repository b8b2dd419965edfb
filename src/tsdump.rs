//! Main module for tsdump library functionality

pub mod ast;
pub mod building;
pub mod config;
pub mod decoding;
pub mod formats;
pub mod processor;
