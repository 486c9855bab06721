//! Core data models for the Settlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod expense;
mod inputs;
mod raw_input;
mod settlement;

pub use expense::ExpenseEntry;
pub use inputs::SettlementInputs;
pub use raw_input::{RawAmount, RawExpenseEntry, RawSettlementInputs};
pub use settlement::{ResultRow, SettlementBreakdown, SettlementReport};
