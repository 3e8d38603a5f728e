//! Core library for utilikit
//!
//! This crate implements the **Functional Core** of the utilikit application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The utilikit project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`utilikit_core`** (this crate): Pure transformation functions with zero I/O
//! - **`utilikit`**: Terminal I/O and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! The one exception is [`store`], which persists user-defined unit tables to
//! a caller-supplied directory. It takes the directory as an argument instead
//! of reaching for ambient global state, so it stays testable with a temp dir.
//!
//! # Module Organization
//!
//! The core crate is organized by domain:
//!
//! - [`units`]: Unit-value conversion through a validated factor table
//! - [`tables`]: Built-in unit tables (length, weight, volume, speed, ...)
//! - [`format`]: Shared numeric display formatting used by every converter
//! - [`encode`]: Base64 encoding and decoding of Unicode text
//! - [`text`]: Newline, indentation, splitting, and truncation transforms
//! - [`stats`]: Descriptive statistics summary
//! - [`store`]: Persistence for user-defined unit tables
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing inputs and outputs
//! - **Transformation functions**: Pure functions over those models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use utilikit_core::tables::builtin_table;
//! use utilikit_core::units::convert;
//! use utilikit_core::format::format_value;
//!
//! let table = builtin_table("weight").unwrap();
//! let results = convert(2.5, "kilogram", &table).unwrap();
//!
//! for conversion in results {
//!     println!("{}: {}", conversion.unit_id, format_value(conversion.value));
//! }
//! ```
//!
//! # Pattern Reference
//!
//! This architecture is based on Gary Bernhardt's Functional Core, Imperative Shell
//! pattern. The key insight: **data transformation logic should be pure and ignorant
//! of where data comes from or where it goes**.

pub mod encode;
pub mod format;
pub mod stats;
pub mod store;
pub mod tables;
pub mod text;
pub mod units;
