//! The core evaluation engine behind CascadeDB document pipelines.
//!
//! A pipeline is an ordered list of stages that consumes a vector of
//! documents and produces a new one. This crate owns the value model, the
//! expression evaluator, the stage operators and the stage-list rewriting
//! that guarantees every pipeline output carries a total ordering. It does
//! no I/O: transport, storage and the public SDK surface live elsewhere.

#[macro_use]
extern crate tracing;

pub mod ctx;
pub mod doc;
pub mod err;
pub mod expr;
pub mod fnc;
pub mod pipeline;
