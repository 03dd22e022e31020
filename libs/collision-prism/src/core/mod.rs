//! Core abstractions the prism is generic over.
//!
//! Includes the vector kernel adapter (`Vector`, `Real`) and the pool index
//! width (`PoolIndex`).

pub mod index;
pub mod vector;
