//! Integration tests for the scene module
//!
//! Multi-module flows: deep hierarchies feeding cameras and renderable
//! bindings through the full mutate → update → read frame contract.

mod hierarchy_chain;
