//! Domain model types for Memory Capsule.

pub mod capsule;
