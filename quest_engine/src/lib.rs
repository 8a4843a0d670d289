//! # Quest Engine
//!
//! Turns a career profile into the CV Quest deck graph and checks that graph for
//! structural defects.
//!
//! ## Core Components
//!
//! - **profile**: The career profile record the builder consumes
//! - **builder**: Deterministic profile -> graph construction
//! - **validator**: Reference, size, mini-game and reachability checks over any graph
//!
//! Data flows one way: profile -> builder -> graph -> validator -> report. The
//! validator only looks at graph shape, so hand-authored graphs validate the same
//! way as generated ones.

pub mod builder;
pub mod profile;
pub mod validator;

pub use builder::*;
pub use profile::*;
pub use validator::*;
