//! Route classification and the redirect decision engine.
//!
//! DESIGN
//! ======
//! - `pattern`: segment matching for declared paths.
//! - `spec`: `RouteSpec` and the three access tiers.
//! - `classifier`: the declared tables and the effective-table merge.
//! - `gate`: the two-state guard over the authenticated-only subtree.
//! - `navigator`: table lookup followed by the gate, yielding a `Navigation`.

pub mod classifier;
pub mod gate;
pub mod navigator;
pub mod pattern;
pub mod spec;

pub use classifier::{RouteClassifier, RouteMatch, RouteTable, TableEntry};
pub use gate::{AccessDecision, AccessGate, GateState};
pub use navigator::{Navigation, Navigator};
pub use pattern::RouteParams;
pub use spec::{RouteSpec, RouteTier};
