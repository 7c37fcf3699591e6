//! Shared primitive types used across the planner.

/// A stable, unique identifier for an employee or client record.
pub type EntityId = String;

/// A deal amount. Currency and minor unit are up to the caller.
pub type Money = u64;

/// An integer percentage, e.g. a predicted success rate.
pub type Rate = u32;
