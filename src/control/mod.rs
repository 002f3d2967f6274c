//! Control logic — pure, clock-injected, no I/O.

pub mod pump;
