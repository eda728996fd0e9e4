//! Background Tasks Module
//!
//! Contains background tasks that run periodically while a cache is alive.
//!
//! # Tasks
//! - TTL Sweep: Removes expired cache entries once per cache interval

mod sweep;

pub(crate) use sweep::spawn_sweep_task;
