//! Shared utilities for driving the viewer loop.

pub mod frame_timing;
