//! Tests for the selection manager
//!
//! These tests verify that selection operations:
//! 1. Mutate the frame exactly as described
//! 2. Emit one replay record per mutation, in order
//! 3. Replay to the same pixels on undo/redo

mod helpers;
mod shortcuts;
