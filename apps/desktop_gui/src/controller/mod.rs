//! Controller layer: UI actions and how they are queued and applied to the view state.

pub mod events;
pub mod orchestration;
