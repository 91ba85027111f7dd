//! Paginated, searchable call-log list: state machine, debounce, and the
//! optimistic favorite-toggle coordinator.

pub mod controller;
pub mod debounce;
pub mod favorites;
pub mod ports;
pub mod state;
