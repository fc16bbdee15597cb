//! FFI Types - C-compatible type definitions

use genesis_core::CoreState;

/// Core lifecycle state
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenesisCoreState {
    Uninitialized = 0,
    Ready = 1,
    Failed = 2,
}

impl From<CoreState> for GenesisCoreState {
    fn from(state: CoreState) -> Self {
        match state {
            CoreState::Uninitialized => Self::Uninitialized,
            CoreState::Ready => Self::Ready,
            CoreState::Failed => Self::Failed,
        }
    }
}
