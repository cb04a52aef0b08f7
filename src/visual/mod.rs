pub(crate) mod accent;
pub(crate) mod state;
