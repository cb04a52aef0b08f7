pub(crate) mod band;
pub(crate) mod direction;
pub(crate) mod signal;
