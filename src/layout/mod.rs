pub(crate) mod geometry;
pub(crate) mod observer;
pub(crate) mod page;
