pub(crate) mod active;
