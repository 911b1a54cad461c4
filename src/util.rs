pub mod callback;
pub(crate) mod sleep;
pub(crate) mod timer;
