pub(crate) mod swatch;
