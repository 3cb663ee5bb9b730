pub(crate) mod circle_layout;
pub(crate) mod measure;
pub(crate) mod params;
pub(crate) mod state;
