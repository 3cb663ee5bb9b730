pub(crate) mod buffers;
pub(crate) mod cache;
pub(crate) mod composite;
pub(crate) mod compositor;
pub(crate) mod frame;
pub(crate) mod surface;
