#[macro_use]
extern crate log;
#[macro_use]
extern crate async_trait;

pub mod error;
/// Filesystem driver
pub mod fs;
/// Remote protocol grammar
pub mod protocol;
/// Remote call transport
pub mod remote;
mod wire;
