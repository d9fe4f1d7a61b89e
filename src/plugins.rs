//! Plugins for enhancing the default implementation of taoquiz can be defined in this module.

pub mod mathml;
