mod adapter_impl;

pub use adapter_impl::*;
