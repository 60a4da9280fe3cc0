mod root_reference;

pub use root_reference::RootReferencePolicy;
