pub mod random;
pub mod sidecar;
