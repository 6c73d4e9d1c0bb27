//! Domain layer: the transaction entity, invocation targets and the ports
//! that adapters implement.

pub mod invocation;
pub mod ports;
pub mod transaction;
