// Public library interface for spendmap
// The debug-layout tool drives the same modules

pub mod aggregate;
pub mod layout;
