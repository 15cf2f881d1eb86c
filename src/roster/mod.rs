//! Roster domain: state machine, static taxonomy, rendering, pagination.

pub mod paginate;
pub mod render;
pub mod store;
pub mod taxonomy;

#[cfg(test)]
mod test;
