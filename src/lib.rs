pub mod client;
pub mod codec;
pub mod errors;
pub mod logging;
pub mod schema;
pub mod shared;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
