// Library entry so the binary and the test suite share one module tree.
pub mod config;
pub mod logging;
pub mod module;
pub mod server;
