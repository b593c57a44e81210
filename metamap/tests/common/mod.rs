// Not every utils is used in every test, so we allow dead code
#![allow(unused_imports, dead_code)]

mod mock_server;
pub use mock_server::*;
mod test_setup;
pub use test_setup::*;
