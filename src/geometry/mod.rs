pub mod hit_testing;

pub use hit_testing::{hit_test, is_on_handle, HANDLE_RADIUS};
