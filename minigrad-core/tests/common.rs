// Shared by several test crates; not every one uses every helper.
#[allow(unused_imports)]
pub(crate) use minigrad_core::utils::testing::leaves;

/// Installs a test logger once. Later calls are no-ops.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
