//! Compile tests for the public macros.
//!
//! Each program under `tests/ui/` uses the exported macros the way a
//! downstream crate would, through `fncomb::` paths only.
//!
//! Note: trybuild tests use #[test] as an exception because
//! trybuild's standard usage pattern requires it.

#![cfg(all(feature = "compose", feature = "keypath", feature = "derive"))]

#[test]
fn macro_pass_tests() {
    let test_cases = trybuild::TestCases::new();
    test_cases.pass("tests/ui/*.rs");
}
