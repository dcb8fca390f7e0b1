/// Asserts that running `$run` panics, catching the panic so the test can carry on. Used to check
/// the `# Panics` contracts of this crate, which all go through
/// [`throw`](crate::util::result::ResultExtension::throw).
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "expected a panic, but the block returned normally")
    };
    ($run:block, $msg:literal) => {{
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(outcome.is_err(), $msg);
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
