/// Time a block and report the elapsed duration at TRACE level under the `profile` scope.
#[macro_export]
macro_rules! profile {
    ($description:expr, $block:expr) => {{
        let start = std::time::Instant::now();
        let result = $block;
        let duration = start.elapsed();
        $crate::scoped_log!(TRACE, "profile", "[{}]: Time elapsed: {:?}", $description, duration);
        result
    }};
}
