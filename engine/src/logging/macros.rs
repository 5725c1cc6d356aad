/// Log through `tracing` only when the scope is enabled by the installed `LogConfig`.
#[macro_export]
macro_rules! scoped_log {
    ($level:ident, $scope:expr, $($arg:tt)*) => {
        if $crate::logging::get_log_config().should_log($scope, $crate::logging::Level::$level) {
            tracing::event!($crate::logging::Level::$level, scope = $scope, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! teleport_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "teleport", $($arg)*);
    };
}

#[macro_export]
macro_rules! input_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "input", $($arg)*);
    };
}

#[macro_export]
macro_rules! scene_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "scene", $($arg)*);
    };
}

#[macro_export]
macro_rules! xr_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "xr", $($arg)*);
    };
}

#[macro_export]
macro_rules! game_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "game", $($arg)*);
    };
}
