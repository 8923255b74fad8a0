//! Application layer: turns page events into animated scene state.
//!
//! - [`ScrollSession`]: platform-independent event → animator → rig glue
//! - [`Debouncer`]: trailing-edge rate limiting for scroll events
//! - [`Section`]: the landing-page sections a session can be mounted on
//! - `web` (WASM only): DOM listener and animation-frame wiring

pub mod debounce;
pub mod section;
pub mod session;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use debounce::Debouncer;
pub use section::{FALLBACK_MESSAGE, Section};
pub use session::ScrollSession;
pub use settings::AnimatorSettings;

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;

/// Installs the platform logger: `env_logger` natively (filtered by
/// `RUST_LOG`, default `info`), the browser console on WASM.
///
/// Calling it more than once is harmless.
pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let env = env_logger::Env::default().default_filter_or("info");
        if env_logger::Builder::from_env(env).try_init().is_err() {
            log::debug!("Logger already initialized");
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("Logger already initialized");
        }
    }
}
