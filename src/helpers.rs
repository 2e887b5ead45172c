#[cfg(not(target_arch = "wasm32"))]
static DOTENV: std::sync::Once = std::sync::Once::new();

/// Reads a variable from the process environment, loading `.env` first.
///
/// There is no process environment in the browser, so this always yields
/// `None` on wasm.
pub fn read_env_var(name: &str) -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        DOTENV.call_once(|| {
            dotenvy::dotenv().ok();
        });
        std::env::var(name).ok()
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = name;
        None
    }
}
