//! Spawning for fire-and-forget store calls.
//!
//! On wasm the future is handed to the browser microtask queue. Native
//! builds have no such queue, so the future runs to completion inline;
//! only tests compile for native targets.

use std::future::Future;

#[cfg(target_arch = "wasm32")]
pub fn spawn_local<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(fut);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_local<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    futures::executor::block_on(fut);
}
