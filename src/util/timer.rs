//! Pacing delay between a confirmed write and the move back to the dashboard.

use crate::{route::Route, util::callback::OnNavigate};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
#[cfg(feature = "tracing")]
use tracing::debug;

/// Calls `on_navigate` with `route` once `delay` has elapsed, unless `mounted` has been cleared
/// by then.
///
/// A zero delay navigates immediately. On native targets the timer runs on the current Tokio
/// runtime; without one the navigation happens immediately instead.
pub(crate) fn schedule_navigation(
    delay: Duration,
    route: Route,
    on_navigate: Option<OnNavigate>,
    mounted: Arc<AtomicBool>,
) {
    if delay.is_zero() {
        navigate(route, on_navigate.as_ref(), &mounted);
        return;
    }

    #[cfg(target_family = "wasm")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            super::sleep::sleep(delay).await;
            navigate(route, on_navigate.as_ref(), &mounted);
        });
    }
    #[cfg(not(target_family = "wasm"))]
    {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    super::sleep::sleep(delay).await;
                    navigate(route, on_navigate.as_ref(), &mounted);
                });
            }
            Err(_) => {
                #[cfg(feature = "tracing")]
                debug!("No async runtime, navigating without delay");
                navigate(route, on_navigate.as_ref(), &mounted);
            }
        }
    }
}

fn navigate(route: Route, on_navigate: Option<&OnNavigate>, mounted: &AtomicBool) {
    if !mounted.load(Ordering::SeqCst) {
        #[cfg(feature = "tracing")]
        debug!("Screen torn down, dropping navigation to {route}");
        return;
    }
    #[cfg(feature = "tracing")]
    debug!("Navigating to {route}");
    if let Some(on_navigate) = on_navigate {
        on_navigate.call(route);
    }
}
