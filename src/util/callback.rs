//! Navigation callback handed to the host application.

use crate::route::Route;
use parking_lot::Mutex;
use std::{fmt, sync::Arc};

pub(crate) type OnNavigateInner = Box<dyn FnMut(Route) + Send>;

/// The callback executed when a screen asks to move to another [`Route`].
///
/// # Usage
/// ```
/// use sticky_notes::{callback::OnNavigate, route::Route};
///
/// let on_navigate = OnNavigate::from(|route: Route| {
///     // Show the screen for `route`
/// });
/// ```
#[derive(Clone)]
pub struct OnNavigate(pub(crate) Arc<Mutex<OnNavigateInner>>);

impl OnNavigate {
    pub(crate) fn call(&self, route: Route) {
        (self.0.lock())(route);
    }
}

impl<F> From<F> for OnNavigate
where
    F: FnMut(Route) + Send + 'static,
{
    fn from(f: F) -> Self {
        OnNavigate(Arc::new(Mutex::new(Box::new(f))))
    }
}

impl fmt::Debug for OnNavigate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OnNavigate").finish_non_exhaustive()
    }
}
