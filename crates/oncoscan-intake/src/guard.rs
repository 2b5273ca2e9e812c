use oncoscan_core::routes::LOGIN_ROUTE;

use crate::navigation::Navigation;

/// What the router should do with a protected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision<V> {
    Render(V),
    Redirect(Navigation),
}

impl<V> RouteDecision<V> {
    pub fn into_view(self) -> Option<V> {
        match self {
            RouteDecision::Render(view) => Some(view),
            RouteDecision::Redirect(_) => None,
        }
    }

    pub fn redirect(&self) -> Option<&Navigation> {
        match self {
            RouteDecision::Render(_) => None,
            RouteDecision::Redirect(nav) => Some(nav),
        }
    }
}

/// Pass `child` through for authenticated users; otherwise send them to
/// the login page, replacing the current history entry.
pub fn route_guard<V>(is_authenticated: bool, child: V) -> RouteDecision<V> {
    if is_authenticated {
        RouteDecision::Render(child)
    } else {
        RouteDecision::Redirect(Navigation::replace(LOGIN_ROUTE))
    }
}
