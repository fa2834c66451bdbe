use leptos::prelude::*;

/// The two screens of the employee app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Bills,
    NewBill,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Bills => "employee/bills",
            Route::NewBill => "employee/bill/new",
        }
    }
}

/// Context handle that swaps the displayed page. Navigation is a signal
/// swap; the location hash is kept in sync for manual inspection only.
#[derive(Clone, Copy)]
pub struct Navigator {
    current: RwSignal<Route>,
    transitions: RwSignal<u32>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(Route::Bills),
            transitions: RwSignal::new(0),
        }
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    /// Number of navigations performed since startup.
    pub fn transitions(&self) -> u32 {
        self.transitions.get()
    }

    pub fn navigate(&self, route: Route) {
        self.current.set(route);
        self.transitions.update(|n| *n += 1);
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(route.path());
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_bills_list() {
        let navigator = Navigator::new();
        assert_eq!(navigator.current(), Route::Bills);
        assert_eq!(navigator.transitions(), 0);
    }

    #[test]
    fn navigate_swaps_the_current_route() {
        let navigator = Navigator::new();
        navigator.navigate(Route::NewBill);
        assert_eq!(navigator.current(), Route::NewBill);
        assert_eq!(navigator.transitions(), 1);
    }

    #[test]
    fn routes_carry_the_employee_paths() {
        assert_eq!(Route::Bills.path(), "employee/bills");
        assert_eq!(Route::NewBill.path(), "employee/bill/new");
    }
}
