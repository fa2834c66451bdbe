use crate::routes::{use_navigator, Route};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Vertical icon bar plus content area. The icon of the current route
/// carries the `active-icon` class.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <div class="app">
            <nav class="sidebar">
                <button
                    class="sidebar__icon"
                    class:active-icon=move || navigator.current() == Route::Bills
                    data-testid="icon-window"
                    title="Mes notes de frais"
                    on:click=move |_| navigator.navigate(Route::Bills)
                >
                    {icon("window")}
                </button>
                <button
                    class="sidebar__icon"
                    class:active-icon=move || navigator.current() == Route::NewBill
                    data-testid="icon-mail"
                    title="Envoyer une note de frais"
                    on:click=move |_| navigator.navigate(Route::NewBill)
                >
                    {icon("mail")}
                </button>
            </nav>
            <main class="content">{children()}</main>
        </div>
    }
}
