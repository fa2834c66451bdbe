use leptos::prelude::*;

use crate::domain::a001_bill::ui::list::BillsPage;
use crate::domain::a001_bill::ui::new::NewBillPage;
use crate::layout::Shell;
use crate::routes::{use_navigator, Navigator, Route};
use crate::system::session::{self, SessionUser};

#[component]
pub fn App() -> impl IntoView {
    // Navigation is provided to the whole app via context.
    provide_context(Navigator::new());

    // The session is read once; pages get the user by value.
    let user = session::current_user();

    view! {
        <Shell>
            {match user {
                Some(user) => view! { <Pages user=user/> }.into_any(),
                None => view! {
                    <div class="notice">{"Vous n'êtes pas connecté."}</div>
                }.into_any(),
            }}
        </Shell>
    }
}

#[component]
fn Pages(user: SessionUser) -> impl IntoView {
    let navigator = use_navigator();

    view! {
        {move || match navigator.current() {
            Route::Bills => view! { <BillsPage/> }.into_any(),
            Route::NewBill => view! { <NewBillPage user=user.clone()/> }.into_any(),
        }}
    }
}
