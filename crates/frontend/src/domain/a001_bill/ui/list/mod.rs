//! Bills list page
//!
//! MVVM split as elsewhere in the app:
//! - view_model.rs: fetch/format logic and page state
//! - mod.rs: Leptos component (pure UI)

mod view_model;

pub use view_model::{get_bills, open_new_bill, BillRow, BillsViewModel};

use std::rc::Rc;

use leptos::prelude::*;

use crate::domain::a001_bill::store::RemoteBillStore;
use crate::routes::use_navigator;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

#[component]
#[allow(non_snake_case)]
pub fn BillsPage() -> impl IntoView {
    let navigator = use_navigator();
    let vm = BillsViewModel::new(Rc::new(RemoteBillStore));
    vm.fetch_command();

    // Only the Copy signal handles cross into the view.
    let rows = vm.rows;
    let error = vm.error;
    let preview = vm.preview;

    let handle_click_new_bill = move |_| open_new_bill(navigator);
    let on_close = Callback::new(move |_| preview.set(None));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Mes notes de frais"}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        data-testid="btn-new-bill"
                        on:click=handle_click_new_bill
                    >
                        {icon("plus")}
                        {"Nouvelle note de frais"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" data-testid="error-message">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Type"}</th>
                            <th class="table__header-cell">{"Nom"}</th>
                            <th class="table__header-cell">{"Date"}</th>
                            <th class="table__header-cell">{"Montant"}</th>
                            <th class="table__header-cell">{"Statut"}</th>
                            <th class="table__header-cell">{"Justificatif"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            let file_url = row.file_url.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.bill_type}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.date}</td>
                                    <td class="table__cell">{row.amount}</td>
                                    <td class="table__cell">{row.status}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--icon"
                                            data-testid="icon-eye"
                                            on:click=move |_| preview.set(file_url.clone())
                                        >
                                            {icon("eye")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || preview.get().is_some()>
                <Modal title="Justificatif".to_string() on_close=on_close>
                    <div class="bill-proof-container">
                        {move || preview.get().map(|url| view! {
                            <img src=url alt="Bill" style="max-width: 50%;"/>
                        })}
                    </div>
                </Modal>
            </Show>
        </div>
    }
}
