//! New bill page
//!
//! - view_model.rs: file gate, upload/submit commands and form state
//! - mod.rs: Leptos component (pure UI)

mod view_model;

pub use view_model::{persist, select_file, FileSelection, NewBillViewModel, INVALID_EXTENSION_ALERT};

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::domain::a001_bill::store::RemoteBillStore;
use crate::routes::use_navigator;
use crate::system::session::SessionUser;

const EXPENSE_TYPES: [&str; 7] = [
    "Transport",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

#[component]
#[allow(non_snake_case)]
pub fn NewBillPage(user: SessionUser) -> impl IntoView {
    let navigator = use_navigator();
    let vm = NewBillViewModel::new(Rc::new(RemoteBillStore), &user);

    // The form signal is Copy and crosses into the view closures; the
    // VM itself is not Send, store it locally for the event handlers.
    let form = vm.form;
    let vm_sv = StoredValue::new_local(vm);

    let handle_change_file = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
        let Some(input) = input else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        match select_file(&file.name()) {
            FileSelection::Upload { .. } => vm_sv.get_value().upload_command(file),
            FileSelection::Rejected => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(INVALID_EXTENSION_ALERT);
                }
                input.set_value("");
            }
        }
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm_sv.get_value().submit_command(navigator);
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Envoyer une note de frais"}</h1>
                </div>
            </div>

            <form class="details-form" data-testid="form-new-bill" on:submit=handle_submit>
                <div class="form-group">
                    <label for="expense-type">{"Type de dépense"}</label>
                    <select
                        id="expense-type"
                        data-testid="expense-type"
                        prop:value=move || form.get().expense_type
                        on:change=move |ev| {
                            form.update(|f| f.expense_type = event_target_value(&ev));
                        }
                    >
                        {EXPENSE_TYPES
                            .iter()
                            .map(|t| view! { <option value=*t>{*t}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="expense-name">{"Nom de la dépense"}</label>
                    <input
                        type="text"
                        id="expense-name"
                        data-testid="expense-name"
                        placeholder="Vol Paris Londres"
                        prop:value=move || form.get().expense_name
                        on:input=move |ev| {
                            form.update(|f| f.expense_name = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="datepicker">{"Date"}</label>
                    <input
                        type="date"
                        id="datepicker"
                        data-testid="datepicker"
                        prop:value=move || form.get().date
                        on:input=move |ev| {
                            form.update(|f| f.date = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="amount">{"Montant TTC"}</label>
                    <input
                        type="number"
                        id="amount"
                        data-testid="amount"
                        placeholder="348"
                        prop:value=move || form.get().amount
                        on:input=move |ev| {
                            form.update(|f| f.amount = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="vat">{"TVA"}</label>
                    <input
                        type="number"
                        id="vat"
                        data-testid="vat"
                        placeholder="70"
                        prop:value=move || form.get().vat
                        on:input=move |ev| {
                            form.update(|f| f.vat = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="pct">{"%"}</label>
                    <input
                        type="number"
                        id="pct"
                        data-testid="pct"
                        placeholder="20"
                        prop:value=move || form.get().pct
                        on:input=move |ev| {
                            form.update(|f| f.pct = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="commentary">{"Commentaire"}</label>
                    <textarea
                        id="commentary"
                        data-testid="commentary"
                        rows="3"
                        prop:value=move || form.get().commentary
                        on:input=move |ev| {
                            form.update(|f| f.commentary = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="file">{"Justificatif"}</label>
                    <input
                        type="file"
                        id="file"
                        data-testid="file"
                        on:change=handle_change_file
                    />
                </div>

                <div class="details-actions">
                    <button type="submit" class="button button--primary" data-testid="btn-send-bill">
                        {"Envoyer"}
                    </button>
                </div>
            </form>
        </div>
    }
}
