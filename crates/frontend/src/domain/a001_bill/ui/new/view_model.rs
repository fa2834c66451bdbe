use std::rc::Rc;

use contracts::domain::a001_bill::aggregate::{
    has_supported_extension, BillDraft, NewBillForm, UploadedReceipt,
};
use leptos::prelude::*;

use crate::domain::a001_bill::store::BillStore;
use crate::routes::{Navigator, Route};
use crate::shared::task;
use crate::system::session::SessionUser;

/// Fixed message of the blocking alert shown for a refused file.
pub const INVALID_EXTENSION_ALERT: &str = "Seuls les fichiers jpg, jpeg et png sont acceptés";

/// Decision taken when a file is picked in the form. Upload is attempted
/// if and only if this returns `Upload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    Upload { file_name: String },
    Rejected,
}

pub fn select_file(file_name: &str) -> FileSelection {
    if has_supported_extension(file_name) {
        FileSelection::Upload {
            file_name: file_name.to_string(),
        }
    } else {
        FileSelection::Rejected
    }
}

/// Issue the single update call for a submitted bill. The caller does not
/// wait for it; failures are logged and nothing else happens.
pub async fn persist(store: &dyn BillStore, draft: BillDraft) {
    if let Err(e) = store.update(&draft).await {
        log::error!("bill update failed: {}", e);
    }
}

/// ViewModel for the bill creation form.
///
/// Holds an `Rc` store and so is not `Send`; the component keeps it in
/// a `StoredValue::new_local` and hands the view only the `Copy`
/// signal handles.
#[derive(Clone)]
pub struct NewBillViewModel {
    store: Rc<dyn BillStore>,
    email: String,
    pub form: RwSignal<NewBillForm>,
    /// Set once the optimistic upload resolves; consumed on submit.
    pub receipt: RwSignal<Option<UploadedReceipt>>,
}

impl NewBillViewModel {
    pub fn new(store: Rc<dyn BillStore>, user: &SessionUser) -> Self {
        Self {
            store,
            email: user.email.clone(),
            form: RwSignal::new(NewBillForm::default()),
            receipt: RwSignal::new(None),
        }
    }

    /// Upload the selected receipt right away, before the form is
    /// submitted. On failure the receipt stays unset and the error is only
    /// logged; a later submit sends the draft without an attachment.
    pub fn upload_command(&self, file: web_sys::File) {
        let store = Rc::clone(&self.store);
        let receipt = self.receipt;
        let email = self.email.clone();
        let file_name = file.name();
        task::spawn_local(async move {
            match store.create(&file, &file_name, &email).await {
                Ok(upload) => receipt.set(Some(UploadedReceipt::new(upload, file_name))),
                Err(e) => log::error!("receipt upload failed: {}", e),
            }
        });
    }

    pub fn draft(&self) -> BillDraft {
        BillDraft::from_form(&self.form.get(), &self.email, self.receipt.get().as_ref())
    }

    /// Assemble the draft, issue the update and navigate back to the
    /// list immediately, without waiting for the store to confirm.
    pub fn submit_command(&self, navigator: Navigator) {
        let draft = self.draft();
        let store = Rc::clone(&self.store);
        task::spawn_local(async move {
            persist(store.as_ref(), draft).await;
        });
        navigator.navigate(Route::Bills);
    }
}
