use std::rc::Rc;

use contracts::domain::a001_bill::aggregate::Bill;
use leptos::prelude::*;

use crate::domain::a001_bill::store::BillStore;
use crate::routes::{Navigator, Route};
use crate::shared::format::{format_date, format_status};
use crate::shared::task;

/// One row of the bills table, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub id: String,
    pub bill_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub status: String,
    pub file_url: Option<String>,
}

fn to_row(bill: Bill) -> BillRow {
    let date = match format_date(&bill.date) {
        Ok(formatted) => formatted,
        Err(e) => {
            // degraded output, the record is kept with its raw date
            log::warn!("bill {}: {}", bill.id, e);
            bill.date.clone()
        }
    };
    let status = match format_status(&bill.status) {
        Some(label) => label.to_string(),
        None => {
            log::warn!("bill {}: unknown status {:?}", bill.id, bill.status);
            bill.status.clone()
        }
    };

    BillRow {
        id: bill.id,
        bill_type: bill.bill_type,
        name: bill.name,
        date,
        amount: bill.amount.map(|a| format!("{} €", a)).unwrap_or_default(),
        status,
        file_url: bill.file_url,
    }
}

/// Fetch and format the bills, oldest first.
///
/// Same cardinality out as in: a record whose date or status cannot be
/// formatted keeps the raw value instead of failing the batch. A store
/// rejection propagates as is ("Erreur 404", "Erreur 500", ...).
pub async fn get_bills(store: &dyn BillStore) -> Result<Vec<BillRow>, String> {
    let mut bills = store.list().await?;
    // ISO dates order lexicographically
    bills.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(bills.into_iter().map(to_row).collect())
}

/// Click handler of the new-bill button: a single navigation to the form.
pub fn open_new_bill(navigator: Navigator) {
    navigator.navigate(Route::NewBill);
}

/// ViewModel for the bills list page.
///
/// The view captures only the `Copy` signal handles; the `Rc` store is
/// touched solely from the spawned command (render closures and
/// `Callback` must be `Send + Sync`, an `Rc` is neither).
#[derive(Clone)]
pub struct BillsViewModel {
    store: Rc<dyn BillStore>,
    pub rows: RwSignal<Vec<BillRow>>,
    pub error: RwSignal<Option<String>>,
    /// File URL currently shown in the preview modal.
    pub preview: RwSignal<Option<String>>,
}

impl BillsViewModel {
    pub fn new(store: Rc<dyn BillStore>) -> Self {
        Self {
            store,
            rows: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            preview: RwSignal::new(None),
        }
    }

    pub fn fetch_command(&self) {
        let store = Rc::clone(&self.store);
        let rows = self.rows;
        let error = self.error;
        task::spawn_local(async move {
            match get_bills(store.as_ref()).await {
                Ok(v) => {
                    rows.set(v);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::a001_bill::aggregate::{BillDraft, ReceiptUpload};
    use futures::executor::block_on;

    struct MockStore {
        bills: Result<Vec<Bill>, String>,
    }

    #[async_trait(?Send)]
    impl BillStore for MockStore {
        async fn list(&self) -> Result<Vec<Bill>, String> {
            self.bills.clone()
        }

        async fn create(
            &self,
            _file: &web_sys::File,
            _file_name: &str,
            _email: &str,
        ) -> Result<ReceiptUpload, String> {
            unreachable!("list tests never upload")
        }

        async fn update(&self, _draft: &BillDraft) -> Result<Bill, String> {
            unreachable!("list tests never update")
        }
    }

    fn bill(id: &str, date: &str, status: &str) -> Bill {
        Bill {
            id: id.to_string(),
            email: "a@a".to_string(),
            bill_type: "Transport".to_string(),
            name: id.to_string(),
            amount: Some(100),
            date: date.to_string(),
            vat: "20".to_string(),
            pct: Some(20),
            commentary: String::new(),
            file_url: Some(format!("https://store/preview/{}", id)),
            file_name: Some("receipt.jpg".to_string()),
            status: status.to_string(),
        }
    }

    #[test]
    fn bills_are_formatted_and_ordered_from_earliest_to_latest() {
        let store = MockStore {
            bills: Ok(vec![
                bill("b1", "2020-03-01", "pending"),
                bill("b2", "2019-07-10", "accepted"),
                bill("b3", "2021-01-05", "refused"),
            ]),
        };

        let rows = block_on(get_bills(&store)).unwrap();

        assert_eq!(rows.len(), 3);
        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["10 Jui. 19", "1 Mar. 20", "5 Jan. 21"]);
        assert_eq!(rows[0].status, "Accepté");
        assert_eq!(rows[1].status, "En attente");
        assert_eq!(rows[2].status, "Refused");
    }

    #[test]
    fn formatting_failure_keeps_the_record_raw() {
        let store = MockStore {
            bills: Ok(vec![
                bill("b1", "invalid-date", "pending"),
                bill("b2", "2020-03-01", "archived"),
            ]),
        };

        let rows = block_on(get_bills(&store)).unwrap();

        // no record is dropped
        assert_eq!(rows.len(), 2);
        // raw values pass through untouched
        assert_eq!(rows[0].date, "invalid-date");
        assert_eq!(rows[0].status, "En attente");
        assert_eq!(rows[1].date, "1 Mar. 20");
        assert_eq!(rows[1].status, "archived");
    }

    #[test]
    fn store_rejection_propagates() {
        let store = MockStore {
            bills: Err("Erreur 404".to_string()),
        };
        assert_eq!(block_on(get_bills(&store)), Err("Erreur 404".to_string()));

        let store = MockStore {
            bills: Err("Erreur 500".to_string()),
        };
        assert_eq!(block_on(get_bills(&store)), Err("Erreur 500".to_string()));
    }

    #[test]
    fn fetch_command_fills_the_row_signal() {
        let vm = BillsViewModel::new(Rc::new(MockStore {
            bills: Ok(vec![bill("b1", "2020-03-01", "pending")]),
        }));

        vm.fetch_command();

        assert_eq!(vm.rows.get_untracked().len(), 1);
        assert_eq!(vm.error.get_untracked(), None);
    }

    #[test]
    fn fetch_command_surfaces_the_store_error() {
        let vm = BillsViewModel::new(Rc::new(MockStore {
            bills: Err("Erreur 404".to_string()),
        }));

        vm.fetch_command();

        assert!(vm.rows.get_untracked().is_empty());
        assert_eq!(vm.error.get_untracked(), Some("Erreur 404".to_string()));
    }

    #[test]
    fn new_bill_click_is_a_single_navigation_to_the_form() {
        let navigator = Navigator::new();

        open_new_bill(navigator);

        assert_eq!(navigator.current(), Route::NewBill);
        assert_eq!(navigator.transitions(), 1);
    }
}
