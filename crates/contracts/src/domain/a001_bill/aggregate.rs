use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Review status of a bill, as assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Parse the wire value. Unknown values are a per-record condition,
    /// not a deserialization failure (the list keeps raw strings).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "refused" => Some(Self::Refused),
            _ => None,
        }
    }

    /// Display label shown in the bills table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Accepted => "Accepté",
            Self::Refused => "Refused",
        }
    }
}

// ============================================================================
// Wire record
// ============================================================================

/// A bill as returned by the remote store.
///
/// `status` stays a raw string here so that a single record with an
/// unexpected status cannot fail deserialization of the whole list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,

    #[serde(default)]
    pub email: String,

    #[serde(rename = "type", default)]
    pub bill_type: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub amount: Option<i64>,

    /// ISO calendar date at rest, e.g. "2020-03-01".
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub vat: String,

    #[serde(default)]
    pub pct: Option<u32>,

    #[serde(default)]
    pub commentary: String,

    #[serde(rename = "fileUrl", default)]
    pub file_url: Option<String>,

    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,

    #[serde(default)]
    pub status: String,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Raw field values of the new-bill form, exactly as entered.
///
/// Coercion happens when the draft is assembled; only `pct` has a
/// default, everything else passes through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub expense_name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl NewBillForm {
    /// The VAT percentage, defaulting to 20 when the field is empty or
    /// not a non-negative integer.
    pub fn pct_or_default(&self) -> u32 {
        self.pct.trim().parse().unwrap_or(20)
    }
}

/// The record persisted via `update` when the form is submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillDraft {
    /// Store-assigned key received from the upload, when it completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub email: String,

    #[serde(rename = "type")]
    pub bill_type: String,

    pub name: String,

    /// Parsed from the form; an unparseable entry is sent as null.
    pub amount: Option<i64>,

    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,

    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,

    #[serde(rename = "fileName")]
    pub file_name: Option<String>,

    pub status: String,
}

impl BillDraft {
    /// Assemble the draft submitted to the store from the form fields,
    /// the upload held so far (possibly none, no waiting) and the owner.
    pub fn from_form(form: &NewBillForm, email: &str, receipt: Option<&UploadedReceipt>) -> Self {
        Self {
            id: receipt.map(|r| r.key.clone()),
            email: email.to_string(),
            bill_type: form.expense_type.clone(),
            name: form.expense_name.clone(),
            amount: form.amount.trim().parse().ok(),
            date: form.date.clone(),
            vat: form.vat.clone(),
            pct: form.pct_or_default(),
            commentary: form.commentary.clone(),
            file_url: receipt.map(|r| r.file_url.clone()),
            file_name: receipt.map(|r| r.file_name.clone()),
            status: "pending".to_string(),
        }
    }
}

/// Wire result of uploading a receipt: the stored file location and the
/// store-assigned key the final record is updated under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptUpload {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    pub key: String,
}

/// Upload result held by the creation form between file selection and
/// submit, together with the original file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedReceipt {
    pub key: String,
    pub file_url: String,
    pub file_name: String,
}

impl UploadedReceipt {
    pub fn new(upload: ReceiptUpload, file_name: String) -> Self {
        Self {
            key: upload.key,
            file_url: upload.file_url,
            file_name,
        }
    }
}

// ============================================================================
// Attachment gate
// ============================================================================

/// Receipt formats accepted for upload.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// True when the file name carries a supported extension
/// (case-insensitive). Upload must not be attempted otherwise.
/// Dotfiles like ".png" count as having an extension.
pub fn has_supported_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_defaults_to_20_when_blank_or_invalid() {
        let mut form = NewBillForm::default();
        assert_eq!(form.pct_or_default(), 20);

        form.pct = "abc".to_string();
        assert_eq!(form.pct_or_default(), 20);

        form.pct = "-5".to_string();
        assert_eq!(form.pct_or_default(), 20);
    }

    #[test]
    fn pct_uses_entered_integer() {
        let form = NewBillForm {
            pct: "10".to_string(),
            ..Default::default()
        };
        assert_eq!(form.pct_or_default(), 10);
    }

    #[test]
    fn draft_passes_fields_through() {
        let form = NewBillForm {
            expense_type: "Transport".to_string(),
            expense_name: "Vol Paris Londres".to_string(),
            date: "2023-01-01".to_string(),
            amount: "100".to_string(),
            vat: "20".to_string(),
            pct: "".to_string(),
            commentary: "déplacement client".to_string(),
        };
        let receipt = UploadedReceipt {
            key: "1234".to_string(),
            file_url: "https://store/receipt.jpg".to_string(),
            file_name: "receipt.jpg".to_string(),
        };
        let draft = BillDraft::from_form(&form, "employee@test.com", Some(&receipt));

        assert_eq!(draft.id.as_deref(), Some("1234"));
        assert_eq!(draft.email, "employee@test.com");
        assert_eq!(draft.bill_type, "Transport");
        assert_eq!(draft.amount, Some(100));
        assert_eq!(draft.pct, 20);
        assert_eq!(draft.status, "pending");
        assert_eq!(draft.file_name.as_deref(), Some("receipt.jpg"));
    }

    #[test]
    fn draft_without_upload_has_no_attachment_reference() {
        let form = NewBillForm {
            amount: "cent".to_string(),
            ..Default::default()
        };
        let draft = BillDraft::from_form(&form, "e@e", None);
        assert_eq!(draft.id, None);
        assert_eq!(draft.file_url, None);
        assert_eq!(draft.file_name, None);
        // unparseable amount is sent as null, not rejected
        assert_eq!(draft.amount, None);

        let json = serde_json::to_value(&draft).unwrap();
        assert!(json["amount"].is_null());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn extension_gate_accepts_only_images() {
        assert!(has_supported_extension("receipt.jpg"));
        assert!(has_supported_extension("receipt.JPEG"));
        assert!(has_supported_extension("scan.PNG"));
        // a dotfile still has an extension
        assert!(has_supported_extension(".png"));
        assert!(!has_supported_extension("document.pdf"));
        assert!(!has_supported_extension("notes.txt"));
        assert!(!has_supported_extension("noextension"));
        assert!(!has_supported_extension("archive.png.pdf"));
    }

    #[test]
    fn status_parses_known_values_only() {
        assert_eq!(BillStatus::parse("pending"), Some(BillStatus::Pending));
        assert_eq!(BillStatus::parse("accepted"), Some(BillStatus::Accepted));
        assert_eq!(BillStatus::parse("refused"), Some(BillStatus::Refused));
        assert_eq!(BillStatus::parse("archived"), None);
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let json = r#"{
            "id": "47qAXb6fIm2zOKkLzMro",
            "email": "a@a",
            "type": "Hôtel et logement",
            "name": "encore",
            "amount": 400,
            "date": "2004-04-04",
            "vat": "80",
            "pct": 20,
            "commentary": "séminaire billed",
            "fileUrl": "https://store/preview/47qAXb6fIm2zOKkLzMro",
            "fileName": "preview-facture.jpg",
            "status": "pending"
        }"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.bill_type, "Hôtel et logement");
        assert_eq!(bill.file_name.as_deref(), Some("preview-facture.jpg"));
        assert_eq!(bill.status, "pending");
    }
}
