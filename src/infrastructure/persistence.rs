use crate::domain::{ApplicationForm, Order};
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Simulated backend latency for draft saves, in milliseconds.
const DRAFT_SAVE_DELAY_MS: u64 = 150;
/// Simulated backend latency for application submission.
const SUBMIT_DELAY_MS: u64 = 400;

fn sanitize_key(email: &str) -> String {
    email
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '-' | '_' | '+') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// File-backed key-value store for application drafts, one JSON file per
/// business email. Last write wins; drafts are never expired.
pub struct DraftStore {
    base_dir: PathBuf,
}

impl Default for DraftStore {
    fn default() -> Self {
        Self { base_dir: PathBuf::from(".") }
    }
}

impl DraftStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    fn draft_path(&self, email: &str) -> PathBuf {
        self.base_dir
            .join(format!("trade_draft_{}.json", sanitize_key(email)))
    }

    /// Persists a full form snapshot under the applicant's email. Overwrites
    /// any existing draft for that email.
    pub fn save_draft(&self, email: &str, form: &ApplicationForm) -> Result<String, String> {
        thread::sleep(Duration::from_millis(DRAFT_SAVE_DELAY_MS));
        let path = self.draft_path(email);
        match serde_json::to_string_pretty(form) {
            Ok(json) => match fs::write(&path, &json) {
                Ok(_) => Ok(path.display().to_string()),
                Err(e) => Err(e.to_string()),
            },
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }

    /// Looks up a draft by email. Absent or unreadable drafts both come back
    /// as `None`; a missing draft is not an error.
    pub fn load_draft(&self, email: &str) -> Option<ApplicationForm> {
        let content = fs::read_to_string(self.draft_path(email)).ok()?;
        serde_json::from_str(&content).ok()
    }
}

/// Mock submission endpoint: accepts every payload after a fixed delay and
/// records it as a timestamped JSON file.
pub struct SubmissionService {
    out_dir: PathBuf,
}

impl Default for SubmissionService {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(".") }
    }
}

impl SubmissionService {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    pub fn submit(&self, form: &ApplicationForm) -> Result<String, String> {
        thread::sleep(Duration::from_millis(SUBMIT_DELAY_MS));
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| e.to_string())?
            .as_millis();
        let path = self.out_dir.join(format!("trade_application_{}.json", stamp));
        match serde_json::to_string_pretty(form) {
            Ok(json) => match fs::write(&path, &json) {
                Ok(_) => Ok(path.display().to_string()),
                Err(e) => Err(e.to_string()),
            },
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }
}

/// CSV export of the order-history table.
pub struct OrderExporter;

impl OrderExporter {
    pub fn export_orders(orders: &[Order], filename: &str) -> Result<String, String> {
        let mut writer = csv::Writer::from_path(filename).map_err(|e| e.to_string())?;
        writer
            .write_record(["Order #", "Date", "Status", "Total"])
            .map_err(|e| e.to_string())?;
        for order in orders {
            writer
                .write_record([order.number, order.date, order.status, order.total])
                .map_err(|e| e.to_string())?;
        }
        writer.flush().map_err(|e| e.to_string())?;
        Ok(filename.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_orders;
    use tempfile::tempdir;

    fn draft_form(email: &str, first_name: &str) -> ApplicationForm {
        let mut form = ApplicationForm::default();
        form.business_email = email.to_string();
        form.first_name = first_name.to_string();
        form
    }

    #[test]
    fn test_draft_roundtrip() {
        let dir = tempdir().unwrap();
        let store = DraftStore::new(dir.path());
        let form = draft_form("design@studio.com", "Alex");

        store.save_draft("design@studio.com", &form).unwrap();
        let loaded = store.load_draft("design@studio.com").unwrap();
        assert_eq!(loaded, form);
    }

    #[test]
    fn test_missing_draft_is_absent_not_error() {
        let dir = tempdir().unwrap();
        let store = DraftStore::new(dir.path());
        assert!(store.load_draft("nobody@example.com").is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let dir = tempdir().unwrap();
        let store = DraftStore::new(dir.path());
        store
            .save_draft("design@studio.com", &draft_form("design@studio.com", "Alex"))
            .unwrap();
        store
            .save_draft("design@studio.com", &draft_form("design@studio.com", "Robin"))
            .unwrap();
        let loaded = store.load_draft("design@studio.com").unwrap();
        assert_eq!(loaded.first_name, "Robin");
    }

    #[test]
    fn test_draft_key_is_case_insensitive() {
        let dir = tempdir().unwrap();
        let store = DraftStore::new(dir.path());
        store
            .save_draft("Design@Studio.com", &draft_form("Design@Studio.com", "Alex"))
            .unwrap();
        assert!(store.load_draft("design@studio.com").is_some());
    }

    #[test]
    fn test_corrupt_draft_reads_as_absent() {
        let dir = tempdir().unwrap();
        let store = DraftStore::new(dir.path());
        fs::write(
            dir.path().join("trade_draft_broken@x.com.json"),
            "not json at all",
        )
        .unwrap();
        assert!(store.load_draft("broken@x.com").is_none());
    }

    #[test]
    fn test_submission_writes_payload_file() {
        let dir = tempdir().unwrap();
        let service = SubmissionService::new(dir.path());
        let form = draft_form("design@studio.com", "Alex");

        let path = service.submit(&form).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let back: ApplicationForm = serde_json::from_str(&content).unwrap();
        assert_eq!(back, form);
    }

    #[test]
    fn test_order_export_writes_all_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let filename = path.to_str().unwrap();

        OrderExporter::export_orders(sample_orders(), filename).unwrap();
        let content = fs::read_to_string(filename).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1 + sample_orders().len());
        assert!(lines[0].starts_with("Order #"));
        assert!(lines[1].contains("ORD-24-9012"));
        assert!(lines[1].contains("$3,200.00"));
    }
}
