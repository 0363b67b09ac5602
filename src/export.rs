//! Log file export
//!
//! Everything about sending logs that does not need a UI: picking which
//! files to send, packaging them as `text/plain` attachments, and cleaning up
//! after a successful send. Presenting a composer is left to a
//! [`LogExporter`] supplied by the host.

use crate::core::{LogStore, LoggerError, Result};
use serde::{Deserialize, Serialize};

/// MIME type attached log files are sent with
pub const LOG_MIME_TYPE: &str = "text/plain";

/// Which log files to send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportSelection {
    /// Every file in the log directory
    All,
    /// The newest file before the current run's
    Previous,
    /// The current run's file
    Current,
}

/// Choices worth offering for a given number of log files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub file_count: usize,
    pub choices: Vec<ExportSelection>,
}

impl ExportOptions {
    /// More than one file: offer all three; exactly one: send the current
    /// file directly; none: nothing to offer
    pub fn for_file_count(file_count: usize) -> Self {
        let choices = match file_count {
            0 => Vec::new(),
            1 => vec![ExportSelection::Current],
            _ => vec![
                ExportSelection::All,
                ExportSelection::Previous,
                ExportSelection::Current,
            ],
        };
        Self {
            file_count,
            choices,
        }
    }

    /// Whether the host should ask the user to pick
    pub fn needs_choice(&self) -> bool {
        self.choices.len() > 1
    }
}

/// Mail subject and recipients, usually from localized strings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MailSettings {
    pub subject: String,
    pub recipients: Vec<String>,
}

impl MailSettings {
    /// `recipients` is a `;`-separated list; blank items are dropped
    pub fn new(subject: impl Into<String>, recipients: &str) -> Self {
        Self {
            subject: subject.into(),
            recipients: recipients
                .split(';')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: &'static str,
    pub data: Vec<u8>,
}

/// Everything a composer needs, plus the files safe to delete once sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub subject: String,
    pub recipients: Vec<String>,
    pub attachments: Vec<Attachment>,
    /// Attached files other than the active one
    pub deletable: Vec<String>,
}

impl MailDraft {
    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }
}

/// How the host's export attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Sent,
    Saved,
    Cancelled,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub outcome: ExportOutcome,
    pub attached: Vec<String>,
    pub deleted: usize,
}

/// Host-side exporter, e.g. a mail composer
pub trait LogExporter {
    /// Files offered for export; defaults to the whole log directory.
    ///
    /// [`export_logs`] only attaches (and later deletes) files listed here.
    fn list_exportable_logs(&self, store: &LogStore) -> Vec<String> {
        store.list_all_log_files()
    }

    fn export(&self, draft: &MailDraft) -> Result<ExportOutcome>;
}

impl LogStore {
    /// File names covered by `selection`, in directory order
    pub fn selection_candidates(&self, selection: ExportSelection) -> Vec<String> {
        match selection {
            ExportSelection::All => self.list_all_log_files(),
            ExportSelection::Previous => {
                let files = self.list_all_log_files();
                if files.len() >= 2 {
                    vec![files[files.len() - 2].clone()]
                } else {
                    Vec::new()
                }
            }
            ExportSelection::Current => self.active_file_name().into_iter().collect(),
        }
    }
}

/// Build a draft for `selection`.
///
/// Files that cannot be read are skipped. The active file is attached but
/// never listed as deletable.
pub fn prepare_export(
    store: &LogStore,
    selection: ExportSelection,
    settings: &MailSettings,
) -> MailDraft {
    build_draft(store, store.selection_candidates(selection), settings)
}

fn build_draft(store: &LogStore, file_names: Vec<String>, settings: &MailSettings) -> MailDraft {
    let active = store.active_file_name();
    let mut attachments = Vec::new();
    let mut deletable = Vec::new();

    for file_name in file_names {
        let Some(data) = store.read_log_file(&file_name) else {
            continue;
        };
        if active.as_deref() != Some(file_name.as_str()) {
            deletable.push(file_name.clone());
        }
        attachments.push(Attachment {
            file_name,
            mime_type: LOG_MIME_TYPE,
            data,
        });
    }

    MailDraft {
        subject: settings.subject.clone(),
        recipients: settings.recipients.clone(),
        attachments,
        deletable,
    }
}

/// Prepare, hand to `exporter`, and on `Sent` delete the sent files when
/// `delete_after_send` is set.
///
/// Candidates of `selection` are narrowed to the exporter's
/// [`LogExporter::list_exportable_logs`]. An empty draft is an error;
/// nothing is handed to the exporter.
pub fn export_logs(
    store: &LogStore,
    exporter: &dyn LogExporter,
    selection: ExportSelection,
    settings: &MailSettings,
    delete_after_send: bool,
) -> Result<ExportReport> {
    let exportable = exporter.list_exportable_logs(store);
    let candidates = store
        .selection_candidates(selection)
        .into_iter()
        .filter(|name| exportable.contains(name))
        .collect();
    let draft = build_draft(store, candidates, settings);
    if draft.is_empty() {
        return Err(LoggerError::export(format!(
            "no readable log files for {:?}",
            selection
        )));
    }

    let outcome = exporter.export(&draft)?;
    let deleted = if outcome == ExportOutcome::Sent && delete_after_send {
        store.delete_log_files(draft.deletable.as_slice())
    } else {
        0
    };

    Ok(ExportReport {
        outcome,
        attached: draft
            .attachments
            .iter()
            .map(|a| a.file_name.clone())
            .collect(),
        deleted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_by_file_count() {
        assert!(ExportOptions::for_file_count(0).choices.is_empty());

        let one = ExportOptions::for_file_count(1);
        assert_eq!(one.choices, vec![ExportSelection::Current]);
        assert!(!one.needs_choice());

        let many = ExportOptions::for_file_count(4);
        assert_eq!(many.choices.len(), 3);
        assert!(many.needs_choice());
    }

    #[test]
    fn test_recipients_split() {
        let settings = MailSettings::new("Debug logs", "dev@example.com; qa@example.com;;");
        assert_eq!(settings.recipients, vec!["dev@example.com", "qa@example.com"]);
    }

    #[test]
    fn test_store_without_directory_exports_nothing() {
        let store = LogStore::builder().console_echo(false).build();
        let draft = prepare_export(&store, ExportSelection::All, &MailSettings::default());
        assert!(draft.is_empty());
        assert!(draft.deletable.is_empty());
    }
}
