//! Modal dialog bodies, form definitions, drafts, and submit validation.

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Role,
    FileName,
    FieldName,
    FieldType,
    FieldValue,
    Title,
    Date,
    Time,
    Assignee,
    Description,
    With,
    Agenda,
    Recipient,
    Subject,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Date,
    Time,
    TextArea { rows: u8 },
    Select(&'static [&'static str]),
    ReadOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: FormField,
    pub label: &'static str,
    pub input: InputKind,
    pub placeholder: &'static str,
    pub initial: &'static str,
}

impl FieldSpec {
    fn new(field: FormField, label: &'static str, input: InputKind) -> Self {
        Self {
            field,
            label,
            input,
            placeholder: "",
            initial: "",
        }
    }

    fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    fn initial(mut self, initial: &'static str) -> Self {
        self.initial = initial;
        self
    }

    fn initial_value(&self) -> &'static str {
        match self.input {
            InputKind::Select(options) if self.initial.is_empty() => {
                options.first().copied().unwrap_or_default()
            }
            _ => self.initial,
        }
    }
}

const ASSIGNEE_ROLES: &[&str] = &[
    "Project Manager",
    "Director",
    "Account Executive",
    "Sales Engineer",
];
const CUSTOM_FIELD_TYPES: &[&str] = &["Text", "Number", "Date", "Dropdown"];
const TASK_ASSIGNEES: &[&str] = &["Sobhan Rabbani", "Sarah Sanders"];

const DAVID_EMAIL_BODY: &str = "Hi David,

I wanted to share our TechCorp case study with you. Similar to Northway, they saw an 89% improvement in dispatcher efficiency.

Would you have time this week to discuss how we achieved similar results for them?

Best regards";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    AddAssignee,
    AddSharedFile,
    AddCustomField,
    CreateTask,
    ScheduleCall,
    SendRoi,
    EmailDavid,
    UploadFile,
    AddReminder,
}

impl FormKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::AddAssignee => "Add Assignee",
            Self::AddSharedFile => "Add Shared File",
            Self::AddCustomField => "Add Custom Field",
            Self::CreateTask => "Create New Task",
            Self::ScheduleCall => "Schedule Call",
            Self::SendRoi => "Send ROI Documentation",
            Self::EmailDavid => "Email to David",
            Self::UploadFile => "Upload File",
            Self::AddReminder => "Add Reminder",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::AddAssignee => "Add Assignee",
            Self::AddSharedFile => "Upload File",
            Self::AddCustomField => "Add Field",
            Self::CreateTask => "Create Task",
            Self::ScheduleCall => "Schedule",
            Self::SendRoi | Self::EmailDavid => "Send Email",
            Self::UploadFile => "Upload",
            Self::AddReminder => "Set Reminder",
        }
    }

    /// Whether the dialog shows a drag-and-drop zone above its actions.
    pub fn has_drop_zone(self) -> bool {
        matches!(self, Self::AddSharedFile | Self::UploadFile)
    }

    /// Attachment names listed read-only in the dialog.
    pub fn attachments(self) -> &'static [&'static str] {
        match self {
            Self::SendRoi => &["ROI_Analysis_Q1_2026.pdf"],
            _ => &[],
        }
    }

    pub fn fields(self) -> Vec<FieldSpec> {
        use FormField as F;
        use InputKind as I;
        match self {
            Self::AddAssignee => vec![
                FieldSpec::new(F::Name, "Name", I::Text).placeholder("Enter name..."),
                FieldSpec::new(F::Email, "Email", I::Email).placeholder("Enter email..."),
                FieldSpec::new(F::Role, "Role", I::Select(ASSIGNEE_ROLES)),
            ],
            Self::AddSharedFile => vec![FieldSpec::new(F::FileName, "File Name", I::Text)
                .placeholder("Enter file name...")],
            Self::AddCustomField => vec![
                FieldSpec::new(F::FieldName, "Field Name", I::Text)
                    .placeholder("e.g. Industry, Region..."),
                FieldSpec::new(F::FieldType, "Field Type", I::Select(CUSTOM_FIELD_TYPES)),
                FieldSpec::new(F::FieldValue, "Value", I::Text).placeholder("Enter value..."),
            ],
            Self::CreateTask => vec![
                FieldSpec::new(F::Title, "Task Title", I::Text).placeholder("Enter task title..."),
                FieldSpec::new(F::Date, "Due Date", I::Date),
                FieldSpec::new(F::Assignee, "Assignee", I::Select(TASK_ASSIGNEES)),
                FieldSpec::new(F::Description, "Description", I::TextArea { rows: 3 })
                    .placeholder("Enter task description..."),
            ],
            Self::ScheduleCall => vec![
                FieldSpec::new(F::With, "With", I::ReadOnly).initial("Julian Park (CEO)"),
                FieldSpec::new(F::Date, "Date", I::Date),
                FieldSpec::new(F::Time, "Time", I::Time),
                FieldSpec::new(F::Agenda, "Agenda", I::TextArea { rows: 3 })
                    .placeholder("What would you like to discuss?"),
            ],
            Self::SendRoi => vec![
                FieldSpec::new(F::Recipient, "Recipient", I::Text).initial("Julian Park (CFO)"),
                FieldSpec::new(F::Subject, "Subject", I::Text)
                    .initial("ROI Analysis - Northway Fleet Operations"),
            ],
            Self::EmailDavid => vec![
                FieldSpec::new(F::Email, "To", I::Email).initial("david@techcorp.com"),
                FieldSpec::new(F::Subject, "Subject", I::Text)
                    .initial("TechCorp Case Study - Fleet Operations Success Story"),
                FieldSpec::new(F::Message, "Message", I::TextArea { rows: 5 })
                    .initial(DAVID_EMAIL_BODY),
            ],
            Self::UploadFile => Vec::new(),
            Self::AddReminder => vec![
                FieldSpec::new(F::Title, "Title", I::Text).placeholder("Reminder title..."),
                FieldSpec::new(F::Date, "Date", I::Date),
                FieldSpec::new(F::Time, "Time", I::Time),
            ],
        }
    }

    /// Fresh draft holding every field's initial value.
    pub fn draft(self) -> FormDraft {
        let mut draft = FormDraft::default();
        for spec in self.fields() {
            draft.set(spec.field, spec.initial_value());
        }
        draft
    }

    /// Validates `draft` and describes what a successful submit does.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Required`] when a required field is blank.
    pub fn submit(self, draft: &FormDraft) -> Result<FormOutcome, FormError> {
        match self {
            Self::AddAssignee => {
                let name = draft.required(FormField::Name, "Please enter a name")?;
                let role = draft.value(FormField::Role).to_string();
                Ok(FormOutcome {
                    notice: format!("{name} added as {role}"),
                    record: Some(NewRecord::Assignee { name, role }),
                })
            }
            Self::AddSharedFile => {
                let name = draft.required(FormField::FileName, "Please enter a file name")?;
                Ok(FormOutcome {
                    notice: format!("\"{name}\" added to shared files"),
                    record: Some(NewRecord::SharedFile { name }),
                })
            }
            Self::AddCustomField => {
                let name = draft.required(FormField::FieldName, "Please enter a field name")?;
                let value = draft.value(FormField::FieldValue).trim();
                let value = if value.is_empty() { "—" } else { value }.to_string();
                Ok(FormOutcome {
                    notice: format!("Custom field \"{name}\" added"),
                    record: Some(NewRecord::CustomField { name, value }),
                })
            }
            Self::CreateTask => {
                let title = draft.required(FormField::Title, "Please enter a task title")?;
                Ok(FormOutcome::notice(format!("Task \"{title}\" created")))
            }
            Self::ScheduleCall => Ok(FormOutcome::notice("Call scheduled successfully!")),
            Self::SendRoi => Ok(FormOutcome::notice("ROI documentation sent to Julian Park")),
            Self::EmailDavid => {
                let to = draft.required(FormField::Email, "Please enter a recipient")?;
                Ok(FormOutcome::notice(format!("Email sent to {to}")))
            }
            Self::UploadFile => Ok(FormOutcome::notice("File uploaded successfully")),
            Self::AddReminder => {
                let title = draft.required(FormField::Title, "Please enter a reminder title")?;
                Ok(FormOutcome::notice(format!("Reminder \"{title}\" set")))
            }
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field was blank; the message is shown to the user as-is.
    #[error("{message}")]
    Required {
        field: FormField,
        message: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewRecord {
    Assignee { name: String, role: String },
    SharedFile { name: String },
    CustomField { name: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    /// Success notification text.
    pub notice: String,
    pub record: Option<NewRecord>,
}

impl FormOutcome {
    fn notice(notice: impl Into<String>) -> Self {
        Self {
            notice: notice.into(),
            record: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    values: BTreeMap<FormField, String>,
}

impl FormDraft {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    fn required(&self, field: FormField, message: &'static str) -> Result<String, FormError> {
        let value = self.value(field).trim();
        if value.is_empty() {
            return Err(FormError::Required { field, message });
        }
        Ok(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalBody {
    /// Caller-provided markup rendered verbatim.
    Markup(String),
    Form(FormKind),
    CompetitorAnalysis,
    PdfPreview { file_name: String },
}

impl ModalBody {
    pub fn form(&self) -> Option<FormKind> {
        match self {
            Self::Form(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn draft(&self) -> FormDraft {
        self.form().map(FormKind::draft).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSpec {
    pub title: String,
    pub body: ModalBody,
}

impl ModalSpec {
    pub fn markup(title: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: ModalBody::Markup(markup.into()),
        }
    }

    pub fn form(kind: FormKind) -> Self {
        Self {
            title: kind.title().to_string(),
            body: ModalBody::Form(kind),
        }
    }

    pub fn competitor_analysis() -> Self {
        Self {
            title: "Competitor Analysis: LogixFlow".to_string(),
            body: ModalBody::CompetitorAnalysis,
        }
    }

    pub fn pdf_preview(file_name: &str) -> Self {
        Self {
            title: file_name.to_string(),
            body: ModalBody::PdfPreview {
                file_name: file_name.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drafts_start_from_initial_values_and_first_select_option() {
        let draft = FormKind::AddAssignee.draft();
        assert_eq!(draft.value(FormField::Name), "");
        assert_eq!(draft.value(FormField::Role), "Project Manager");

        let draft = FormKind::ScheduleCall.draft();
        assert_eq!(draft.value(FormField::With), "Julian Park (CEO)");
    }

    #[test]
    fn blank_required_fields_fail_with_user_message() {
        let mut draft = FormKind::AddAssignee.draft();
        draft.set(FormField::Name, "   ");
        let err = FormKind::AddAssignee.submit(&draft).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a name");
        assert_eq!(
            err,
            FormError::Required {
                field: FormField::Name,
                message: "Please enter a name"
            }
        );
    }

    #[test]
    fn assignee_submit_trims_name_and_keeps_selected_role() {
        let mut draft = FormKind::AddAssignee.draft();
        draft.set(FormField::Name, "  Dana Lee ");
        draft.set(FormField::Role, "Sales Engineer");
        let outcome = FormKind::AddAssignee.submit(&draft).expect("valid");
        assert_eq!(outcome.notice, "Dana Lee added as Sales Engineer");
        assert_eq!(
            outcome.record,
            Some(NewRecord::Assignee {
                name: "Dana Lee".to_string(),
                role: "Sales Engineer".to_string()
            })
        );
    }

    #[test]
    fn custom_field_without_value_uses_placeholder_dash() {
        let mut draft = FormKind::AddCustomField.draft();
        draft.set(FormField::FieldName, "Industry");
        let outcome = FormKind::AddCustomField.submit(&draft).expect("valid");
        assert_eq!(
            outcome.record,
            Some(NewRecord::CustomField {
                name: "Industry".to_string(),
                value: "—".to_string()
            })
        );
    }

    #[test]
    fn simulated_actions_only_notify() {
        let outcome = FormKind::SendRoi
            .submit(&FormKind::SendRoi.draft())
            .expect("valid");
        assert_eq!(outcome.notice, "ROI documentation sent to Julian Park");
        assert_eq!(outcome.record, None);
    }

    #[test]
    fn modal_specs_carry_dialog_titles() {
        assert_eq!(ModalSpec::form(FormKind::AddCustomField).title, "Add Custom Field");
        assert_eq!(ModalSpec::pdf_preview("deck.pdf").title, "deck.pdf");
        assert_eq!(ModalBody::CompetitorAnalysis.draft(), FormDraft::default());
    }
}
