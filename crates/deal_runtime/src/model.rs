use std::collections::BTreeSet;

use crate::config::{UiConfig, UiTimings};
use crate::feed::{feed_content, FeedContent};
use crate::forms::{FormDraft, ModalBody, ModalSpec};
use crate::menus::{MenuAnchor, MenuDismiss, MenuEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModalId(pub u64);

impl ModalId {
    /// DOM id of the dialog's first input, the target of open-time focus.
    pub fn primary_input_dom_id(self) -> String {
        format!("deal-modal-{}-input", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssigneeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RippleId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Activity,
    Files,
    Reminders,
    AiInsights,
}

impl TabId {
    pub const ALL: [Self; 4] = [Self::Activity, Self::Files, Self::Reminders, Self::AiInsights];

    /// Value of the tab's `data-tab` marker.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Files => "files",
            Self::Reminders => "reminders",
            Self::AiInsights => "ai-insights",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Activity => "Activity",
            Self::Files => "Files",
            Self::Reminders => "Reminders",
            Self::AiInsights => "AI Insights",
        }
    }

    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.marker() == marker)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn tone(self) -> deal_ui::ToastTone {
        match self {
            Self::Info => deal_ui::ToastTone::Info,
            Self::Success => deal_ui::ToastTone::Success,
            Self::Error => deal_ui::ToastTone::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    /// Mirrors the `show` class; false until the first frame and again after hide.
    pub shown: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    /// Inserted, waiting for the next frame to start the open transition.
    Entering,
    Active,
    /// Close transition running; removal is scheduled.
    Closing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    pub id: ModalId,
    pub title: String,
    pub body: ModalBody,
    pub phase: ModalPhase,
    pub draft: FormDraft,
}

impl ModalState {
    pub fn is_active(&self) -> bool {
        self.phase == ModalPhase::Active
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub id: MenuId,
    pub anchor: MenuAnchor,
    pub entries: Vec<MenuEntry>,
    pub dismiss: MenuDismiss,
    /// Outside-click dismissal is armed one tick after opening.
    pub armed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub anchor: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ripple {
    pub id: RippleId,
    pub tab: TabId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedState {
    /// Tab whose indicator is active.
    pub active_tab: TabId,
    /// Tab whose content is in the feed container.
    pub displayed: TabId,
    /// Feed container is faded out, awaiting a swap.
    pub fading: bool,
    pub pending_swap: Option<TimerId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKind {
    /// Simulated ROI composer warm-up; resolves into the ROI dialog.
    ComposeRoi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingOperation {
    pub id: OperationId,
    pub kind: PendingKind,
    pub timer: TimerId,
    /// Progress notification; closing it cancels the operation.
    pub notice: Option<NotificationId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignee {
    pub id: AssigneeId,
    pub name: String,
    pub role: String,
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFile {
    pub id: FileId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PanelSection {
    CompanyInfo,
    Assignees,
    CustomFields,
    SharedFiles,
}

impl PanelSection {
    pub fn marker(self) -> &'static str {
        match self {
            Self::CompanyInfo => "company",
            Self::Assignees => "assignee",
            Self::CustomFields => "custom-fields",
            Self::SharedFiles => "files",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealState {
    pub next_id: u64,
    pub timings: UiTimings,
    pub title: String,
    pub feed: FeedState,
    pub modal: Option<ModalState>,
    pub menu: Option<MenuState>,
    pub tooltip: Option<Tooltip>,
    pub ripple: Option<Ripple>,
    pub notifications: Vec<Notification>,
    pub pending: Vec<PendingOperation>,
    pub assignees: Vec<Assignee>,
    pub files: Vec<SharedFile>,
    pub custom_fields: Vec<CustomField>,
    pub collapsed_sections: BTreeSet<PanelSection>,
    pub sidebar_collapsed: bool,
    pub active_nav: Option<String>,
}

impl Default for DealState {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

impl DealState {
    pub fn from_config(config: &UiConfig) -> Self {
        let mut state = Self {
            next_id: 1,
            timings: config.timings,
            title: config.deal.title.clone(),
            feed: FeedState::default(),
            modal: None,
            menu: None,
            tooltip: None,
            ripple: None,
            notifications: Vec::new(),
            pending: Vec::new(),
            assignees: Vec::new(),
            files: Vec::new(),
            custom_fields: Vec::new(),
            collapsed_sections: BTreeSet::new(),
            sidebar_collapsed: false,
            active_nav: None,
        };
        for seed in &config.deal.assignees {
            state.push_assignee(&seed.name, &seed.role);
        }
        for name in &config.deal.files {
            state.push_file(name);
        }
        state.custom_fields = config
            .deal
            .custom_fields
            .iter()
            .map(|seed| CustomField {
                name: seed.name.clone(),
                value: seed.value.clone(),
            })
            .collect();
        state
    }

    /// Allocates the next identifier from the shared counter.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    pub fn push_assignee(&mut self, name: &str, role: &str) -> AssigneeId {
        let id = AssigneeId(self.allocate_id());
        self.assignees.push(Assignee {
            id,
            name: name.to_string(),
            role: role.to_string(),
            initials: initials(name),
        });
        id
    }

    pub fn push_file(&mut self, name: &str) -> FileId {
        let id = FileId(self.allocate_id());
        self.files.push(SharedFile {
            id,
            name: name.to_string(),
        });
        id
    }

    pub fn assignee(&self, id: AssigneeId) -> Option<&Assignee> {
        self.assignees.iter().find(|a| a.id == id)
    }

    pub fn file(&self, id: FileId) -> Option<&SharedFile> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn notification(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    /// Content currently rendered in the feed container.
    pub fn feed_content(&self) -> FeedContent {
        feed_content(self.feed.displayed)
    }

    pub fn section_expanded(&self, section: PanelSection) -> bool {
        !self.collapsed_sections.contains(&section)
    }

    pub fn modal_spec(&self) -> Option<ModalSpec> {
        self.modal.as_ref().map(|modal| ModalSpec {
            title: modal.title.clone(),
            body: modal.body.clone(),
        })
    }
}

/// Up to two uppercase initials from a display name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
