//! Context-menu entries and the built-in menu catalogs.

use crate::model::{AssigneeId, FileId, NotificationKind, PanelSection};
use crate::reducer::DealAction;

/// Element a dropdown is positioned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAnchor {
    CompanyInfo,
    Assignee(AssigneeId),
    SharedFile(FileId),
    /// Activity timeline card, by position in the feed.
    ActivityCard(usize),
}

impl MenuAnchor {
    /// Collapsible section whose body holds the trigger.
    ///
    /// The company menu hangs off the section header and stays reachable when collapsed.
    pub fn body_section(self) -> Option<PanelSection> {
        match self {
            Self::Assignee(_) => Some(PanelSection::Assignees),
            Self::SharedFile(_) => Some(PanelSection::SharedFiles),
            Self::CompanyInfo | Self::ActivityCard(_) => None,
        }
    }
}

/// Which document clicks close an armed menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuDismiss {
    /// Any click that reaches the document, including clicks on the menu body.
    #[default]
    AnyClick,
    /// Only clicks outside the menu.
    OutsideOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item {
        label: String,
        icon: Option<String>,
        danger: bool,
        action: Option<Box<DealAction>>,
    },
    Divider,
}

impl MenuEntry {
    pub fn item(label: impl Into<String>) -> Self {
        Self::Item {
            label: label.into(),
            icon: None,
            danger: false,
            action: None,
        }
    }

    pub fn with_icon(self, icon: impl Into<String>) -> Self {
        match self {
            Self::Item {
                label,
                danger,
                action,
                ..
            } => Self::Item {
                label,
                icon: Some(icon.into()),
                danger,
                action,
            },
            Self::Divider => Self::Divider,
        }
    }

    pub fn danger(self) -> Self {
        match self {
            Self::Item {
                label,
                icon,
                action,
                ..
            } => Self::Item {
                label,
                icon,
                danger: true,
                action,
            },
            Self::Divider => Self::Divider,
        }
    }

    pub fn on_select(self, next: DealAction) -> Self {
        match self {
            Self::Item {
                label, icon, danger, ..
            } => Self::Item {
                label,
                icon,
                danger,
                action: Some(Box::new(next)),
            },
            Self::Divider => Self::Divider,
        }
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, Self::Divider)
    }
}

/// Entries and dismissal rule for a built-in anchor.
pub fn catalog_menu(anchor: MenuAnchor) -> (Vec<MenuEntry>, MenuDismiss) {
    match anchor {
        MenuAnchor::CompanyInfo => (
            vec![
                MenuEntry::item("Company Profile")
                    .with_icon("building")
                    .on_select(DealAction::Notify {
                        message: "Opening company profile...".to_string(),
                        kind: NotificationKind::Info,
                    }),
                MenuEntry::item("Edit Info")
                    .with_icon("edit")
                    .on_select(DealAction::Notify {
                        message: "Edit mode enabled".to_string(),
                        kind: NotificationKind::Info,
                    }),
            ],
            MenuDismiss::AnyClick,
        ),
        MenuAnchor::Assignee(assignee) => (
            vec![
                MenuEntry::item("Show Profile")
                    .with_icon("user")
                    .on_select(DealAction::ShowAssigneeProfile { assignee }),
                MenuEntry::item("Unassign")
                    .with_icon("remove")
                    .danger()
                    .on_select(DealAction::UnassignAssignee { assignee }),
            ],
            MenuDismiss::AnyClick,
        ),
        MenuAnchor::SharedFile(file) => (
            vec![
                MenuEntry::item("View")
                    .with_icon("show")
                    .on_select(DealAction::ViewFile { file }),
                MenuEntry::item("Delete")
                    .with_icon("delete")
                    .danger()
                    .on_select(DealAction::RequestDeleteFile { file }),
            ],
            MenuDismiss::AnyClick,
        ),
        MenuAnchor::ActivityCard(_) => (
            vec![
                MenuEntry::item("Edit"),
                MenuEntry::item("Duplicate"),
                MenuEntry::item("Share"),
                MenuEntry::Divider,
                MenuEntry::item("Delete").danger(),
            ],
            MenuDismiss::OutsideOnly,
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builder_sets_icon_danger_and_action() {
        let entry = MenuEntry::item("Delete")
            .with_icon("delete")
            .danger()
            .on_select(DealAction::CloseMenu);
        assert_eq!(
            entry,
            MenuEntry::Item {
                label: "Delete".to_string(),
                icon: Some("delete".to_string()),
                danger: true,
                action: Some(Box::new(DealAction::CloseMenu)),
            }
        );
        assert_eq!(MenuEntry::Divider.danger(), MenuEntry::Divider);
    }

    #[test]
    fn card_menu_separates_destructive_entry_and_closes_on_outside_clicks_only() {
        let (entries, dismiss) = catalog_menu(MenuAnchor::ActivityCard(0));
        assert_eq!(dismiss, MenuDismiss::OutsideOnly);
        assert_eq!(entries.len(), 5);
        assert!(entries[3].is_divider());
        assert!(matches!(entries[4], MenuEntry::Item { danger: true, .. }));
    }

    #[test]
    fn file_menu_routes_delete_through_confirmation() {
        let file = FileId(4);
        let (entries, _) = catalog_menu(MenuAnchor::SharedFile(file));
        let MenuEntry::Item { action, .. } = &entries[1] else {
            panic!("expected item");
        };
        assert_eq!(
            action.as_deref(),
            Some(&DealAction::RequestDeleteFile { file })
        );
    }
}
