//! Reducer actions, side-effect intents, and transition logic for the deal dashboard.

use thiserror::Error;

use crate::feed::FeedCta;
use crate::forms::{FormField, FormKind, ModalSpec, NewRecord};
use crate::menus::{catalog_menu, MenuAnchor, MenuDismiss, MenuEntry};
use crate::model::{
    AssigneeId, CustomField, DealState, FileId, MenuId, MenuState, ModalId, ModalPhase,
    ModalState, Notification, NotificationId, NotificationKind, OperationId, PanelSection,
    PendingKind, PendingOperation, Ripple, RippleId, TabId, TimerId, Tooltip,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_deal`] to mutate [`DealState`].
pub enum DealAction {
    /// Activate a tab and start the feed fade-out.
    SelectTab {
        /// Tab that was clicked.
        tab: TabId,
    },
    /// Swap faded-out feed content for `tab` and fade back in.
    SwapFeed {
        /// Tab whose content is swapped in.
        tab: TabId,
        /// Timer that scheduled this swap; stale timers are ignored.
        timer: TimerId,
    },
    /// Remove the tab ripple once its animation has finished.
    ClearRipple {
        /// Ripple to clear.
        ripple: RippleId,
    },
    /// Insert a notification and schedule its show/hide/remove sequence.
    Notify {
        /// Message text.
        message: String,
        /// Notification tone.
        kind: NotificationKind,
    },
    /// Apply the `show` state on the frame after insertion.
    ShowNotification {
        /// Notification to show.
        notification: NotificationId,
    },
    /// Start the fade-out after the display duration.
    HideNotification {
        /// Notification to hide.
        notification: NotificationId,
    },
    /// Drop a notification once its fade-out has finished.
    RemoveNotification {
        /// Notification to remove.
        notification: NotificationId,
    },
    /// Drop a notification immediately from its close button, cancelling the operation it
    /// reports on.
    DismissNotification {
        /// Notification to dismiss.
        notification: NotificationId,
    },
    /// Insert an overlay and dialog, replacing any modal already present.
    OpenModal(ModalSpec),
    /// Start the open transition on the frame after insertion.
    MarkModalActive {
        /// Modal to activate.
        modal: ModalId,
    },
    /// Start the close transition; the overlay is removed after the transition duration.
    CloseModal,
    /// Drop the overlay once its close transition has finished.
    RemoveModal {
        /// Modal to remove.
        modal: ModalId,
    },
    /// Click that landed on the overlay backdrop rather than the dialog.
    ModalBackdropClicked,
    /// Document-level key press.
    KeyPressed {
        /// `KeyboardEvent.key` value.
        key: String,
    },
    /// Replace one field value in the open dialog's draft.
    UpdateFormField {
        /// Field being edited.
        field: FormField,
        /// New field value.
        value: String,
    },
    /// Validate and submit the open dialog's form.
    SubmitModal,
    /// Open a menu with caller-provided entries, replacing any open menu.
    OpenMenu {
        /// Trigger the menu is positioned against.
        anchor: MenuAnchor,
        /// Entries, top to bottom.
        entries: Vec<MenuEntry>,
        /// Which document clicks dismiss the menu.
        dismiss: MenuDismiss,
    },
    /// Open the built-in menu for `anchor`.
    OpenAnchorMenu {
        /// Trigger the menu is positioned against.
        anchor: MenuAnchor,
    },
    /// Arm outside-click dismissal one tick after the menu opened.
    ArmMenuDismiss {
        /// Menu to arm.
        menu: MenuId,
    },
    /// Click that reached the document.
    DocumentClicked {
        /// Whether the click target lies inside the open menu.
        inside_menu: bool,
    },
    /// Choose a menu entry by position.
    SelectMenuEntry {
        /// Entry index, dividers included.
        index: usize,
    },
    /// Close the open menu without choosing an entry.
    CloseMenu,
    /// Show the hover tooltip for a marker-bearing element.
    ShowTooltip {
        /// Key of the hovered element.
        anchor: String,
        /// Tooltip text.
        text: String,
    },
    /// Remove the hover tooltip.
    HideTooltip,
    /// Collapse or expand the left navigation sidebar.
    ToggleSidebar,
    /// Collapse or expand a right-panel section.
    ToggleSection {
        /// Section to toggle.
        section: PanelSection,
    },
    /// Mark a navigation item as the active one.
    SelectNav {
        /// Navigation item key.
        item: String,
    },
    /// Announce the assignee's profile.
    ShowAssigneeProfile {
        /// Assignee to show.
        assignee: AssigneeId,
    },
    /// Remove an assignee from the deal.
    UnassignAssignee {
        /// Assignee to remove.
        assignee: AssigneeId,
    },
    /// Open the preview dialog for a shared file.
    ViewFile {
        /// File to preview.
        file: FileId,
    },
    /// Ask the user to confirm deleting a shared file.
    RequestDeleteFile {
        /// File to delete.
        file: FileId,
    },
    /// Delete a shared file after confirmation.
    DeleteFile {
        /// File to delete.
        file: FileId,
    },
    /// Activate a feed call-to-action button.
    TriggerCta {
        /// Button that was pressed.
        cta: FeedCta,
    },
    /// Complete a pending simulated operation.
    ResolvePending {
        /// Operation to resolve.
        operation: OperationId,
    },
    /// Abandon a pending simulated operation and its timer.
    CancelPending {
        /// Operation to cancel.
        operation: OperationId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// When a scheduled action should run.
pub enum Delay {
    /// Next animation frame.
    NextFrame,
    /// After the given number of milliseconds.
    After(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_deal`] for the host to execute.
pub enum RuntimeEffect {
    /// Dispatch `action` once `delay` has elapsed.
    Schedule {
        /// Cancellation handle.
        timer: TimerId,
        /// When to dispatch.
        delay: Delay,
        /// Action to dispatch.
        action: Box<DealAction>,
    },
    /// Drop a scheduled action if it has not fired yet.
    CancelTimer(TimerId),
    /// Ask the user a yes/no question; dispatch `on_confirm` on yes.
    Confirm {
        /// Question text.
        prompt: String,
        /// Action dispatched when confirmed.
        on_confirm: Box<DealAction>,
    },
    /// Move focus to the first input of the newly opened dialog.
    FocusModalInput(ModalId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions referencing something that is not there.
pub enum ReducerError {
    /// The action needs an open modal.
    #[error("no modal is open")]
    NoOpenModal,
    /// The open modal has no form to edit or submit.
    #[error("open modal has no form")]
    NotAForm,
    /// The action needs an open menu.
    #[error("no menu is open")]
    NoOpenMenu,
    /// The entry index is out of range or names a divider.
    #[error("menu entry {0} is not selectable")]
    EntryNotSelectable(usize),
    /// The target assignee was not found.
    #[error("assignee not found")]
    AssigneeNotFound,
    /// The target file was not found.
    #[error("file not found")]
    FileNotFound,
    /// The target pending operation was not found.
    #[error("pending operation not found")]
    OperationNotFound,
    /// The menu trigger sits in a collapsed section.
    #[error("menu anchor is inside a collapsed section")]
    AnchorCollapsed,
}

/// Applies a [`DealAction`] to the dashboard state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for overlays, notifications,
/// tabs, and sidebar records. Continuations are emitted as [`RuntimeEffect::Schedule`]
/// intents; when one fires for an entity that is already gone, it is a no-op.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references a modal, menu, record, or operation
/// that is not present.
pub fn reduce_deal(
    state: &mut DealState,
    action: DealAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DealAction::SelectTab { tab } => {
            state.feed.active_tab = tab;
            state.feed.fading = true;
            if let Some(previous) = state.feed.pending_swap.take() {
                effects.push(RuntimeEffect::CancelTimer(previous));
            }
            let timer = next_timer(state);
            effects.push(schedule(
                timer,
                Delay::After(state.timings.tab_fade_ms),
                DealAction::SwapFeed { tab, timer },
            ));
            state.feed.pending_swap = Some(timer);

            let ripple = RippleId(state.allocate_id());
            state.ripple = Some(Ripple { id: ripple, tab });
            let timer = next_timer(state);
            effects.push(schedule(
                timer,
                Delay::After(state.timings.ripple_ms),
                DealAction::ClearRipple { ripple },
            ));
        }
        DealAction::SwapFeed { tab, timer } => {
            if state.feed.pending_swap == Some(timer) {
                state.feed.displayed = tab;
                state.feed.fading = false;
                state.feed.pending_swap = None;
            }
        }
        DealAction::ClearRipple { ripple } => {
            if state.ripple.map(|r| r.id) == Some(ripple) {
                state.ripple = None;
            }
        }
        DealAction::Notify { message, kind } => {
            let notification = NotificationId(state.allocate_id());
            state.notifications.push(Notification {
                id: notification,
                message,
                kind,
                shown: false,
            });
            let timer = next_timer(state);
            effects.push(schedule(
                timer,
                Delay::NextFrame,
                DealAction::ShowNotification { notification },
            ));
            let timer = next_timer(state);
            effects.push(schedule(
                timer,
                Delay::After(state.timings.notification_display_ms),
                DealAction::HideNotification { notification },
            ));
        }
        DealAction::ShowNotification { notification } => {
            if let Some(entry) = find_notification_mut(state, notification) {
                entry.shown = true;
            }
        }
        DealAction::HideNotification { notification } => {
            if let Some(entry) = find_notification_mut(state, notification) {
                entry.shown = false;
                let timer = next_timer(state);
                effects.push(schedule(
                    timer,
                    Delay::After(state.timings.notification_fade_ms),
                    DealAction::RemoveNotification { notification },
                ));
            }
        }
        DealAction::RemoveNotification { notification } => {
            state.notifications.retain(|n| n.id != notification);
        }
        DealAction::DismissNotification { notification } => {
            state.notifications.retain(|n| n.id != notification);
            if let Some(operation) = state
                .pending
                .iter()
                .find(|op| op.notice == Some(notification))
                .map(|op| op.id)
            {
                effects.extend(reduce_deal(state, DealAction::CancelPending { operation })?);
            }
        }
        DealAction::OpenModal(spec) => {
            let modal = ModalId(state.allocate_id());
            let draft = spec.body.draft();
            state.modal = Some(ModalState {
                id: modal,
                title: spec.title,
                body: spec.body,
                phase: ModalPhase::Entering,
                draft,
            });
            let timer = next_timer(state);
            effects.push(schedule(
                timer,
                Delay::NextFrame,
                DealAction::MarkModalActive { modal },
            ));
            effects.push(RuntimeEffect::FocusModalInput(modal));
        }
        DealAction::MarkModalActive { modal } => {
            if let Some(open) = state.modal.as_mut() {
                if open.id == modal && open.phase == ModalPhase::Entering {
                    open.phase = ModalPhase::Active;
                }
            }
        }
        DealAction::CloseModal | DealAction::ModalBackdropClicked => {
            begin_close_modal(state, &mut effects);
        }
        DealAction::RemoveModal { modal } => {
            if state.modal.as_ref().map(|m| m.id) == Some(modal) {
                state.modal = None;
            }
        }
        DealAction::KeyPressed { key } => {
            if key == "Escape" {
                begin_close_modal(state, &mut effects);
            }
        }
        DealAction::UpdateFormField { field, value } => {
            let modal = state.modal.as_mut().ok_or(ReducerError::NoOpenModal)?;
            if modal.body.form().is_none() {
                return Err(ReducerError::NotAForm);
            }
            modal.draft.set(field, value);
        }
        DealAction::SubmitModal => {
            let modal = state.modal.as_ref().ok_or(ReducerError::NoOpenModal)?;
            let kind = modal.body.form().ok_or(ReducerError::NotAForm)?;
            if modal.phase == ModalPhase::Closing {
                return Ok(effects);
            }
            submit_form(state, kind, &mut effects)?;
        }
        DealAction::OpenMenu {
            anchor,
            entries,
            dismiss,
        } => {
            let menu = MenuId(state.allocate_id());
            state.menu = Some(MenuState {
                id: menu,
                anchor,
                entries,
                dismiss,
                armed: false,
            });
            let timer = next_timer(state);
            effects.push(schedule(
                timer,
                Delay::NextFrame,
                DealAction::ArmMenuDismiss { menu },
            ));
        }
        DealAction::OpenAnchorMenu { anchor } => {
            match anchor {
                MenuAnchor::Assignee(id) if state.assignee(id).is_none() => {
                    return Err(ReducerError::AssigneeNotFound);
                }
                MenuAnchor::SharedFile(id) if state.file(id).is_none() => {
                    return Err(ReducerError::FileNotFound);
                }
                _ => {}
            }
            if anchor
                .body_section()
                .is_some_and(|section| !state.section_expanded(section))
            {
                return Err(ReducerError::AnchorCollapsed);
            }
            let (entries, dismiss) = catalog_menu(anchor);
            effects.extend(reduce_deal(
                state,
                DealAction::OpenMenu {
                    anchor,
                    entries,
                    dismiss,
                },
            )?);
        }
        DealAction::ArmMenuDismiss { menu } => {
            if let Some(open) = state.menu.as_mut() {
                if open.id == menu {
                    open.armed = true;
                }
            }
        }
        DealAction::DocumentClicked { inside_menu } => {
            let close = state.menu.as_ref().is_some_and(|menu| {
                menu.armed && (menu.dismiss == MenuDismiss::AnyClick || !inside_menu)
            });
            if close {
                state.menu = None;
            }
        }
        DealAction::SelectMenuEntry { index } => {
            let menu = state.menu.as_ref().ok_or(ReducerError::NoOpenMenu)?;
            let next = match menu.entries.get(index) {
                Some(MenuEntry::Item { action, .. }) => action.clone(),
                _ => return Err(ReducerError::EntryNotSelectable(index)),
            };
            state.menu = None;
            if let Some(next) = next {
                effects.extend(reduce_deal(state, *next)?);
            }
        }
        DealAction::CloseMenu => {
            state.menu = None;
        }
        DealAction::ShowTooltip { anchor, text } => {
            state.tooltip = Some(Tooltip { anchor, text });
        }
        DealAction::HideTooltip => {
            state.tooltip = None;
        }
        DealAction::ToggleSidebar => {
            state.sidebar_collapsed = !state.sidebar_collapsed;
        }
        DealAction::ToggleSection { section } => {
            if !state.collapsed_sections.remove(&section) {
                state.collapsed_sections.insert(section);
                if state
                    .menu
                    .as_ref()
                    .is_some_and(|menu| menu.anchor.body_section() == Some(section))
                {
                    state.menu = None;
                }
            }
        }
        DealAction::SelectNav { item } => {
            state.active_nav = Some(item);
        }
        DealAction::ShowAssigneeProfile { assignee } => {
            let name = state
                .assignee(assignee)
                .map(|a| a.name.clone())
                .ok_or(ReducerError::AssigneeNotFound)?;
            effects.extend(notify(
                state,
                format!("Viewing {name}'s profile"),
                NotificationKind::Info,
            )?);
        }
        DealAction::UnassignAssignee { assignee } => {
            let index = state
                .assignees
                .iter()
                .position(|a| a.id == assignee)
                .ok_or(ReducerError::AssigneeNotFound)?;
            let removed = state.assignees.remove(index);
            effects.extend(notify(
                state,
                format!("{} unassigned", removed.name),
                NotificationKind::Success,
            )?);
        }
        DealAction::ViewFile { file } => {
            let name = state
                .file(file)
                .map(|f| f.name.clone())
                .ok_or(ReducerError::FileNotFound)?;
            effects.extend(reduce_deal(
                state,
                DealAction::OpenModal(ModalSpec::pdf_preview(&name)),
            )?);
        }
        DealAction::RequestDeleteFile { file } => {
            let name = state
                .file(file)
                .map(|f| f.name.clone())
                .ok_or(ReducerError::FileNotFound)?;
            effects.push(RuntimeEffect::Confirm {
                prompt: format!("Are you sure you want to delete \"{name}\"?"),
                on_confirm: Box::new(DealAction::DeleteFile { file }),
            });
        }
        DealAction::DeleteFile { file } => {
            let before_len = state.files.len();
            state.files.retain(|f| f.id != file);
            if state.files.len() == before_len {
                return Err(ReducerError::FileNotFound);
            }
            effects.extend(notify(
                state,
                "File deleted successfully".to_string(),
                NotificationKind::Success,
            )?);
        }
        DealAction::TriggerCta { cta } => {
            trigger_cta(state, cta, &mut effects)?;
        }
        DealAction::ResolvePending { operation } => {
            let Some(index) = state.pending.iter().position(|op| op.id == operation) else {
                return Ok(effects);
            };
            let resolved = state.pending.remove(index);
            match resolved.kind {
                PendingKind::ComposeRoi => {
                    effects.extend(reduce_deal(
                        state,
                        DealAction::OpenModal(ModalSpec::form(FormKind::SendRoi)),
                    )?);
                }
            }
        }
        DealAction::CancelPending { operation } => {
            let index = state
                .pending
                .iter()
                .position(|op| op.id == operation)
                .ok_or(ReducerError::OperationNotFound)?;
            let cancelled = state.pending.remove(index);
            effects.push(RuntimeEffect::CancelTimer(cancelled.timer));
        }
    }

    Ok(effects)
}

fn next_timer(state: &mut DealState) -> TimerId {
    TimerId(state.allocate_id())
}

fn schedule(timer: TimerId, delay: Delay, action: DealAction) -> RuntimeEffect {
    RuntimeEffect::Schedule {
        timer,
        delay,
        action: Box::new(action),
    }
}

fn notify(
    state: &mut DealState,
    message: String,
    kind: NotificationKind,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    reduce_deal(state, DealAction::Notify { message, kind })
}

fn find_notification_mut(
    state: &mut DealState,
    notification: NotificationId,
) -> Option<&mut Notification> {
    state.notifications.iter_mut().find(|n| n.id == notification)
}

fn begin_close_modal(state: &mut DealState, effects: &mut Vec<RuntimeEffect>) {
    let modal = match state.modal.as_mut() {
        Some(open) if open.phase != ModalPhase::Closing => {
            open.phase = ModalPhase::Closing;
            open.id
        }
        _ => return,
    };
    let timer = next_timer(state);
    effects.push(schedule(
        timer,
        Delay::After(state.timings.modal_transition_ms),
        DealAction::RemoveModal { modal },
    ));
}

fn submit_form(
    state: &mut DealState,
    kind: FormKind,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let outcome = match state.modal.as_ref() {
        Some(modal) => kind.submit(&modal.draft),
        None => return Err(ReducerError::NoOpenModal),
    };
    match outcome {
        Err(err) => {
            effects.extend(notify(state, err.to_string(), NotificationKind::Error)?);
        }
        Ok(outcome) => {
            match outcome.record {
                Some(NewRecord::Assignee { name, role }) => {
                    state.push_assignee(&name, &role);
                }
                Some(NewRecord::SharedFile { name }) => {
                    state.push_file(&name);
                }
                Some(NewRecord::CustomField { name, value }) => {
                    state.custom_fields.push(CustomField { name, value });
                }
                None => {}
            }
            begin_close_modal(state, effects);
            effects.extend(notify(state, outcome.notice, NotificationKind::Success)?);
        }
    }
    Ok(())
}

fn trigger_cta(
    state: &mut DealState,
    cta: FeedCta,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let next = match cta {
        FeedCta::ScheduleCall => DealAction::OpenModal(ModalSpec::form(FormKind::ScheduleCall)),
        FeedCta::EmailDavid => DealAction::OpenModal(ModalSpec::form(FormKind::EmailDavid)),
        FeedCta::LogixFlow => DealAction::OpenModal(ModalSpec::competitor_analysis()),
        FeedCta::UploadFile => DealAction::OpenModal(ModalSpec::form(FormKind::UploadFile)),
        FeedCta::AddReminder => DealAction::OpenModal(ModalSpec::form(FormKind::AddReminder)),
        FeedCta::ViewCaseStudy => DealAction::Notify {
            message: "Opening TechCorp Case Study...".to_string(),
            kind: NotificationKind::Info,
        },
        FeedCta::RequestIntro => DealAction::Notify {
            message: "Requesting introduction to operations team...".to_string(),
            kind: NotificationKind::Success,
        },
        FeedCta::SendRoi => {
            effects.extend(notify(
                state,
                "Opening ROI document composer...".to_string(),
                NotificationKind::Success,
            )?);
            let notice = state.notifications.last().map(|n| n.id);
            let operation = OperationId(state.allocate_id());
            let timer = next_timer(state);
            state.pending.push(PendingOperation {
                id: operation,
                kind: PendingKind::ComposeRoi,
                timer,
                notice,
            });
            effects.push(schedule(
                timer,
                Delay::After(state.timings.compose_delay_ms),
                DealAction::ResolvePending { operation },
            ));
            return Ok(());
        }
    };
    effects.extend(reduce_deal(state, next)?);
    Ok(())
}
