use deal_runtime::feed::{feed_content, FeedCta};
use deal_runtime::{
    reduce_deal, DealAction, DealRuntime, DealState, Delay, FormField, FormKind, MenuAnchor,
    ModalBody, ModalPhase, ModalSpec, NotificationKind, RuntimeEffect, TabId, TimerId, UiConfig,
};

fn notify(runtime: &mut DealRuntime, message: &str, kind: NotificationKind) {
    runtime
        .dispatch(DealAction::Notify {
            message: message.to_string(),
            kind,
        })
        .expect("notify");
}

fn open(runtime: &mut DealRuntime, spec: ModalSpec) {
    runtime
        .dispatch(DealAction::OpenModal(spec))
        .expect("open modal");
}

fn select_tab(runtime: &mut DealRuntime, tab: TabId) {
    runtime
        .dispatch(DealAction::SelectTab { tab })
        .expect("select tab");
}

#[test]
fn opening_a_second_dropdown_leaves_exactly_one() {
    let mut runtime = DealRuntime::default();
    let file = runtime.state().files[0].id;

    runtime
        .dispatch(DealAction::OpenAnchorMenu {
            anchor: MenuAnchor::CompanyInfo,
        })
        .expect("company menu");
    runtime.flush_frame();
    runtime
        .dispatch(DealAction::OpenAnchorMenu {
            anchor: MenuAnchor::SharedFile(file),
        })
        .expect("file menu");

    let menu = runtime.state().menu.as_ref().expect("one menu open");
    assert_eq!(menu.anchor, MenuAnchor::SharedFile(file));

    // The opening click reaches the document before the new menu is armed.
    runtime
        .dispatch(DealAction::DocumentClicked { inside_menu: false })
        .expect("opening click");
    assert!(runtime.state().menu.is_some());

    runtime.flush_frame();
    runtime
        .dispatch(DealAction::DocumentClicked { inside_menu: false })
        .expect("outside click");
    assert!(runtime.state().menu.is_none());
}

#[test]
fn notification_is_present_immediately_and_gone_after_display_and_fade() {
    let mut runtime = DealRuntime::default();
    notify(&mut runtime, "x", NotificationKind::Success);

    assert_eq!(runtime.state().notifications.len(), 1);
    assert!(!runtime.state().notifications[0].shown);

    runtime.flush_frame();
    assert!(runtime.state().notifications[0].shown);

    runtime.advance(3_000);
    assert_eq!(runtime.state().notifications.len(), 1);
    assert!(!runtime.state().notifications[0].shown);

    runtime.advance(299);
    assert_eq!(runtime.state().notifications.len(), 1);

    runtime.advance(1);
    assert!(runtime.state().notifications.is_empty());
    assert_eq!(runtime.now_ms(), 3_300);
}

#[test]
fn stacked_notifications_expire_independently() {
    let mut runtime = DealRuntime::default();
    notify(&mut runtime, "first", NotificationKind::Info);
    runtime.advance(1_000);
    notify(&mut runtime, "second", NotificationKind::Error);

    runtime.advance(2_300);
    let remaining: Vec<_> = runtime
        .state()
        .notifications
        .iter()
        .map(|n| n.message.as_str())
        .collect();
    assert_eq!(remaining, vec!["second"]);

    runtime.run_until_idle();
    assert!(runtime.state().notifications.is_empty());
}

#[test]
fn modal_overlay_is_removed_at_transition_end_and_not_before() {
    let mut runtime = DealRuntime::default();
    open(&mut runtime, ModalSpec::competitor_analysis());
    runtime.flush_frame();
    assert!(runtime.state().modal.as_ref().expect("modal").is_active());

    runtime.dispatch(DealAction::CloseModal).expect("close");
    runtime.advance(199);
    assert_eq!(
        runtime.state().modal.as_ref().map(|m| m.phase),
        Some(ModalPhase::Closing)
    );

    runtime.advance(1);
    assert!(runtime.state().modal.is_none());
}

#[test]
fn escape_closes_the_modal_once() {
    let mut runtime = DealRuntime::default();
    open(&mut runtime, ModalSpec::markup("Notes", "<p>hello</p>"));
    for _ in 0..3 {
        runtime
            .dispatch(DealAction::KeyPressed {
                key: "Escape".to_string(),
            })
            .expect("escape");
    }
    assert_eq!(runtime.pending_timers(), 2);
    runtime.run_until_idle();
    assert!(runtime.state().modal.is_none());
}

#[test]
fn switching_tabs_away_and_back_restores_initial_activity_content() {
    let mut runtime = DealRuntime::default();
    let initial = runtime.state().feed_content();

    for tab in [TabId::Files, TabId::Reminders, TabId::Activity] {
        select_tab(&mut runtime, tab);
        runtime.advance(200);
        assert_eq!(runtime.state().feed.displayed, tab);
        assert_eq!(runtime.state().feed_content(), feed_content(tab));
    }

    assert_eq!(runtime.state().feed_content(), initial);
    assert!(!runtime.state().feed.fading);
}

#[test]
fn ripple_is_cleared_after_its_animation() {
    let mut runtime = DealRuntime::default();
    select_tab(&mut runtime, TabId::AiInsights);
    assert_eq!(runtime.state().ripple.map(|r| r.tab), Some(TabId::AiInsights));
    runtime.advance(599);
    assert!(runtime.state().ripple.is_some());
    runtime.advance(1);
    assert!(runtime.state().ripple.is_none());
}

fn feed_swaps(effects: &[RuntimeEffect]) -> Vec<(TimerId, Delay, TabId)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            RuntimeEffect::Schedule {
                timer,
                delay,
                action,
            } => match **action {
                DealAction::SwapFeed { tab, .. } => Some((*timer, *delay, tab)),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

#[test]
fn overlapping_tab_fades_issue_a_swap_per_click_but_only_the_latest_lands() {
    let mut state = DealState::from_config(&UiConfig::default());
    let first = reduce_deal(&mut state, DealAction::SelectTab { tab: TabId::Files })
        .expect("first click");
    let second = reduce_deal(
        &mut state,
        DealAction::SelectTab {
            tab: TabId::Reminders,
        },
    )
    .expect("second click");

    // Each click schedules its own fade-out swap, so the fades overlap.
    let first_swaps = feed_swaps(&first);
    let second_swaps = feed_swaps(&second);
    assert_eq!(first_swaps.len(), 1);
    assert_eq!(second_swaps.len(), 1);
    let (stale_timer, stale_delay, stale_tab) = first_swaps[0];
    let (latest_timer, _, latest_tab) = second_swaps[0];
    assert_eq!(stale_delay, Delay::After(200));
    assert_eq!((stale_tab, latest_tab), (TabId::Files, TabId::Reminders));
    assert!(second.contains(&RuntimeEffect::CancelTimer(stale_timer)));

    // A host that misses the cancel still fires the superseded swap; it must not land.
    reduce_deal(
        &mut state,
        DealAction::SwapFeed {
            tab: stale_tab,
            timer: stale_timer,
        },
    )
    .expect("stale swap");
    assert_eq!(state.feed.displayed, TabId::Activity);
    assert!(state.feed.fading);

    reduce_deal(
        &mut state,
        DealAction::SwapFeed {
            tab: latest_tab,
            timer: latest_timer,
        },
    )
    .expect("latest swap");
    assert_eq!(state.feed.displayed, TabId::Reminders);
    assert!(!state.feed.fading);
}

#[test]
fn rapid_tab_switch_swaps_only_to_the_latest_tab() {
    let mut runtime = DealRuntime::default();
    select_tab(&mut runtime, TabId::Files);
    runtime.advance(100);
    select_tab(&mut runtime, TabId::Reminders);

    runtime.advance(100);
    assert_eq!(runtime.state().feed.displayed, TabId::Activity);
    assert!(runtime.state().feed.fading);

    runtime.advance(100);
    assert_eq!(runtime.state().feed.displayed, TabId::Reminders);
    assert_eq!(runtime.state().feed.active_tab, TabId::Reminders);
    assert!(!runtime.state().feed.fading);
}

#[test]
fn empty_assignee_name_notifies_error_and_appends_nothing() {
    let mut runtime = DealRuntime::default();
    let before = runtime.state().assignees.clone();
    open(&mut runtime, ModalSpec::form(FormKind::AddAssignee));

    runtime
        .dispatch(DealAction::UpdateFormField {
            field: FormField::Name,
            value: "   ".to_string(),
        })
        .expect("edit name");
    runtime.dispatch(DealAction::SubmitModal).expect("submit");

    assert_eq!(runtime.state().assignees, before);
    let notifications = &runtime.state().notifications;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Error);
    assert_eq!(notifications[0].message, "Please enter a name");
    assert!(runtime.state().modal.is_some());
}

#[test]
fn valid_assignee_is_appended_with_initials() {
    let mut runtime = DealRuntime::default();
    open(&mut runtime, ModalSpec::form(FormKind::AddAssignee));
    runtime
        .dispatch(DealAction::UpdateFormField {
            field: FormField::Name,
            value: "maya chen".to_string(),
        })
        .expect("edit name");
    runtime.dispatch(DealAction::SubmitModal).expect("submit");
    runtime.run_until_idle();

    let added = runtime.state().assignees.last().expect("assignee");
    assert_eq!(added.name, "maya chen");
    assert_eq!(added.initials, "MC");
    assert_eq!(added.role, "Project Manager");
    assert!(runtime.state().modal.is_none());
}

#[test]
fn second_modal_opened_during_close_outlives_the_first_removal() {
    let mut runtime = DealRuntime::default();
    open(&mut runtime, ModalSpec::competitor_analysis());
    runtime.flush_frame();
    let first = runtime.state().modal.as_ref().expect("first modal").id;
    runtime.dispatch(DealAction::CloseModal).expect("close");
    runtime.advance(50);

    open(&mut runtime, ModalSpec::form(FormKind::AddReminder));
    assert_eq!(runtime.pending_timers(), 2);
    runtime.flush_frame();

    // The second dialog is active before the first's removal comes due.
    let second = runtime.state().modal.as_ref().expect("second modal");
    assert_ne!(second.id, first);
    assert!(second.is_active());
    assert_eq!(runtime.pending_timers(), 1);

    runtime.advance(150);
    assert_eq!(runtime.now_ms(), 200);
    assert_eq!(runtime.pending_timers(), 0);
    let modal = runtime.state().modal.as_ref().expect("second modal");
    assert_eq!(modal.body, ModalBody::Form(FormKind::AddReminder));
    assert!(modal.is_active());

    runtime
        .dispatch(DealAction::KeyPressed {
            key: "Escape".to_string(),
        })
        .expect("escape");
    runtime.run_until_idle();
    assert!(runtime.state().modal.is_none());
}

#[test]
fn send_roi_opens_composer_after_delay_unless_cancelled() {
    let mut runtime = DealRuntime::default();
    runtime
        .dispatch(DealAction::TriggerCta {
            cta: FeedCta::SendRoi,
        })
        .expect("send roi");
    assert_eq!(
        runtime.state().notifications[0].message,
        "Opening ROI document composer..."
    );
    runtime.advance(499);
    assert!(runtime.state().modal.is_none());
    runtime.advance(1);
    assert_eq!(
        runtime.state().modal.as_ref().map(|m| m.body.clone()),
        Some(ModalBody::Form(FormKind::SendRoi))
    );

    let mut cancelled = DealRuntime::default();
    cancelled
        .dispatch(DealAction::TriggerCta {
            cta: FeedCta::SendRoi,
        })
        .expect("send roi");
    let operation = cancelled.state().pending[0].id;
    cancelled
        .dispatch(DealAction::CancelPending { operation })
        .expect("cancel");
    cancelled.run_until_idle();
    assert!(cancelled.state().modal.is_none());

    let mut dismissed = DealRuntime::default();
    dismissed
        .dispatch(DealAction::TriggerCta {
            cta: FeedCta::SendRoi,
        })
        .expect("send roi");
    let notification = dismissed.state().notifications[0].id;
    dismissed
        .dispatch(DealAction::DismissNotification { notification })
        .expect("close toast");
    dismissed.run_until_idle();
    assert!(dismissed.state().pending.is_empty());
    assert!(dismissed.state().modal.is_none());
}

#[test]
fn confirmed_file_delete_removes_row_and_notifies() {
    let mut runtime = DealRuntime::default();
    let file = runtime.state().files[1].id;
    runtime
        .dispatch(DealAction::OpenAnchorMenu {
            anchor: MenuAnchor::SharedFile(file),
        })
        .expect("file menu");
    runtime
        .dispatch(DealAction::SelectMenuEntry { index: 1 })
        .expect("delete entry");

    assert_eq!(
        runtime.prompts(),
        &["Are you sure you want to delete \"Northway_Proposal_v2.pdf\"?".to_string()]
    );
    assert!(runtime.state().file(file).is_none());
    assert!(runtime.state().menu.is_none());
    assert_eq!(
        runtime.state().notifications[0].message,
        "File deleted successfully"
    );
}
