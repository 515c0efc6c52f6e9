//! Board view (`corkboard board`)
//!
//! Columns of ticket cards grouped and ordered per the selected
//! display options. The board data is fetched from the remote API
//! exactly once per load lifetime; the display controls stay live
//! while the request is in flight.

pub mod model;

use iocraft::prelude::*;
use url::Url;

use crate::api::{ApiClient, BoardData, FetchGuard, LoadState};
use crate::board::{TransformCache, build_columns};
use crate::error::{CorkboardError, Result};
use crate::tui::components::{
    EmptyState, EmptyStateKind, Footer, TicketCard, board_shortcuts, failed_shortcuts,
};
use crate::tui::theme::theme;
use crate::types::{GroupKey, ViewOptions};

use model::{BoardAction, key_to_action};

/// Props for the Board component
#[derive(Default, Props)]
pub struct BoardProps {
    /// Resolved endpoint URL for the board API
    pub endpoint: String,
    /// Initial display options
    pub options: ViewOptions,
}

/// Run the fetch for one load lifetime.
async fn fetch_board(endpoint: &str) -> Result<BoardData> {
    let url = Url::parse(endpoint)
        .map_err(|e| CorkboardError::InvalidEndpoint(endpoint.to_string(), e.to_string()))?;
    ApiClient::new(url)?.fetch_board().await
}

/// Main board component
///
/// Layout:
/// ```text
/// +--------------------------------------------------+
/// | Corkboard     Grouping: status Ordering: priority|
/// +----------+-----------+-----------+---------------+
/// | Backlog 2| Todo 3    | In prog 1 | Done 4        |
/// +----------+-----------+-----------+---------------+
/// | Card     | Card      | Card      | Card          |
/// | Card     | Card      |           | Card          |
/// +----------+-----------+-----------+---------------+
/// | Footer with shortcuts                            |
/// +--------------------------------------------------+
/// ```
#[component]
pub fn Board<'a>(props: &BoardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let endpoint = props.endpoint.clone();
    let initial_options = props.options;

    // State management - one load lifetime plus freely changing
    // display options
    let mut load_state: State<LoadState> = hooks.use_state(LoadState::default);
    let mut options: State<ViewOptions> = hooks.use_state(move || initial_options);
    let mut should_exit = hooks.use_state(|| false);
    let mut needs_reload = hooks.use_state(|| false);
    let mut fetch_guard: State<FetchGuard> = hooks.use_state(FetchGuard::new);
    let mut transform_cache: State<TransformCache> = hooks.use_state(TransformCache::new);

    // Async fetch handler: resolves one load lifetime, gated by its
    // guard so a response landing after teardown is discarded
    let fetch_handler: Handler<(String, FetchGuard)> = hooks.use_async_handler({
        let load_state_setter = load_state;

        move |(endpoint, guard): (String, FetchGuard)| {
            let mut load_state_setter = load_state_setter;

            async move {
                let result = fetch_board(&endpoint).await;
                if let Some(next) = guard.admit(LoadState::from_result(result)) {
                    load_state_setter.set(next);
                }
            }
        }
    });

    // Trigger the single fetch on mount - view-state changes never
    // re-fire it
    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        let guard = fetch_guard.read().clone();
        fetch_handler.clone()((endpoint.clone(), guard));
    }

    // Keyboard events - the display controls respond in every load
    // state, including while loading
    hooks.use_terminal_events({
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => match key_to_action(code, modifiers) {
                Some(BoardAction::CycleGrouping) => options.set(options.get().cycle_group_by()),
                Some(BoardAction::ToggleOrdering) => options.set(options.get().toggle_sort_by()),
                Some(BoardAction::Reload) => needs_reload.set(true),
                Some(BoardAction::Quit) => should_exit.set(true),
                None => {}
            },
            _ => {}
        }
    });

    // Reload is a full reinitialization: abandon the previous lifetime
    // and start a fresh one with a fresh guard
    if needs_reload.get() {
        needs_reload.set(false);
        fetch_guard.read().cancel();
        let guard = FetchGuard::new();
        fetch_guard.set(guard.clone());
        load_state.set(LoadState::Loading);
        fetch_handler.clone()((endpoint.clone(), guard));
    }

    if should_exit.get() {
        // Release the in-flight request before tearing down
        fetch_guard.read().cancel();
        system.exit();
    }

    let current_options = options.get();
    let snapshot = load_state.read().clone();

    // Memoized transform: recompute only when the ticket sequence,
    // grouping, or ordering changed
    let (columns, total_tickets) = match snapshot.board() {
        Some(board) => {
            let mut cache = transform_cache.read().clone();
            let was_cached = cache.lookup(&board.tickets, current_options).is_some();
            let view = cache.get_or_compute(&board.tickets, current_options);
            if !was_cached {
                transform_cache.set(cache);
            }
            let total = view.ticket_count();
            (build_columns(&view, &board.users), total)
        }
        None => (Vec::new(), 0),
    };

    let theme = theme();

    // Layout numbers: each card is up to 7 rows tall
    let visible_columns = columns.len().max(1);
    let card_width = ((width as u32) / visible_columns as u32).saturating_sub(4).max(12);
    let available_height = (height as u32).saturating_sub(5);
    let cards_per_column = (available_height / 7).max(1) as usize;

    let empty_state_kind = match &snapshot {
        LoadState::Loading => Some(EmptyStateKind::Loading),
        LoadState::Failed(_) => Some(EmptyStateKind::LoadFailed),
        LoadState::Ready(_) if total_tickets == 0 => Some(EmptyStateKind::NoTickets),
        LoadState::Ready(_) => None,
    };

    let shortcuts = if matches!(snapshot, LoadState::Failed(_)) {
        failed_shortcuts()
    } else {
        board_shortcuts()
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            // Header with the display-control readout
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
                background_color: theme.highlight,
            ) {
                Text(
                    content: "Corkboard",
                    color: theme.text,
                    weight: Weight::Bold,
                )
                View(flex_direction: FlexDirection::Row, gap: 2) {
                    Text(
                        content: format!("Grouping: {}", current_options.group_by),
                        color: theme.text,
                    )
                    Text(
                        content: format!("Ordering: {}", current_options.sort_by),
                        color: theme.text,
                    )
                    Text(
                        content: if snapshot.is_loading() {
                            "Loading...".to_string()
                        } else {
                            format!("{} tickets", total_tickets)
                        },
                        color: theme.text_dimmed,
                    )
                }
            }

            #(if let Some(kind) = empty_state_kind {
                Some(element! {
                    View(flex_grow: 1.0, width: 100pct) {
                        EmptyState(
                            kind: kind,
                            message: snapshot.error().map(|m| m.to_string()),
                        )
                    }
                })
            } else {
                Some(element! {
                    View(
                        flex_grow: 1.0,
                        flex_direction: FlexDirection::Column,
                        width: 100pct,
                        overflow: Overflow::Hidden,
                    ) {
                        // Column headers
                        View(
                            width: 100pct,
                            height: 2,
                            flex_direction: FlexDirection::Row,
                            margin_top: 1,
                        ) {
                            #(columns.iter().map(|column| {
                                let label_color = match &column.key {
                                    GroupKey::Status(status) => theme.status_color(*status),
                                    _ => theme.text,
                                };
                                element! {
                                    View(
                                        flex_grow: 1.0,
                                        flex_shrink: 0.0,
                                        flex_direction: FlexDirection::Column,
                                        align_items: AlignItems::Center,
                                        border_edges: Edges::Bottom,
                                        border_style: BorderStyle::Single,
                                        border_color: theme.border,
                                    ) {
                                        Text(
                                            content: column.label.clone(),
                                            color: label_color,
                                            weight: Weight::Bold,
                                        )
                                        Text(
                                            content: column.ticket_count.to_string(),
                                            color: theme.text_dimmed,
                                        )
                                    }
                                }
                            }))
                        }

                        // Column content
                        View(
                            flex_grow: 1.0,
                            width: 100pct,
                            flex_direction: FlexDirection::Row,
                            overflow: Overflow::Hidden,
                        ) {
                            #(columns.iter().map(|column| {
                                let shown = column.tickets.iter().take(cards_per_column);
                                let hidden_below = column.tickets.len().saturating_sub(cards_per_column);
                                element! {
                                    View(
                                        flex_grow: 1.0,
                                        flex_shrink: 0.0,
                                        height: 100pct,
                                        flex_direction: FlexDirection::Column,
                                        padding_left: 1,
                                        padding_right: 1,
                                        border_edges: Edges::Right,
                                        border_style: BorderStyle::Single,
                                        border_color: theme.border,
                                        overflow: Overflow::Hidden,
                                    ) {
                                        #(shown.map(|ticket| {
                                            element! {
                                                View(margin_top: 1) {
                                                    TicketCard(
                                                        ticket: ticket.as_ref().clone(),
                                                        width: Some(card_width),
                                                    )
                                                }
                                            }
                                        }))

                                        // Spacer pushes the overflow count to the bottom
                                        View(flex_grow: 1.0)

                                        #(if hidden_below > 0 {
                                            Some(element! {
                                                View(height: 1, padding_left: 1) {
                                                    Text(
                                                        content: format!("  {} more", hidden_below),
                                                        color: theme.text_dimmed,
                                                    )
                                                }
                                            })
                                        } else {
                                            None
                                        })
                                    }
                                }
                            }))
                        }
                    }
                })
            })

            // Footer
            Footer(shortcuts: shortcuts)
        }
    }
}
