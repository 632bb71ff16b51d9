//! Key bindings: maps a terminal key press to a core message.
//!
//! Pure over the current view model so it can be tested without a terminal.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use discovery_core::{options_for, AppViewModel, EnrichmentField, Msg, Tab};

pub fn map_key(view: &AppViewModel, key: KeyEvent, now: DateTime<Local>) -> Option<Msg> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return Some(Msg::ShutdownRequested),
        KeyCode::Tab => return Some(Msg::TabSelected(view.active_tab.next())),
        KeyCode::BackTab => return Some(Msg::TabSelected(view.active_tab.prev())),
        KeyCode::F(n @ 1..=3) => return Some(Msg::TabSelected(Tab::ALL[usize::from(n) - 1])),
        _ => {}
    }

    match view.active_tab {
        Tab::Exploration => map_exploration(view, key),
        Tab::Enrichment => map_enrichment(view, key, now),
        Tab::Reports => match key.code {
            KeyCode::Char('q') => Some(Msg::ShutdownRequested),
            _ => None,
        },
    }
}

fn map_exploration(view: &AppViewModel, key: KeyEvent) -> Option<Msg> {
    let exploration = &view.exploration;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter if alt => Some(Msg::InputChanged(format!("{}\n", exploration.input))),
        KeyCode::Enter => exploration.can_submit.then_some(Msg::QuerySubmitted),
        KeyCode::Esc => Some(Msg::InputCleared),
        KeyCode::Char('d') if ctrl => Some(Msg::HistoryCleared),
        KeyCode::Char('f') if ctrl => Some(Msg::DownloadFormatChanged(
            exploration.download_format.next(),
        )),
        KeyCode::Backspace => {
            let mut text = exploration.input.clone();
            text.pop().map(|_| Msg::InputChanged(text))
        }
        KeyCode::Char(c) if !ctrl && !alt => {
            Some(Msg::InputChanged(format!("{}{c}", exploration.input)))
        }
        _ => None,
    }
}

fn map_enrichment(view: &AppViewModel, key: KeyEvent, now: DateTime<Local>) -> Option<Msg> {
    let enrichment = &view.enrichment;
    let focus = enrichment.focus;
    let current = view.field(focus).and_then(|f| f.value.clone());

    match key.code {
        KeyCode::Up => return Some(Msg::EnrichmentFocusChanged(focus.prev())),
        KeyCode::Down => return Some(Msg::EnrichmentFocusChanged(focus.next())),
        KeyCode::Enter => {
            return enrichment
                .can_submit_pipeline
                .then_some(Msg::PipelineSubmitted { submitted_at: now })
        }
        KeyCode::Esc => {
            return current.map(|_| Msg::EnrichmentFieldChanged {
                field: focus,
                value: None,
            })
        }
        _ => {}
    }

    if focus.is_text() {
        let mut text = current.unwrap_or_default();
        let ctrl_or_alt = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        return match key.code {
            KeyCode::Backspace => text.pop().map(|_| description_changed(text)),
            KeyCode::Char(c) if !ctrl_or_alt => {
                text.push(c);
                Some(description_changed(text))
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left => cycle_option(focus, current.as_deref(), false),
        KeyCode::Right => cycle_option(focus, current.as_deref(), true),
        KeyCode::Char('q') => Some(Msg::ShutdownRequested),
        _ => None,
    }
}

fn description_changed(text: String) -> Msg {
    Msg::EnrichmentFieldChanged {
        field: EnrichmentField::Description,
        value: (!text.is_empty()).then_some(text),
    }
}

/// Next (or previous) catalog option; from unset, starts at the first (or last).
fn cycle_option(field: EnrichmentField, current: Option<&str>, forward: bool) -> Option<Msg> {
    let options = options_for(field);
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let position = current.and_then(|id| options.iter().position(|entry| entry.id == id));
    let index = match (position, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    };
    Some(Msg::EnrichmentFieldChanged {
        field,
        value: Some(options[index].id.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use discovery_core::{update, AppState, DownloadFormat};
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn apply(state: AppState, msgs: &[Msg]) -> AppState {
        msgs.iter()
            .cloned()
            .fold(state, |state, msg| update(state, msg).0)
    }

    fn on_tab(tab: Tab) -> AppState {
        apply(AppState::new(), &[Msg::TabSelected(tab)])
    }

    #[test]
    fn global_keys_switch_tabs_and_quit() {
        let view = AppState::new().view();
        assert_eq!(
            map_key(&view, press(KeyCode::Tab), now()),
            Some(Msg::TabSelected(Tab::Enrichment))
        );
        assert_eq!(
            map_key(&view, press(KeyCode::BackTab), now()),
            Some(Msg::TabSelected(Tab::Reports))
        );
        assert_eq!(
            map_key(&view, press(KeyCode::F(3)), now()),
            Some(Msg::TabSelected(Tab::Reports))
        );
        assert_eq!(map_key(&view, press(KeyCode::F(4)), now()), None);
        assert_eq!(
            map_key(&view, with(KeyCode::Char('c'), KeyModifiers::CONTROL), now()),
            Some(Msg::ShutdownRequested)
        );
    }

    #[test]
    fn typing_q_in_the_query_box_is_text_not_quit() {
        let view = AppState::new().view();
        assert_eq!(
            map_key(&view, press(KeyCode::Char('q')), now()),
            Some(Msg::InputChanged("q".to_string()))
        );
        let view = on_tab(Tab::Reports).view();
        assert_eq!(
            map_key(&view, press(KeyCode::Char('q')), now()),
            Some(Msg::ShutdownRequested)
        );
    }

    #[test]
    fn enter_submits_only_non_blank_input() {
        let view = AppState::new().view();
        assert_eq!(map_key(&view, press(KeyCode::Enter), now()), None);

        let view = apply(AppState::new(), &[Msg::InputChanged("top campaigns".into())]).view();
        assert_eq!(
            map_key(&view, press(KeyCode::Enter), now()),
            Some(Msg::QuerySubmitted)
        );
        assert_eq!(
            map_key(&view, with(KeyCode::Enter, KeyModifiers::ALT), now()),
            Some(Msg::InputChanged("top campaigns\n".to_string()))
        );
    }

    #[test]
    fn enter_is_ignored_while_a_query_is_in_flight() {
        let state = apply(
            AppState::new(),
            &[
                Msg::InputChanged("first".into()),
                Msg::QuerySubmitted,
                Msg::InputChanged("second".into()),
            ],
        );
        assert!(state.is_loading());
        assert_eq!(map_key(&state.view(), press(KeyCode::Enter), now()), None);
    }

    #[test]
    fn exploration_shortcuts() {
        let view = apply(AppState::new(), &[Msg::InputChanged("ab".into())]).view();
        assert_eq!(
            map_key(&view, press(KeyCode::Backspace), now()),
            Some(Msg::InputChanged("a".to_string()))
        );
        assert_eq!(
            map_key(&view, press(KeyCode::Esc), now()),
            Some(Msg::InputCleared)
        );
        assert_eq!(
            map_key(&view, with(KeyCode::Char('d'), KeyModifiers::CONTROL), now()),
            Some(Msg::HistoryCleared)
        );
        assert_eq!(
            map_key(&view, with(KeyCode::Char('f'), KeyModifiers::CONTROL), now()),
            Some(Msg::DownloadFormatChanged(DownloadFormat::Json))
        );
    }

    #[test]
    fn arrows_cycle_catalog_options_and_esc_unsets() {
        let state = on_tab(Tab::Enrichment);
        let view = state.view();
        assert_eq!(view.enrichment.focus, EnrichmentField::Campaign);

        let right = map_key(&view, press(KeyCode::Right), now()).unwrap();
        assert_eq!(
            right,
            Msg::EnrichmentFieldChanged {
                field: EnrichmentField::Campaign,
                value: Some("all".to_string()),
            }
        );
        let left = map_key(&view, press(KeyCode::Left), now()).unwrap();
        assert_eq!(
            left,
            Msg::EnrichmentFieldChanged {
                field: EnrichmentField::Campaign,
                value: Some("camp4".to_string()),
            }
        );

        let state = apply(state, &[left]);
        let view = state.view();
        assert_eq!(
            map_key(&view, press(KeyCode::Right), now()),
            Some(Msg::EnrichmentFieldChanged {
                field: EnrichmentField::Campaign,
                value: Some("all".to_string()),
            })
        );
        assert_eq!(
            map_key(&view, press(KeyCode::Esc), now()),
            Some(Msg::EnrichmentFieldChanged {
                field: EnrichmentField::Campaign,
                value: None,
            })
        );
    }

    #[test]
    fn description_takes_text_including_q() {
        let state = apply(
            on_tab(Tab::Enrichment),
            &[Msg::EnrichmentFocusChanged(EnrichmentField::Description)],
        );
        let msg = map_key(&state.view(), press(KeyCode::Char('q')), now()).unwrap();
        assert_eq!(
            msg,
            Msg::EnrichmentFieldChanged {
                field: EnrichmentField::Description,
                value: Some("q".to_string()),
            }
        );
        let state = apply(state, &[msg]);
        assert_eq!(
            map_key(&state.view(), press(KeyCode::Backspace), now()),
            Some(Msg::EnrichmentFieldChanged {
                field: EnrichmentField::Description,
                value: None,
            })
        );
    }

    #[test]
    fn enter_submits_pipeline_once_campaign_and_source_are_set() {
        let state = on_tab(Tab::Enrichment);
        assert_eq!(map_key(&state.view(), press(KeyCode::Enter), now()), None);

        let state = apply(
            state,
            &[
                Msg::EnrichmentFieldChanged {
                    field: EnrichmentField::Campaign,
                    value: Some("camp1".into()),
                },
                Msg::EnrichmentFieldChanged {
                    field: EnrichmentField::Source,
                    value: Some("src1".into()),
                },
            ],
        );
        assert_eq!(
            map_key(&state.view(), press(KeyCode::Enter), now()),
            Some(Msg::PipelineSubmitted {
                submitted_at: now()
            })
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let view = AppState::new().view();
        let mut key = press(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(&view, key, now()), None);
    }
}
