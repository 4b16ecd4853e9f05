//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;
use super::AppController;

/// Lines moved per PageUp/PageDown in the response pane
const RESPONSE_PAGE: i32 = 10;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Ctrl combinations work everywhere
        if ctrl {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    model.set_should_quit(true).await;
                }
                KeyCode::Char('s') => {
                    drop(model);
                    self.send_query().await;
                }
                KeyCode::Char('r') => {
                    model.rebuild_query().await;
                }
                _ => {}
            }
            return Ok(());
        }

        // Handle help popup
        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            }
        }

        let ui_state = model.get_ui_state().await;

        match key.code {
            KeyCode::Tab => {
                model.cycle_section_forward().await;
                return Ok(());
            }
            KeyCode::BackTab => {
                model.cycle_section_backward().await;
                return Ok(());
            }
            KeyCode::F(1) => {
                model.show_help_popup().await;
                return Ok(());
            }
            _ => {}
        }

        match ui_state.active_section {
            ActiveSection::Film => {
                match key.code {
                    KeyCode::Esc => model.set_film_title(String::new()).await,
                    KeyCode::Backspace => model.backspace_film().await,
                    KeyCode::Enter => model.set_active_section(ActiveSection::Query).await,
                    KeyCode::Char(c) => model.append_to_film(c).await,
                    _ => {}
                }
                return Ok(());
            }
            ActiveSection::Query => {
                match key.code {
                    KeyCode::Enter => {
                        drop(model);
                        self.send_query().await;
                    }
                    KeyCode::Esc => model.clear_query().await,
                    KeyCode::Backspace => model.backspace_query().await,
                    KeyCode::PageUp => model.scroll_response(-RESPONSE_PAGE).await,
                    KeyCode::PageDown => model.scroll_response(RESPONSE_PAGE).await,
                    KeyCode::Char(c) => model.append_to_query(c).await,
                    _ => {}
                }
                return Ok(());
            }
            ActiveSection::Calendar => {
                match key.code {
                    KeyCode::Left => {
                        model.calendar_move_days(-1).await;
                        return Ok(());
                    }
                    KeyCode::Right => {
                        model.calendar_move_days(1).await;
                        return Ok(());
                    }
                    KeyCode::Up => {
                        model.calendar_move_weeks(-1).await;
                        return Ok(());
                    }
                    KeyCode::Down => {
                        model.calendar_move_weeks(1).await;
                        return Ok(());
                    }
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        model.calendar_pick().await;
                        return Ok(());
                    }
                    KeyCode::Char('a') | KeyCode::Char('A') => {
                        model.add_pending_range().await;
                        return Ok(());
                    }
                    KeyCode::Esc => {
                        model.clear_pending_range().await;
                        return Ok(());
                    }
                    _ => {}
                }
            }
            ActiveSection::Cinemas | ActiveSection::Presets => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    model.toggle_selected().await;
                    return Ok(());
                }
            }
            ActiveSection::Ranges => {
                if matches!(
                    key.code,
                    KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') | KeyCode::Char('X')
                ) {
                    model.remove_selected_range().await;
                    return Ok(());
                }
            }
        }

        // Keybindings for list sections
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Up => {
                model.move_selection_up().await;
            }
            KeyCode::Down => {
                model.move_selection_down().await;
            }
            // Send from anywhere outside the text fields
            KeyCode::Char('s') | KeyCode::Char('S') => {
                drop(model);
                self.send_query().await;
            }
            // Focus film
            KeyCode::Char('f') | KeyCode::Char('F') => {
                model.set_active_section(ActiveSection::Film).await;
            }
            // Focus query
            KeyCode::Char('/') => {
                model.set_active_section(ActiveSection::Query).await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }
}
