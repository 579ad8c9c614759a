//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, Category, ContentView, Recommendations};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            model.set_should_quit(true).await;
            return Ok(());
        }

        // Help popup swallows everything except closing it
        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        let ui_state = model.get_ui_state().await;
        let content_view = model.get_content_state().await.view;

        match ui_state.active_section {
            ActiveSection::Categories => match key.code {
                KeyCode::Left | KeyCode::Right => {
                    let category = model.move_category_cursor(key.code == KeyCode::Right).await;
                    drop(model);
                    self.select_category(category).await;
                    // Stay on the bar so further arrows keep cycling
                    self.model
                        .lock()
                        .await
                        .set_active_section(ActiveSection::Categories)
                        .await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    let category = Category::ALL[ui_state.category_cursor % Category::ALL.len()];
                    drop(model);
                    self.select_category(category).await;
                    return Ok(());
                }
                _ => {}
            },
            ActiveSection::Subgenres => match key.code {
                KeyCode::Up => {
                    model.move_subgenre_cursor(false).await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.move_subgenre_cursor(true).await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    let subgenre = model.subgenre_under_cursor().await;
                    drop(model);
                    if let Some(subgenre) = subgenre {
                        let _ = self.select_subgenre(subgenre).await;
                    }
                    return Ok(());
                }
                _ => {}
            },
            ActiveSection::Content => {
                let is_trivia = matches!(
                    content_view,
                    ContentView::Results { recommendations: Recommendations::Trivia(_), .. }
                );
                match key.code {
                    KeyCode::Up => {
                        model.content_move_up().await;
                        return Ok(());
                    }
                    KeyCode::Down => {
                        model.content_move_down().await;
                        return Ok(());
                    }
                    KeyCode::Left if is_trivia => {
                        model.move_answer_cursor(false).await;
                        return Ok(());
                    }
                    KeyCode::Right if is_trivia => {
                        model.move_answer_cursor(true).await;
                        return Ok(());
                    }
                    KeyCode::Enter if is_trivia => {
                        drop(model);
                        self.answer_trivia().await;
                        return Ok(());
                    }
                    _ => {}
                }
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    model.cycle_section_backward().await;
                } else {
                    model.cycle_section_forward().await;
                }
            }
            KeyCode::BackTab => {
                model.cycle_section_backward().await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.toggle_help_popup().await;
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                drop(model);
                self.select_category(Category::ALL[index]).await;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                drop(model);
                let _ = self.next_joke().await;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                drop(model);
                let _ = self.refetch().await;
            }
            KeyCode::Esc => {
                model.set_active_section(ActiveSection::Categories).await;
            }
            _ => {}
        }

        Ok(())
    }
}
