//! Mutation flow: the add/edit form, delete with confirmation, and a full
//! reload after every successful change. Failures surface as fixed notices.

use super::api::WordsClient;
use super::view::DictionaryView;
use crate::model::{Word, WordPayload};

/// User-visible outcome of an action. Messages are fixed per action; server
/// error details are never shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
    MissingFields,
    LoadFailed,
    SaveFailed,
    DeleteFailed,
}

pub const CONFIRM_DELETE_PROMPT: &str = "이 단어를 삭제하시겠습니까?";

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Added => "단어가 추가되었습니다!",
            Notice::Updated => "단어가 수정되었습니다!",
            Notice::Deleted => "단어가 삭제되었습니다.",
            Notice::MissingFields => "단어와 의미는 필수입니다.",
            Notice::LoadFailed => "단어를 불러오는데 실패했습니다.",
            Notice::SaveFailed => "단어 저장에 실패했습니다.",
            Notice::DeleteFailed => "단어 삭제에 실패했습니다.",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(
            self,
            Notice::MissingFields | Notice::LoadFailed | Notice::SaveFailed | Notice::DeleteFailed
        )
    }
}

/// Add/edit form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordForm {
    pub word: String,
    pub meaning: String,
    pub english: String,
    pub example: String,
    pub is_official: bool,
}

impl WordForm {
    pub fn from_word(w: &Word) -> Self {
        WordForm {
            word: w.word.clone(),
            meaning: w.meaning.clone(),
            english: w.english.clone().unwrap_or_default(),
            example: w.example.clone().unwrap_or_default(),
            is_official: w.is_official,
        }
    }

    /// Trimmed payload; empty optional fields are sent as null.
    pub fn to_payload(&self) -> WordPayload {
        fn opt(s: &str) -> Option<String> {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        WordPayload {
            word: Some(self.word.trim().to_string()),
            meaning: Some(self.meaning.trim().to_string()),
            english: opt(&self.english),
            is_official: Some(self.is_official),
            example: opt(&self.example),
        }
    }

    fn has_required(&self) -> bool {
        !self.word.trim().is_empty() && !self.meaning.trim().is_empty()
    }
}

pub struct DictionaryApp {
    client: WordsClient,
    pub view: DictionaryView,
    pub form: WordForm,
    editing: Option<i32>,
}

impl DictionaryApp {
    pub fn new(client: WordsClient) -> Self {
        DictionaryApp {
            client,
            view: DictionaryView::new(),
            form: WordForm::default(),
            editing: None,
        }
    }

    /// Id of the word being edited, if the form is in edit mode.
    pub fn editing(&self) -> Option<i32> {
        self.editing
    }

    /// Fetch the full list and replace the view's source list.
    pub async fn reload(&mut self) -> Result<(), Notice> {
        match self.client.list().await {
            Ok(words) => {
                self.view.set_words(words);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load words");
                Err(Notice::LoadFailed)
            }
        }
    }

    pub fn start_edit(&mut self, word: &Word) {
        self.editing = Some(word.id);
        self.form = WordForm::from_word(word);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form = WordForm::default();
    }

    /// Submit the form as a create, or as an update when editing. Returns the
    /// notices to show, in order. On success the form is cleared, edit mode is
    /// left and the list reloaded.
    pub async fn submit(&mut self) -> Vec<Notice> {
        if !self.form.has_required() {
            return vec![Notice::MissingFields];
        }
        let payload = self.form.to_payload();
        let result = match self.editing {
            Some(id) => self.client.update(id, &payload).await.map(|_| Notice::Updated),
            None => self.client.create(&payload).await.map(|_| Notice::Added),
        };
        let notice = match result {
            Ok(notice) => notice,
            Err(e) => {
                tracing::warn!(error = %e, "failed to save word");
                return vec![Notice::SaveFailed];
            }
        };
        self.cancel_edit();
        let mut notices = vec![notice];
        if let Err(n) = self.reload().await {
            notices.push(n);
        }
        notices
    }

    /// Delete `id` after `confirm` accepts the prompt. `None` when the user declined.
    pub async fn delete<F>(&mut self, id: i32, confirm: F) -> Option<Vec<Notice>>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(CONFIRM_DELETE_PROMPT) {
            return None;
        }
        if let Err(e) = self.client.delete(id).await {
            tracing::warn!(error = %e, id, "failed to delete word");
            return Some(vec![Notice::DeleteFailed]);
        }
        let mut notices = vec![Notice::Deleted];
        if let Err(n) = self.reload().await {
            notices.push(n);
        }
        Some(notices)
    }
}
