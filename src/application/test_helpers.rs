//! In-memory fakes of the injected ports.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::domain::{AppError, DeleteError, OrphanEntity, Result};

use super::ports::{ImmichApi, Prompter};

pub fn entity(id: &str, kind: &str) -> OrphanEntity {
    OrphanEntity {
        path_value: format!("upload/library/{id}.jpg"),
        entity_id: id.to_string(),
        entity_type: kind.to_string(),
    }
}

/// Canned server. Records every call it receives.
#[derive(Default)]
pub struct FakeApi {
    pub orphans: Vec<OrphanEntity>,
    pub fetch_status: Option<u16>,
    pub delete_statuses: HashMap<String, u16>,
    pub fetch_keys: RefCell<Vec<String>>,
    pub deletes: RefCell<Vec<(String, String)>>,
}

impl FakeApi {
    pub fn with_orphans(orphans: Vec<OrphanEntity>) -> Self {
        Self {
            orphans,
            ..Self::default()
        }
    }

    pub fn failing_delete(mut self, entity_id: &str, status: u16) -> Self {
        self.delete_statuses.insert(entity_id.to_string(), status);
        self
    }

    pub fn deleted_ids(&self) -> Vec<String> {
        self.deletes.borrow().iter().map(|(_, id)| id.clone()).collect()
    }
}

impl ImmichApi for FakeApi {
    fn fetch_report(&self, admin_api_key: &str) -> Result<Vec<OrphanEntity>> {
        self.fetch_keys.borrow_mut().push(admin_api_key.to_string());
        match self.fetch_status {
            Some(status) => Err(AppError::fetch_status(status, "Unauthorized")),
            None => Ok(self.orphans.clone()),
        }
    }

    fn delete_asset(
        &self,
        user_api_key: &str,
        entity_id: &str,
    ) -> std::result::Result<(), DeleteError> {
        self.deletes
            .borrow_mut()
            .push((user_api_key.to_string(), entity_id.to_string()));
        match self.delete_statuses.get(entity_id) {
            Some(&status) => Err(DeleteError::from_status(entity_id, status, "Error")),
            None => Ok(()),
        }
    }
}

/// Answers questions from a script and records everything it is shown.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub answers: VecDeque<String>,
    pub questions: Vec<String>,
    pub shown: Vec<String>,
}

impl ScriptedPrompter {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| (*a).to_string()).collect(),
            ..Self::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn show(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}
