//! Test helpers for views.

use std::sync::{Arc, Mutex};

use kconnect_core::models::{Identity, Role};

use super::Prompt;

/// Records alerts and confirmation questions; answers every confirmation
/// with a fixed reply.
#[derive(Clone)]
pub(crate) struct RecordingPrompt {
    alerts: Arc<Mutex<Vec<String>>>,
    questions: Arc<Mutex<Vec<String>>>,
    answer: bool,
}

impl RecordingPrompt {
    pub fn new() -> Self {
        Self::answering(true)
    }

    pub fn answering(answer: bool) -> Self {
        Self {
            alerts: Arc::default(),
            questions: Arc::default(),
            answer,
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Prompt for RecordingPrompt {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, question: &str) -> bool {
        self.questions.lock().unwrap().push(question.to_string());
        self.answer
    }
}

pub(crate) fn admin() -> Identity {
    Identity {
        email: "root@kconnect.io".into(),
        role: Role::Admin,
        name: "Root".into(),
        id: 1,
    }
}

pub(crate) fn employee(id: i64) -> Identity {
    Identity {
        email: format!("emp{id}@kconnect.io"),
        role: Role::Employee,
        name: format!("Employee {id}"),
        id,
    }
}
