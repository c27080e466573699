//! ProcessMessageHandler - Apply one message to an intake session

use std::sync::Arc;

use crate::application::session_locks::SessionLocks;
use crate::domain::foundation::SessionId;
use crate::domain::intake::{DialogueEngine, DialogueReply, IntakeSession};
use crate::ports::{SessionStore, SessionStoreError};

/// Command carrying one user message
#[derive(Debug, Clone)]
pub struct ProcessMessageCommand {
    pub session_id: SessionId,
    /// Answer to the active question. Ignored on the message that opens a session.
    pub answer: Option<String>,
}

/// Error type for processing messages
///
/// A corrupted session is not an error here: it is reported to the caller
/// as `DialogueReply::Failed`.
#[derive(Debug, thiserror::Error)]
pub enum ProcessMessageError {
    #[error("Session store error: {0}")]
    Storage(#[from] SessionStoreError),
}

/// Handler that advances intake sessions one message at a time
pub struct ProcessMessageHandler {
    store: Arc<dyn SessionStore>,
    engine: DialogueEngine,
    locks: SessionLocks,
}

impl ProcessMessageHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self::with_engine(store, DialogueEngine::new())
    }

    pub fn with_engine(store: Arc<dyn SessionStore>, engine: DialogueEngine) -> Self {
        Self {
            store,
            engine,
            locks: SessionLocks::new(),
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessMessageCommand,
    ) -> Result<DialogueReply, ProcessMessageError> {
        let _guard = self.locks.acquire(&cmd.session_id).await;

        match self.store.load(&cmd.session_id).await? {
            None => self.open(cmd.session_id).await,
            Some(session) => self.continue_session(session, cmd.answer.as_deref()).await,
        }
    }

    async fn open(&self, session_id: SessionId) -> Result<DialogueReply, ProcessMessageError> {
        match self.engine.open(session_id.clone()) {
            Ok((session, reply)) => {
                self.store.save(&session).await?;
                tracing::info!(session_id = %session_id, "Intake session started");
                Ok(reply)
            }
            Err(cause) => {
                tracing::warn!(session_id = %session_id, error = %cause, "Cannot open intake session");
                Ok(DialogueReply::restart())
            }
        }
    }

    async fn continue_session(
        &self,
        mut session: IntakeSession,
        answer: Option<&str>,
    ) -> Result<DialogueReply, ProcessMessageError> {
        let answered_stage = session.current_stage.clone();

        match self.engine.advance(&mut session, answer) {
            Ok(reply) if reply.is_complete() => {
                self.store.delete(&session.id).await?;
                tracing::info!(
                    session_id = %session.id,
                    answered = session.history.len(),
                    "Intake session completed"
                );
                Ok(reply)
            }
            Ok(reply) => {
                self.store.save(&session).await?;
                tracing::debug!(
                    session_id = %session.id,
                    from = %answered_stage,
                    to = %session.current_stage,
                    "Intake session advanced"
                );
                Ok(reply)
            }
            Err(cause) => {
                self.store.delete(&session.id).await?;
                tracing::warn!(
                    session_id = %session.id,
                    stage = %answered_stage,
                    error = %cause,
                    "Discarded corrupted intake session"
                );
                Ok(DialogueReply::restart())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::intake::StageId;
    use async_trait::async_trait;

    fn session_id(id: &str) -> SessionId {
        SessionId::new(id).unwrap()
    }

    fn cmd(id: &str, answer: Option<&str>) -> ProcessMessageCommand {
        ProcessMessageCommand {
            session_id: session_id(id),
            answer: answer.map(str::to_string),
        }
    }

    fn setup() -> (Arc<InMemorySessionStore>, ProcessMessageHandler) {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = ProcessMessageHandler::new(store.clone());
        (store, handler)
    }

    fn question_of(reply: &DialogueReply) -> &str {
        match reply {
            DialogueReply::Question { question, .. } => question,
            other => panic!("Expected question, got {:?}", other),
        }
    }

    struct FailingStore;

    #[async_trait]
    impl SessionStore for FailingStore {
        async fn load(&self, _: &SessionId) -> Result<Option<IntakeSession>, SessionStoreError> {
            Err(SessionStoreError::Unavailable("offline".to_string()))
        }

        async fn save(&self, _: &IntakeSession) -> Result<(), SessionStoreError> {
            Err(SessionStoreError::Unavailable("offline".to_string()))
        }

        async fn delete(&self, _: &SessionId) -> Result<(), SessionStoreError> {
            Err(SessionStoreError::Unavailable("offline".to_string()))
        }

        async fn exists(&self, _: &SessionId) -> Result<bool, SessionStoreError> {
            Err(SessionStoreError::Unavailable("offline".to_string()))
        }

        async fn count(&self) -> Result<usize, SessionStoreError> {
            Err(SessionStoreError::Unavailable("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_first_message_creates_session_without_consuming_answer() {
        let (store, handler) = setup();

        let reply = handler.handle(cmd("abc", Some("Portfolio"))).await.unwrap();

        assert!(question_of(&reply).contains("What kind of website"));
        let session = store.load(&session_id("abc")).await.unwrap().unwrap();
        assert_eq!(session.current_stage, "start");
        assert!(session.history.is_empty());
    }

    #[tokio::test]
    async fn test_second_message_advances_and_persists() {
        let (store, handler) = setup();
        handler.handle(cmd("abc", None)).await.unwrap();

        let reply = handler.handle(cmd("abc", Some("Portfolio"))).await.unwrap();

        assert!(question_of(&reply).contains("feeling or style"));
        let session = store.load(&session_id("abc")).await.unwrap().unwrap();
        assert_eq!(session.current_stage, "style");
        assert_eq!(session.history.answer(StageId::Start), Some("Portfolio"));
    }

    #[tokio::test]
    async fn test_completion_deletes_session() {
        let (store, handler) = setup();
        for answer in [
            None,
            Some("E-commerce"),
            Some("Bold & Energetic"),
            Some("Gamers"),
            Some("Electric Blue and Hot Pink"),
        ] {
            handler.handle(cmd("abc", answer)).await.unwrap();
        }

        let reply = handler
            .handle(cmd("abc", Some("Template 3: sidebar")))
            .await
            .unwrap();

        assert!(reply.is_complete());
        assert!(!store.exists(&session_id("abc")).await.unwrap());
    }

    #[tokio::test]
    async fn test_corrupted_session_is_discarded() {
        let (store, handler) = setup();
        let mut session = IntakeSession::new(session_id("abc"));
        session.current_stage = "retired_stage".to_string();
        store.save(&session).await.unwrap();

        let reply = handler.handle(cmd("abc", Some("anything"))).await.unwrap();

        assert_eq!(reply, DialogueReply::restart());
        assert!(!store.exists(&session_id("abc")).await.unwrap());
    }

    #[tokio::test]
    async fn test_message_after_discard_starts_fresh() {
        let (store, handler) = setup();
        let mut session = IntakeSession::new(session_id("abc"));
        session.current_stage = "end".to_string();
        store.save(&session).await.unwrap();

        handler.handle(cmd("abc", Some("x"))).await.unwrap();
        let reply = handler.handle(cmd("abc", Some("x"))).await.unwrap();

        assert!(question_of(&reply).contains("What kind of website"));
    }

    #[tokio::test]
    async fn test_storage_failure_is_an_error() {
        let handler = ProcessMessageHandler::new(Arc::new(FailingStore));

        let result = handler.handle(cmd("abc", None)).await;

        assert!(matches!(result, Err(ProcessMessageError::Storage(_))));
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let (store, handler) = setup();
        handler.handle(cmd("one", None)).await.unwrap();
        handler.handle(cmd("two", None)).await.unwrap();

        handler.handle(cmd("one", Some("Portfolio"))).await.unwrap();

        let two = store.load(&session_id("two")).await.unwrap().unwrap();
        assert_eq!(two.current_stage, "start");
        assert_eq!(store.count().await.unwrap(), 2);
    }
}
