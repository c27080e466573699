//! Integration tests for the intake dialogue through the application handler.

use std::sync::Arc;

use futures::future::join_all;

use design_intake::adapters::storage::InMemorySessionStore;
use design_intake::application::{ProcessMessageCommand, ProcessMessageHandler};
use design_intake::domain::foundation::SessionId;
use design_intake::domain::intake::{
    DialogueReply, IntakeSession, StageCatalog, StageId, COMPLETION_ACKNOWLEDGEMENT,
};
use design_intake::ports::SessionStore;

fn setup() -> (Arc<InMemorySessionStore>, Arc<ProcessMessageHandler>) {
    let store = Arc::new(InMemorySessionStore::new());
    let handler = Arc::new(ProcessMessageHandler::new(store.clone()));
    (store, handler)
}

async fn send(handler: &ProcessMessageHandler, id: &str, answer: Option<&str>) -> DialogueReply {
    handler
        .handle(ProcessMessageCommand {
            session_id: SessionId::new(id).unwrap(),
            answer: answer.map(str::to_string),
        })
        .await
        .unwrap()
}

fn question(reply: &DialogueReply) -> (&str, &[String], bool) {
    match reply {
        DialogueReply::Question {
            question,
            options,
            is_free_text,
            ..
        } => (question.as_str(), options.as_slice(), *is_free_text),
        other => panic!("Expected a question, got {:?}", other),
    }
}

#[tokio::test]
async fn portfolio_session_compiles_a_brief() {
    let (store, handler) = setup();

    let reply = send(&handler, "abc", None).await;
    let (text, options, _) = question(&reply);
    assert!(text.starts_with("Hello! I'm here to help you design the perfect website."));
    assert_eq!(options.len(), 4);

    let reply = send(&handler, "abc", Some("Portfolio")).await;
    assert_eq!(
        question(&reply).0,
        "Great choice! What feeling or style should the website convey?"
    );

    let reply = send(&handler, "abc", Some("Elegant & Sophisticated")).await;
    let (text, options, free_text) = question(&reply);
    assert!(text.starts_with("Understood. Who is the target audience"));
    assert!(options.is_empty());
    assert!(free_text);

    let reply = send(&handler, "abc", Some("Students")).await;
    let (text, options, _) = question(&reply);
    assert!(text.contains("Elegant & Sophisticated"));
    assert_eq!(options.len(), 3);
    let palette = options
        .iter()
        .find(|o| o.contains("Emerald, Sapphire, Ruby"))
        .cloned()
        .unwrap();

    let reply = send(&handler, "abc", Some(&palette)).await;
    let (text, options, _) = question(&reply);
    assert!(text.contains("Portfolio"));
    assert_eq!(options.len(), 4);
    let template = options[1].clone();

    let reply = send(&handler, "abc", Some(&template)).await;
    match reply {
        DialogueReply::Complete {
            session_id,
            question,
            final_prompt,
        } => {
            assert_eq!(session_id.as_str(), "abc");
            assert_eq!(question, COMPLETION_ACKNOWLEDGEMENT);
            let facts = [
                "Portfolio",
                "Students",
                "Elegant & Sophisticated",
                palette.as_str(),
                template.as_str(),
            ];
            for fact in facts {
                assert!(final_prompt.contains(fact), "brief is missing {:?}", fact);
            }
        }
        other => panic!("Expected completion, got {:?}", other),
    }

    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn e_commerce_session_gets_store_templates() {
    let (_, handler) = setup();
    send(&handler, "shop", None).await;
    send(&handler, "shop", Some("E-commerce")).await;
    send(&handler, "shop", Some("Modern & Minimalist")).await;
    send(&handler, "shop", Some("Shoppers")).await;

    let reply = send(&handler, "shop", Some("Black, White, and Gold")).await;

    let (text, options, _) = question(&reply);
    assert!(text.contains("E-commerce site"));
    assert!(options[0].starts_with("Template 1:"));
}

#[tokio::test]
async fn completed_session_id_starts_over() {
    let (_, handler) = setup();
    for answer in [
        None,
        Some("Educational"),
        Some("Playful & Creative"),
        Some("Kids"),
        Some("Bright Pastels (Coral, Mint, Lavender)"),
    ] {
        send(&handler, "abc", answer).await;
    }
    assert!(send(&handler, "abc", Some("Template C")).await.is_complete());

    let reply = send(&handler, "abc", Some("ignored")).await;

    assert!(question(&reply).0.starts_with("Hello!"));
}

#[tokio::test]
async fn unknown_stage_discards_session_then_starts_fresh() {
    let (store, handler) = setup();
    let mut session = IntakeSession::new(SessionId::new("abc").unwrap());
    session.current_stage = "checkout".to_string();
    store.save(&session).await.unwrap();

    let reply = send(&handler, "abc", Some("anything")).await;
    assert_eq!(
        reply,
        DialogueReply::Failed {
            error: "An error occurred, please start over.".to_string()
        }
    );
    assert_eq!(store.count().await.unwrap(), 0);

    let reply = send(&handler, "abc", None).await;
    assert!(question(&reply).0.starts_with("Hello!"));
}

#[tokio::test]
async fn stage_without_static_successor_is_corrupted() {
    let (store, handler) = setup();
    let mut session = IntakeSession::new(SessionId::new("abc").unwrap());
    session.current_stage = StageId::ColorSuggestion.to_string();
    store.save(&session).await.unwrap();

    let reply = send(&handler, "abc", Some("anything")).await;

    assert!(reply.is_failed());
    assert!(!store.exists(&session.id).await.unwrap());
}

#[tokio::test]
async fn concurrent_answers_each_advance_one_stage() {
    let (store, handler) = setup();
    send(&handler, "abc", None).await;

    let calls = ["Portfolio", "Bold & Energetic", "Gamers"].map(|answer| {
        let handler = handler.clone();
        tokio::spawn(async move { send(&handler, "abc", Some(answer)).await })
    });
    let replies: Vec<DialogueReply> = join_all(calls)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    let mut questions: Vec<String> = replies.iter().map(|r| question(r).0.to_string()).collect();
    questions.sort();
    questions.dedup();
    assert_eq!(questions.len(), 3);

    let session = store
        .load(&SessionId::new("abc").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(session.current_stage, "select_color");
    assert_eq!(session.history.len(), 3);
}

#[tokio::test]
async fn concurrent_sessions_keep_their_own_palettes() {
    let (_, handler) = setup();

    let run = |id: &'static str, style: &'static str| {
        let handler = handler.clone();
        tokio::spawn(async move {
            send(&handler, id, None).await;
            send(&handler, id, Some("Portfolio")).await;
            send(&handler, id, Some(style)).await;
            send(&handler, id, Some("Everyone")).await
        })
    };
    let (modern, playful) = tokio::join!(
        run("modern", "Modern & Minimalist"),
        run("playful", "Playful & Creative")
    );
    let (modern, playful) = (modern.unwrap(), playful.unwrap());

    assert!(question(&modern).0.contains("Modern & Minimalist"));
    assert!(question(&playful).0.contains("Playful & Creative"));

    let catalog = StageCatalog::standard();
    assert!(catalog.get(StageId::SelectColor).unwrap().prompt.is_none());
}
