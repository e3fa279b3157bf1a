//! End-to-end chain scenarios: branch rules, classifier policy inside a
//! chain, and batch encoding of the result.

mod common;

use common::{chain, rule, stage, MockBackend, Reply};
use genchain::chain::{BackendError, ChainError, ChainExecutor};
use genchain::codec;
use genchain::config::ChainConfig;
use genchain::proto::*;

#[tokio::test]
async fn filtered_stage_is_discarded_and_chain_proceeds() {
    // Stage 0 finishes with Filter; its rule discards with no target, so the
    // batch omits stage 0's answer and stage 1 still runs.
    let backend = MockBackend::new(vec![
        Reply::Artifact(ArtifactType::Image, FinishReason::Filter),
        Reply::Artifact(ArtifactType::Image, FinishReason::Stop),
    ]);
    let executor = ChainExecutor::new(backend);

    let request = chain(
        "filter-chain",
        vec![
            stage(
                "generate",
                vec![rule(&[FinishReason::Filter], &[StageAction::Discard], None)],
            ),
            stage("upscale", vec![]),
        ],
    );

    let batch = executor.execute(&request).await.unwrap();
    assert_eq!(batch.answers.len(), 1);
    assert_eq!(batch.answers[0].request_id, "req-upscale");
}

#[tokio::test]
async fn return_rule_halts_with_answers_so_far() {
    let backend = std::sync::Arc::new(MockBackend::new(vec![
        Reply::Artifact(ArtifactType::Image, FinishReason::Stop),
        Reply::Artifact(ArtifactType::Image, FinishReason::Stop),
    ]));
    let executor = ChainExecutor::new(backend.clone());

    let request = chain(
        "return-chain",
        vec![
            stage("first", vec![]),
            stage(
                "second",
                vec![rule(&[FinishReason::Stop], &[StageAction::Return], None)],
            ),
            stage("unreached", vec![]),
        ],
    );

    let batch = executor.execute(&request).await.unwrap();
    assert_eq!(batch.answers.len(), 2);
    // Both scripted replies were consumed and the third stage never ran.
    assert_eq!(backend.remaining(), 0);
}

#[tokio::test]
async fn retry_loop_regenerates_until_clean_then_returns() {
    // generate -> check; on Filter the check stage jumps back to generate,
    // on Stop it returns. Two dirty rounds, then a clean one.
    let backend = MockBackend::new(vec![
        Reply::Artifact(ArtifactType::Image, FinishReason::Stop), // generate 1
        Reply::Artifact(ArtifactType::Image, FinishReason::Filter), // check 1
        Reply::Artifact(ArtifactType::Image, FinishReason::Stop), // generate 2
        Reply::Artifact(ArtifactType::Image, FinishReason::Filter), // check 2
        Reply::Artifact(ArtifactType::Image, FinishReason::Stop), // generate 3
        Reply::Artifact(ArtifactType::Image, FinishReason::Stop), // check 3
    ]);
    let executor = ChainExecutor::new(backend);

    let request = chain(
        "retry-chain",
        vec![
            stage("generate", vec![]),
            stage(
                "check",
                vec![
                    rule(
                        &[FinishReason::Filter],
                        &[StageAction::Discard, StageAction::Pass],
                        Some("generate"),
                    ),
                    rule(&[FinishReason::Stop], &[StageAction::Return], None),
                ],
            ),
        ],
    );

    let batch = executor.execute(&request).await.unwrap();
    // Three generate answers plus the final clean check answer; the two
    // dirty check answers were discarded.
    assert_eq!(batch.answers.len(), 4);
}

#[tokio::test]
async fn unbounded_cycle_fails_with_loop_exceeded() {
    let replies = (0..10)
        .map(|_| Reply::Artifact(ArtifactType::Image, FinishReason::Stop))
        .collect();
    let executor = ChainExecutor::with_config(
        MockBackend::new(replies),
        ChainConfig::new().with_max_stage_visits(8),
    )
    .unwrap();

    let request = chain(
        "loop-chain",
        vec![stage(
            "spin",
            vec![rule(&[FinishReason::Stop], &[StageAction::Pass], Some("spin"))],
        )],
    );

    let err = executor.execute(&request).await.unwrap_err();
    assert!(matches!(err, ChainError::LoopExceeded(8)));
}

#[tokio::test]
async fn classifier_stage_discards_flagged_content() {
    // Stage 0 generates; stage 1 classifies. The policy discards on the
    // "weapon" concept at 0.5 and the observed score is 0.92, so the
    // classification artifact flips to Filter and the stage's rule discards
    // its answer.
    let backend = MockBackend::new(vec![
        Reply::Artifact(ArtifactType::Image, FinishReason::Stop),
        Reply::Classification(vec![("weapon", 0.92), ("calm scenery", 0.12)]),
    ]);
    let executor = ChainExecutor::new(backend);

    let policy = ClassifierParameters {
        categories: vec![ClassifierCategory {
            name: "violence".into(),
            concepts: vec![ClassifierConcept {
                concept: "weapon".into(),
                threshold: Some(0.5),
            }],
            adjustment: None,
            action: Some(Action::Discard as i32),
            classifier_mode: Some(ClassifierMode::Zeroshot as i32),
        }],
        ..Default::default()
    };

    let mut check = stage(
        "check",
        vec![rule(&[FinishReason::Filter], &[StageAction::Discard], None)],
    );
    check.request.as_mut().unwrap().params = Some(request::Params::Classifier(policy));
    check.request.as_mut().unwrap().requested_type = ArtifactType::Classifications as i32;

    let request = chain("classified-chain", vec![stage("generate", vec![]), check]);
    let batch = executor.execute(&request).await.unwrap();

    // Only the generation answer survives.
    assert_eq!(batch.answers.len(), 1);
    assert_eq!(batch.answers[0].request_id, "req-generate");
}

#[tokio::test]
async fn backend_failure_branches_like_any_finish_reason() {
    let backend = MockBackend::new(vec![
        Reply::Fail(BackendError::InvalidParameters("bad cfg_scale".into())),
        Reply::Artifact(ArtifactType::Image, FinishReason::Stop),
    ]);
    let executor = ChainExecutor::new(backend);

    // The error answer is discarded and the fallback stage runs.
    let request = chain(
        "error-chain",
        vec![
            stage(
                "primary",
                vec![rule(&[FinishReason::Error], &[StageAction::Discard], None)],
            ),
            stage("fallback", vec![]),
        ],
    );
    let batch = executor.execute(&request).await.unwrap();
    assert_eq!(batch.answers.len(), 1);
    assert_eq!(batch.answers[0].request_id, "req-fallback");
}

#[tokio::test]
async fn batch_survives_the_wire() {
    let backend = MockBackend::new(vec![Reply::Artifact(
        ArtifactType::Image,
        FinishReason::Stop,
    )]);
    let executor = ChainExecutor::new(backend);
    let request = chain("wire-chain", vec![stage("only", vec![])]);

    let request_frame = codec::encode_frame(&request);
    let (decoded_request, _) = codec::decode_frame::<ChainRequest>(&request_frame).unwrap();
    assert_eq!(decoded_request, request);

    let batch = executor.execute(&decoded_request).await.unwrap();
    let batch_frame = codec::encode_frame(&batch);
    let (decoded_batch, _) = codec::decode_frame::<AnswerBatch>(&batch_frame).unwrap();
    assert_eq!(decoded_batch, batch);
}
