//! End-to-end walks through the workflow variants over the in-memory store.

mod common;

use std::sync::Arc;

use stagegate::{
    Decision, Identity, JobStatus, MemoryStore, SeenSet, Stage, StageData, SubmissionStore,
    WorkflowError,
};
use stagegate::forms::{
    AuthorshipForm, ClassificationForm, CrossListForm, FinalPreviewForm, JrefForm, LicenseForm,
    MetadataForm, OptionalMetadataForm, PolicyForm, ProcessForm, VerifyUserForm, WithdrawalForm,
};

use common::*;

async fn advance_ok(
    controller: &stagegate::WorkflowController,
    id: uuid::Uuid,
    identity: &Identity,
    seen: &mut SeenSet,
    data: StageData,
) -> Stage {
    controller
        .advance(id, identity, seen, data)
        .await
        .expect("advance should succeed")
}

#[tokio::test]
async fn new_submission_walks_every_stage_to_confirmation() {
    let store = Arc::new(MemoryStore::new());
    let submission = owned_submission();
    let id = submission.id;
    store.insert(submission).await;
    let controller = controller(store.clone());
    let identity = owner_identity();
    let mut seen = SeenSet::new();

    let next = advance_ok(
        &controller,
        id,
        &identity,
        &mut seen,
        StageData::VerifyUser(VerifyUserForm { verify_user: true }),
    )
    .await;
    assert_eq!(next, Stage::Authorship);

    let next = advance_ok(
        &controller,
        id,
        &identity,
        &mut seen,
        StageData::Authorship(AuthorshipForm {
            is_author: Some(true),
            proxy_approval: false,
        }),
    )
    .await;
    assert_eq!(next, Stage::License);

    let next = advance_ok(
        &controller,
        id,
        &identity,
        &mut seen,
        StageData::License(LicenseForm {
            license_uri: accepted_license(),
        }),
    )
    .await;
    assert_eq!(next, Stage::Policy);

    let next = advance_ok(
        &controller,
        id,
        &identity,
        &mut seen,
        StageData::Policy(PolicyForm { policy: true }),
    )
    .await;
    assert_eq!(next, Stage::Classification);

    let next = advance_ok(
        &controller,
        id,
        &identity,
        &mut seen,
        StageData::Classification(ClassificationForm {
            category: "cs.DL".to_string(),
        }),
    )
    .await;
    assert_eq!(next, Stage::CrossList);

    // Cross-list is optional: proceeding with an empty selection is fine.
    let next = advance_ok(
        &controller,
        id,
        &identity,
        &mut seen,
        StageData::CrossList(CrossListForm::default()),
    )
    .await;
    assert_eq!(next, Stage::FileUpload);

    let upload = controller.upload_form(id).await.unwrap();
    let next = advance_ok(&controller, id, &identity, &mut seen, StageData::Upload(upload)).await;
    assert_eq!(next, Stage::Process, "TeX source needs a processing pass");

    assert!(controller.sync_source_processing(id).await.unwrap());
    let next = advance_ok(
        &controller,
        id,
        &identity,
        &mut seen,
        StageData::Process(ProcessForm {
            job: JobStatus::Succeeded,
        }),
    )
    .await;
    assert_eq!(next, Stage::Metadata);

    let next = advance_ok(
        &controller,
        id,
        &identity,
        &mut seen,
        StageData::Metadata(MetadataForm {
            title: "Gated workflows for staged submissions".to_string(),
            abstract_text: "We describe a validation-gated workflow controller.".to_string(),
            authors_display: "A. Author, B. Author".to_string(),
            comments: None,
        }),
    )
    .await;
    assert_eq!(next, Stage::OptionalMetadata);

    let next = advance_ok(
        &controller,
        id,
        &identity,
        &mut seen,
        StageData::OptionalMetadata(OptionalMetadataForm::default()),
    )
    .await;
    assert_eq!(next, Stage::FinalPreview);

    assert!(controller.confirm_preview(id).await.unwrap());
    let next = advance_ok(
        &controller,
        id,
        &identity,
        &mut seen,
        StageData::FinalPreview(FinalPreviewForm { proceed: true }),
    )
    .await;
    assert_eq!(next, Stage::Confirm);

    let finished = store.load(id).await.unwrap();
    assert!(finished.is_finalized);
    assert_eq!(
        controller.resolve_current_stage(&finished, &seen).unwrap(),
        Stage::Confirm
    );
}

#[tokio::test]
async fn requesting_metadata_before_upload_redirects_to_upload() {
    let store = Arc::new(MemoryStore::new());
    let mut submission = owned_submission();
    submission.submitter_contact_verified = true;
    submission.submitter_is_author = Some(true);
    submission.license = Some(accepted_license());
    submission.submitter_accepts_policy = true;
    submission.primary_classification = Some("cs.DL".to_string());
    let id = submission.id;
    store.insert(submission).await;
    let controller = controller(store.clone());

    let mut seen = SeenSet::new();
    let submission = store.load(id).await.unwrap();
    // Visit the optional cross-list stage so upload becomes current.
    let decision = controller
        .record_visit(&submission, &mut seen, Stage::CrossList)
        .unwrap();
    assert_eq!(decision, Decision::Allow);

    assert_eq!(
        controller
            .authorize_stage_access(&submission, &seen, Stage::Metadata)
            .unwrap(),
        Decision::Redirect(Stage::FileUpload)
    );
    assert_eq!(
        controller.resolve_current_stage(&submission, &seen).unwrap(),
        Stage::FileUpload
    );
}

#[tokio::test]
async fn completed_submission_keeps_earlier_stages_revisitable() {
    let store = Arc::new(MemoryStore::new());
    let mut submission = owned_submission();
    submission.submitter_contact_verified = true;
    submission.submitter_is_author = Some(true);
    submission.license = Some(accepted_license());
    submission.submitter_accepts_policy = true;
    submission.primary_classification = Some("cs.DL".to_string());
    submission.source_content = Some(pdf_content());
    submission.metadata.title = Some("Gated workflows".to_string());
    submission.metadata.abstract_text = Some("A workflow controller.".to_string());
    submission.metadata.authors_display = Some("A. Author".to_string());
    submission.preview_confirmed = true;
    submission.is_finalized = true;
    let id = submission.id;
    store.insert(submission).await;
    let controller = controller(store.clone());

    let mut seen = SeenSet::new();
    let submission = store.load(id).await.unwrap();
    controller
        .record_visit(&submission, &mut seen, Stage::CrossList)
        .unwrap();
    controller
        .record_visit(&submission, &mut seen, Stage::OptionalMetadata)
        .unwrap();

    assert_eq!(
        controller.resolve_current_stage(&submission, &seen).unwrap(),
        Stage::Confirm
    );
    for stage in [
        Stage::VerifyUser,
        Stage::Authorship,
        Stage::License,
        Stage::Policy,
        Stage::Classification,
        Stage::FileUpload,
        Stage::Metadata,
        Stage::FinalPreview,
    ] {
        assert_eq!(
            controller
                .authorize_stage_access(&submission, &seen, stage)
                .unwrap(),
            Decision::Allow,
            "{stage} should stay revisitable"
        );
    }
}

#[tokio::test]
async fn pdf_upload_skips_the_processing_stage() {
    let store = Arc::new(MemoryStore::new());
    let mut submission = owned_submission();
    submission.submitter_contact_verified = true;
    submission.submitter_is_author = Some(true);
    submission.license = Some(accepted_license());
    submission.submitter_accepts_policy = true;
    submission.primary_classification = Some("cs.DL".to_string());
    let id = submission.id;
    store.insert(submission).await;
    let controller = controller(store.clone());
    let identity = owner_identity();

    let mut seen = SeenSet::new();
    let submission = store.load(id).await.unwrap();
    controller
        .record_visit(&submission, &mut seen, Stage::CrossList)
        .unwrap();

    let next = controller
        .advance(
            id,
            &identity,
            &mut seen,
            StageData::Upload(stagegate::forms::UploadForm::from_summary(pdf_content())),
        )
        .await
        .unwrap();
    assert_eq!(next, Stage::Metadata, "no processing pass for PDF source");
}

#[tokio::test]
async fn replacement_variant_requires_re_seeing_stages() {
    let store = Arc::new(MemoryStore::new());
    let mut submission = owned_submission();
    submission.version = 2;
    submission.submitter_contact_verified = true;
    submission.submitter_is_author = Some(true);
    submission.license = Some(accepted_license());
    submission.submitter_accepts_policy = true;
    let id = submission.id;
    store.insert(submission).await;
    let controller = controller(store.clone());

    let mut seen = SeenSet::new();
    let submission = store.load(id).await.unwrap();
    assert_eq!(
        controller.resolve_current_stage(&submission, &seen).unwrap(),
        Stage::VerifyUser
    );
    // Classification is not part of the replacement workflow.
    assert_eq!(
        controller
            .authorize_stage_access(&submission, &seen, Stage::Classification)
            .unwrap(),
        Decision::Redirect(Stage::VerifyUser)
    );

    controller
        .record_visit(&submission, &mut seen, Stage::VerifyUser)
        .unwrap();
    assert_eq!(
        controller.resolve_current_stage(&submission, &seen).unwrap(),
        Stage::Authorship
    );
}

#[tokio::test]
async fn withdrawal_request_is_a_single_gated_stage() {
    let store = Arc::new(MemoryStore::new());
    let mut submission = owned_submission();
    submission.published = true;
    submission.is_withdrawal = true;
    let id = submission.id;
    store.insert(submission).await;
    let controller = controller(store.clone());
    let identity = owner_identity();
    let mut seen = SeenSet::new();

    let submission = store.load(id).await.unwrap();
    assert_eq!(
        controller.resolve_current_stage(&submission, &seen).unwrap(),
        Stage::Withdrawal
    );

    let err = controller
        .advance(
            id,
            &identity,
            &mut seen,
            StageData::Withdrawal(WithdrawalForm::default()),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::ValidationFailed { .. }));

    let next = controller
        .advance(
            id,
            &identity,
            &mut seen,
            StageData::Withdrawal(WithdrawalForm {
                reason: "Published in error.".to_string(),
            }),
        )
        .await
        .unwrap();
    assert_eq!(next, Stage::Confirm);
}

#[tokio::test]
async fn jref_request_needs_at_least_one_reference_field() {
    let store = Arc::new(MemoryStore::new());
    let mut submission = owned_submission();
    submission.published = true;
    submission.is_jref = true;
    let id = submission.id;
    store.insert(submission).await;
    let controller = controller(store.clone());
    let identity = owner_identity();
    let mut seen = SeenSet::new();

    let err = controller
        .advance(id, &identity, &mut seen, StageData::Jref(JrefForm::default()))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::ValidationFailed { .. }));

    let next = controller
        .advance(
            id,
            &identity,
            &mut seen,
            StageData::Jref(JrefForm {
                journal_ref: Some("Annals of Workflows 12, 34 (2026)".to_string()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
    assert_eq!(next, Stage::Confirm);
}

#[tokio::test]
async fn cross_list_request_rejects_duplicate_of_primary() {
    let store = Arc::new(MemoryStore::new());
    let mut submission = owned_submission();
    submission.published = true;
    submission.is_cross_request = true;
    submission.primary_classification = Some("cs.DL".to_string());
    let id = submission.id;
    store.insert(submission).await;
    let controller = controller(store.clone());
    let identity = owner_identity();
    let mut seen = SeenSet::new();

    let err = controller
        .advance(
            id,
            &identity,
            &mut seen,
            StageData::CrossList(CrossListForm {
                categories: vec!["cs.DL".to_string()],
            }),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::ValidationFailed { .. }));

    let next = controller
        .advance(
            id,
            &identity,
            &mut seen,
            StageData::CrossList(CrossListForm {
                categories: vec!["cs.IR".to_string()],
            }),
        )
        .await
        .unwrap();
    assert_eq!(next, Stage::Confirm);
}
