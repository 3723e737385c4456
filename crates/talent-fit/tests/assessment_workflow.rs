//! End-to-end scenarios through the public service facade and HTTP router.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use talent_fit::workflows::assessment::{
        AssessmentNotice, AssessmentService, CandidateId, NotificationError,
        NotificationPublisher, ProfileRecord, ProfileRepository, QuestionBank, RawResponse,
        RepositoryError, Response,
    };

    #[derive(Default)]
    pub(super) struct MemoryRepository {
        records: Mutex<HashMap<CandidateId, ProfileRecord>>,
    }

    impl ProfileRepository for MemoryRepository {
        fn save(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
            self.records
                .lock()
                .expect("repository mutex poisoned")
                .insert(record.candidate_id.clone(), record.clone());
            Ok(record)
        }

        fn load(
            &self,
            candidate_id: &CandidateId,
        ) -> Result<Option<ProfileRecord>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("repository mutex poisoned")
                .get(candidate_id)
                .cloned())
        }

        fn list(&self, limit: usize) -> Result<Vec<ProfileRecord>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("repository mutex poisoned")
                .values()
                .take(limit)
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    pub(super) struct MemoryNotifications {
        pub(super) events: Mutex<Vec<AssessmentNotice>>,
    }

    impl NotificationPublisher for MemoryNotifications {
        fn publish(&self, notice: AssessmentNotice) -> Result<(), NotificationError> {
            self.events
                .lock()
                .expect("notification mutex poisoned")
                .push(notice);
            Ok(())
        }
    }

    pub(super) type Service = AssessmentService<MemoryRepository, MemoryNotifications>;

    pub(super) fn service() -> (Arc<Service>, Arc<MemoryNotifications>) {
        let notifications = Arc::new(MemoryNotifications::default());
        let service = AssessmentService::new(
            Arc::new(MemoryRepository::default()),
            notifications.clone(),
            QuestionBank::standard(),
        );
        (Arc::new(service), notifications)
    }

    /// Alternate between two option indexes across the survey.
    pub(super) fn alternating(first: usize, second: usize) -> Vec<RawResponse> {
        QuestionBank::standard()
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let option = if index % 2 == 0 { first } else { second };
                RawResponse::from(Response::new(question.id.clone(), option))
            })
            .collect()
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use talent_fit::workflows::assessment::{
    assessment_router, CandidateId, Pronoun, ViewerContext, ViewerRole,
};
use tower::ServiceExt;

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json payload")
}

#[tokio::test]
async fn candidate_submits_and_recruiter_reads_third_person_narrative() {
    let (service, notifications) = common::service();
    let router = assessment_router(service);

    let submit = Request::post("/api/v1/assessments/cand-77")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "responses": common::alternating(1, 2) }).to_string(),
        ))
        .expect("request");
    let response = router.clone().oneshot(submit).await.expect("submit");
    assert_eq!(response.status(), StatusCode::CREATED);
    let summary = json_body(response).await;
    let archetype = summary["archetype"].as_str().expect("archetype").to_string();

    let read = Request::get("/api/v1/assessments/cand-77?viewer=recruiter&name=Dana&pronoun=she")
        .body(Body::empty())
        .expect("request");
    let response = router.oneshot(read).await.expect("read");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["narrative"]["archetype"], archetype.as_str());
    let description = body["narrative"]["description"].as_str().expect("text");
    assert!(description.contains("Dana"), "{description}");
    assert!(!description.contains("You"), "{description}");

    let events = notifications.events.lock().expect("events");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].candidate_id, CandidateId("cand-77".to_string()));
}

#[tokio::test]
async fn invalid_pronouns_are_rejected_by_the_query_parser() {
    let (service, _) = common::service();
    service
        .complete(CandidateId("cand-78".to_string()), &common::alternating(0, 3))
        .expect("seeded");
    let router = assessment_router(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/assessments/cand-78?viewer=third_party&pronoun=xe")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn service_narrative_matches_subject_and_recruiter_views() {
    let (service, _) = common::service();
    let id = CandidateId("cand-79".to_string());
    service
        .complete(id.clone(), &common::alternating(0, 1))
        .expect("completes");

    let own = service
        .narrative(&id, &ViewerContext::subject())
        .expect("own view");
    let recruiter = service
        .narrative(
            &id,
            &ViewerContext {
                role: ViewerRole::ThirdParty,
                subject_name: None,
                pronoun: Pronoun::They,
            },
        )
        .expect("recruiter view");

    assert_eq!(own.key_strengths.len(), recruiter.key_strengths.len());
    assert!(recruiter.description.starts_with("This person"));
    assert_eq!(own.compatible_roles, recruiter.compatible_roles);
}
