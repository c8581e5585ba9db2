//! End-to-end booking flow over the in-memory adapters.

use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Duration, Utc};
use rstest::rstest;
use tracing_subscriber::EnvFilter;

use webinars::domain::ports::{BookSeatCommand, BookSeatRequest, UserPayload};
use webinars::domain::{
    BookingService, ErrorCode, Participation, User, UserId, Webinar, WebinarDraft, WebinarId,
    WebinarTitle,
};
use webinars::outbound::memory::{
    InMemoryMailer, InMemoryParticipationRepository, InMemoryUserRepository,
    InMemoryWebinarRepository,
};

static TRACING: OnceLock<()> = OnceLock::new();

fn init_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

type Service = BookingService<
    InMemoryUserRepository,
    InMemoryWebinarRepository,
    InMemoryParticipationRepository,
    InMemoryMailer,
>;

struct Harness {
    participations: InMemoryParticipationRepository,
    mailer: InMemoryMailer,
    service: Service,
}

fn fixture_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-10T10:00:00Z")
        .expect("RFC3339 fixture timestamp")
        .with_timezone(&Utc)
}

fn sample_webinar(seats: u32, organizer_id: &str) -> Webinar {
    let start = fixture_timestamp();
    Webinar::new(WebinarDraft {
        id: WebinarId::new("webinar-1").expect("valid id"),
        organizer_id: UserId::new(organizer_id).expect("valid id"),
        title: WebinarTitle::new("Webinar 1").expect("valid title"),
        start_date: start,
        end_date: start + Duration::hours(1),
        seats,
    })
    .expect("valid webinar")
}

/// Harness with the organizer seeded and a webinar of the given capacity.
fn harness(seats: u32) -> Harness {
    init_tracing();

    let organizer = User::from_strings("organizer-1", "org@example.com", "password");
    let users = InMemoryUserRepository::with_users([organizer]);
    let webinars = InMemoryWebinarRepository::with_webinars([sample_webinar(seats, "organizer-1")]);
    let participations = InMemoryParticipationRepository::new();
    let mailer = InMemoryMailer::new();

    let service = BookingService::new(
        Arc::new(users),
        Arc::new(webinars),
        Arc::new(participations.clone()),
        Arc::new(mailer.clone()),
    );

    Harness {
        participations,
        mailer,
        service,
    }
}

fn request_for(user_id: &str) -> BookSeatRequest {
    BookSeatRequest {
        webinar_id: "webinar-1".to_owned(),
        user: UserPayload {
            id: user_id.to_owned(),
            email: format!("{user_id}@example.com"),
            password: "password".to_owned(),
        },
    }
}

fn expected_participation(user_id: &str) -> Participation {
    Participation::new(
        UserId::new(user_id).expect("valid id"),
        WebinarId::new("webinar-1").expect("valid id"),
    )
}

#[rstest]
#[tokio::test]
async fn successful_booking_writes_one_participation_and_sends_one_email() {
    let harness = harness(100);

    harness
        .service
        .book_seat(request_for("user-1"))
        .await
        .expect("booking succeeds");

    assert_eq!(
        harness.participations.records(),
        vec![expected_participation("user-1")]
    );
    assert_eq!(harness.mailer.sent_count(), 1);
}

#[rstest]
#[tokio::test]
async fn the_organizer_notification_carries_the_exact_content() {
    let harness = harness(100);

    harness
        .service
        .book_seat(request_for("user-1"))
        .await
        .expect("booking succeeds");

    let sent = harness.mailer.sent();
    let email = sent.first().expect("one email dispatched");
    assert_eq!(email.to().as_ref(), "org@example.com");
    assert_eq!(email.subject(), "New participant");
    assert_eq!(
        email.body(),
        "A new participant has booked a seat for your webinar Webinar 1."
    );
}

#[rstest]
#[tokio::test]
async fn a_full_webinar_rejects_every_booking_without_side_effects() {
    let harness = harness(0);

    let error = harness
        .service
        .book_seat(request_for("user-1"))
        .await
        .expect_err("no capacity");

    assert_eq!(error.code(), ErrorCode::NotEnoughSeats);
    assert_eq!(harness.participations.count(), 0);
    assert_eq!(harness.mailer.sent_count(), 0);
}

#[rstest]
#[tokio::test]
async fn rebooking_the_same_pair_is_rejected_and_leaves_the_store_unchanged() {
    let harness = harness(100);

    harness
        .service
        .book_seat(request_for("user-1"))
        .await
        .expect("first booking succeeds");
    let error = harness
        .service
        .book_seat(request_for("user-1"))
        .await
        .expect_err("duplicate booking");

    assert_eq!(error.code(), ErrorCode::AlreadyParticipating);
    assert_eq!(harness.participations.count(), 1);
    assert_eq!(harness.mailer.sent_count(), 1);
}

#[rstest]
#[tokio::test]
async fn booking_against_an_unknown_webinar_fails_not_found() {
    let harness = harness(100);

    let mut request = request_for("user-1");
    request.webinar_id = "webinar-404".to_owned();

    let error = harness
        .service
        .book_seat(request)
        .await
        .expect_err("unknown webinar");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(harness.participations.count(), 0);
}

#[rstest]
#[tokio::test]
async fn repeating_a_failing_call_never_mutates_the_store() {
    let harness = harness(0);

    for _ in 0..3 {
        let error = harness
            .service
            .book_seat(request_for("user-1"))
            .await
            .expect_err("no capacity");
        assert_eq!(error.code(), ErrorCode::NotEnoughSeats);
        assert_eq!(harness.participations.count(), 0);
        assert_eq!(harness.mailer.sent_count(), 0);
    }
}

#[rstest]
#[tokio::test]
async fn the_store_never_violates_the_capacity_or_duplicate_checks() {
    let harness = harness(1);

    harness
        .service
        .book_seat(request_for("user-1"))
        .await
        .expect("first booking takes the last seat");

    let error = harness
        .service
        .book_seat(request_for("user-2"))
        .await
        .expect_err("capacity exhausted");
    assert_eq!(error.code(), ErrorCode::NotEnoughSeats);

    let error = harness
        .service
        .book_seat(request_for("user-1"))
        .await
        .expect_err("already booked");
    assert_eq!(error.code(), ErrorCode::AlreadyParticipating);

    assert_eq!(
        harness.participations.records(),
        vec![expected_participation("user-1")]
    );
}

#[rstest]
#[tokio::test]
async fn a_blank_requester_id_is_rejected_as_a_malformed_caller() {
    let harness = harness(100);

    let mut request = request_for("user-1");
    request.user.id = String::new();

    let error = harness
        .service
        .book_seat(request)
        .await
        .expect_err("malformed caller");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "User not found");
    assert_eq!(harness.participations.count(), 0);
}

#[rstest]
#[tokio::test]
async fn a_missing_organizer_leaves_the_booking_durable_but_unnotified() {
    init_tracing();

    // Webinar points at an organizer nobody stored.
    let users = InMemoryUserRepository::new();
    let webinars = InMemoryWebinarRepository::with_webinars([sample_webinar(100, "organizer-404")]);
    let participations = InMemoryParticipationRepository::new();
    let mailer = InMemoryMailer::new();
    let service = BookingService::new(
        Arc::new(users),
        Arc::new(webinars),
        Arc::new(participations.clone()),
        Arc::new(mailer.clone()),
    );

    let error = service
        .book_seat(request_for("user-1"))
        .await
        .expect_err("unknown organizer");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Organizer not found");
    // The commit preceded organizer resolution and is not rolled back.
    assert_eq!(participations.records(), vec![expected_participation("user-1")]);
    assert_eq!(mailer.sent_count(), 0);
}
