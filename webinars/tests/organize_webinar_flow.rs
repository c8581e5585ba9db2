//! End-to-end organize flow over the in-memory adapters.

use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Duration, Utc};
use rstest::rstest;
use tracing_subscriber::EnvFilter;

use webinars::domain::ports::{
    BookSeatCommand, BookSeatRequest, OrganizeWebinarCommand, OrganizeWebinarRequest, UserPayload,
};
use webinars::domain::{BookingService, ErrorCode, OrganizeWebinarService, User};
use webinars::outbound::memory::{
    FixedClock, InMemoryMailer, InMemoryParticipationRepository, InMemoryUserRepository,
    InMemoryWebinarRepository, SequentialIdGenerator,
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

type Service =
    OrganizeWebinarService<InMemoryWebinarRepository, SequentialIdGenerator, FixedClock>;

struct Harness {
    now: DateTime<Utc>,
    webinars: InMemoryWebinarRepository,
    service: Service,
}

fn harness() -> Harness {
    init_tracing();

    let now = DateTime::parse_from_rfc3339("2024-01-01T09:00:00Z")
        .expect("RFC3339 fixture timestamp")
        .with_timezone(&Utc);
    let webinars = InMemoryWebinarRepository::new();
    let service = OrganizeWebinarService::new(
        Arc::new(webinars.clone()),
        Arc::new(SequentialIdGenerator::new("webinar")),
        Arc::new(FixedClock::at(now)),
    );

    Harness {
        now,
        webinars,
        service,
    }
}

fn request_at(harness: &Harness, notice: Duration, seats: u32) -> OrganizeWebinarRequest {
    let start = harness.now + notice;
    OrganizeWebinarRequest {
        organizer_id: "organizer-1".to_owned(),
        title: "Webinar 1".to_owned(),
        seats,
        start_date: start,
        end_date: start + Duration::hours(1),
    }
}

#[rstest]
#[tokio::test]
async fn organizing_persists_the_webinar_under_a_generated_id() {
    let harness = harness();

    let response = harness
        .service
        .organize_webinar(request_at(&harness, Duration::days(10), 100))
        .await
        .expect("organize succeeds");

    assert_eq!(response.webinar_id, "webinar-1");
    assert_eq!(harness.webinars.count(), 1);
}

#[rstest]
#[tokio::test]
async fn successive_webinars_receive_distinct_ids() {
    let harness = harness();

    let first = harness
        .service
        .organize_webinar(request_at(&harness, Duration::days(10), 100))
        .await
        .expect("first organize succeeds");
    let second = harness
        .service
        .organize_webinar(request_at(&harness, Duration::days(20), 50))
        .await
        .expect("second organize succeeds");

    assert_eq!(first.webinar_id, "webinar-1");
    assert_eq!(second.webinar_id, "webinar-2");
    assert_eq!(harness.webinars.count(), 2);
}

#[rstest]
#[tokio::test]
async fn short_notice_is_rejected_and_nothing_is_stored() {
    let harness = harness();

    let error = harness
        .service
        .organize_webinar(request_at(&harness, Duration::days(2), 100))
        .await
        .expect_err("2 days of notice is too soon");

    assert_eq!(error.code(), ErrorCode::DatesTooSoon);
    assert_eq!(harness.webinars.count(), 0);
}

#[rstest]
#[case::zero_seats(0, ErrorCode::NotEnoughSeats)]
#[case::over_the_cap(1001, ErrorCode::TooManySeats)]
#[tokio::test]
async fn out_of_bounds_seat_counts_are_rejected(
    #[case] seats: u32,
    #[case] expected: ErrorCode,
) {
    let harness = harness();

    let error = harness
        .service
        .organize_webinar(request_at(&harness, Duration::days(10), seats))
        .await
        .expect_err("seat count out of bounds");

    assert_eq!(error.code(), expected);
    assert_eq!(harness.webinars.count(), 0);
}

#[rstest]
#[tokio::test]
async fn a_freshly_organized_webinar_is_immediately_bookable() {
    let harness = harness();

    let response = harness
        .service
        .organize_webinar(request_at(&harness, Duration::days(10), 100))
        .await
        .expect("organize succeeds");

    let organizer = User::from_strings("organizer-1", "org@example.com", "password");
    let participations = InMemoryParticipationRepository::new();
    let mailer = InMemoryMailer::new();
    let booking = BookingService::new(
        Arc::new(InMemoryUserRepository::with_users([organizer])),
        Arc::new(harness.webinars.clone()),
        Arc::new(participations.clone()),
        Arc::new(mailer.clone()),
    );

    booking
        .book_seat(BookSeatRequest {
            webinar_id: response.webinar_id,
            user: UserPayload {
                id: "user-1".to_owned(),
                email: "user-1@example.com".to_owned(),
                password: "password".to_owned(),
            },
        })
        .await
        .expect("booking the new webinar succeeds");

    assert_eq!(participations.count(), 1);
    assert_eq!(mailer.sent_count(), 1);
}
