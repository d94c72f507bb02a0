extern crate std;

use soroban_sdk::{symbol_short, testutils::Events, vec, IntoVal, TryIntoVal};

use crate::events::{CertificateIssued, CourseCompleted, StudentEnrolled, UserRegistered};
use crate::test_utils::TestContext;
use crate::{TOKEN_UNIT, WELCOME_BONUS};

#[test]
fn test_user_registered_event() {
    let ctx = TestContext::new();
    let newcomer = ctx.generate_address();
    let user = ctx.client.register(&newcomer);

    let all_events = ctx.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("register"), user)
    assert_eq!(last_event.0, ctx.client.address);
    let expected_topics = vec![
        &ctx.env,
        symbol_short!("register").into_val(&ctx.env),
        newcomer.clone().into_val(&ctx.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: UserRegistered = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        event_data,
        UserRegistered {
            user: newcomer,
            user_id: user.id,
            welcome_bonus: WELCOME_BONUS,
        }
    );
}

#[test]
fn test_student_enrolled_event() {
    let ctx = TestContext::new();
    let price = 100 * TOKEN_UNIT;
    let course_id = ctx.create_course(price, 0, 10, 0);
    ctx.enroll_paying(&ctx.student, course_id);

    let all_events = ctx.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, ctx.client.address);
    let expected_topics = vec![
        &ctx.env,
        symbol_short!("enrolled").into_val(&ctx.env),
        course_id.into_val(&ctx.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let fee = price * 5 / 100;
    let event_data: StudentEnrolled = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        event_data,
        StudentEnrolled {
            course_id,
            student: ctx.student.clone(),
            price,
            platform_fee: fee,
            instructor_payment: price - fee,
        }
    );
}

#[test]
fn test_completion_emits_certificate_and_completion_events() {
    let ctx = TestContext::new();
    let course_id = ctx.create_course(0, 0, 120, 3 * TOKEN_UNIT);
    ctx.client.enroll(&ctx.student, &course_id);
    ctx.client.update_progress(&ctx.student, &course_id, &100);

    let all_events = ctx.env.events().all();
    let n = all_events.len();

    // Completion is the last event, preceded by the certificate issuance.
    let completed = all_events.last().expect("No events found");
    let expected_topics = vec![
        &ctx.env,
        symbol_short!("completed").into_val(&ctx.env),
        course_id.into_val(&ctx.env),
    ];
    assert_eq!(completed.1, expected_topics);
    let completed_data: CourseCompleted = completed.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        completed_data,
        CourseCompleted {
            course_id,
            student: ctx.student.clone(),
            xp_reward: 120,
            token_reward: 3 * TOKEN_UNIT,
            certificate_id: 1,
        }
    );

    let issued = all_events.get(n - 2).expect("No certificate event");
    let issued_data: CertificateIssued = issued.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        issued_data,
        CertificateIssued {
            certificate_id: 1,
            course_id,
            recipient: ctx.student.clone(),
        }
    );
}

#[test]
fn test_certificate_revoked_event() {
    let ctx = TestContext::new();
    let course_id = ctx.create_course(0, 0, 10, 0);
    ctx.client.enroll(&ctx.student, &course_id);
    ctx.client.update_progress(&ctx.student, &course_id, &100);

    ctx.client.revoke_certificate(&ctx.instructor, &1);

    let all_events = ctx.env.events().all();
    let last_event = all_events.last().expect("No events found");
    let expected_topics = vec![
        &ctx.env,
        symbol_short!("revoked").into_val(&ctx.env),
        1u64.into_val(&ctx.env),
    ];
    assert_eq!(last_event.1, expected_topics);
}
