//! Behavioural tests for sign-in form validation and submission.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use login_form::domain::ports::{AuthClient, AuthError, FixtureAuthClient};
use login_form::domain::{
    Credentials, FormEvent, FormSnapshot, InputField, LoginForm, SubmissionState, SubmitOutcome,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::{Builder, Runtime};

/// Demo authenticator that counts how often it is reached.
#[derive(Default)]
struct CountingAuthClient {
    inner: FixtureAuthClient,
    calls: AtomicUsize,
}

#[async_trait]
impl AuthClient for CountingAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.login(credentials).await
    }
}

struct LoginWorld {
    runtime: Runtime,
    client: Arc<CountingAuthClient>,
    form: LoginForm<CountingAuthClient>,
    focus_moves: Arc<AtomicUsize>,
    outcomes: Vec<SubmitOutcome>,
}

impl LoginWorld {
    fn calls(&self) -> usize {
        self.client.calls.load(Ordering::SeqCst)
    }
}

#[fixture]
fn world() -> LoginWorld {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .start_paused(true)
        .build()
        .expect("create Tokio runtime");
    let client = Arc::new(CountingAuthClient::default());
    let form = LoginForm::new(Arc::clone(&client));

    let focus_moves = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&focus_moves);
    form.subscribe(Arc::new(move |event: &FormEvent| {
        if event.moves_focus() {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }));

    LoginWorld {
        runtime,
        client,
        form,
        focus_moves,
        outcomes: Vec::new(),
    }
}

#[given("an empty sign-in form")]
fn an_empty_sign_in_form(world: &mut LoginWorld) {
    assert_eq!(world.form.snapshot(), FormSnapshot::default());
}

#[given("the user enters the demo credentials")]
fn the_user_enters_the_demo_credentials(world: &mut LoginWorld) {
    world.form.set_email(FixtureAuthClient::DEMO_EMAIL);
    world.form.set_password(FixtureAuthClient::DEMO_PASSWORD);
}

#[given("the user enters an unknown account")]
fn the_user_enters_an_unknown_account(world: &mut LoginWorld) {
    world.form.set_email("x@y.com");
    world.form.set_password("wrongpass");
}

#[when("the user submits the form")]
fn the_user_submits_the_form(world: &mut LoginWorld) {
    let outcome = world.runtime.block_on(world.form.submit());
    world.outcomes.push(outcome);
}

#[when("the user submits the form twice at once")]
fn the_user_submits_the_form_twice_at_once(world: &mut LoginWorld) {
    let form = &world.form;
    let (first, second) = world
        .runtime
        .block_on(async { tokio::join!(form.submit(), form.submit()) });
    world.outcomes.extend([first, second]);
}

#[when("the user clears the email and leaves the field")]
fn the_user_clears_the_email_and_leaves_the_field(world: &mut LoginWorld) {
    world.form.set_email("");
    world.form.validate_field(InputField::Email);
    assert_eq!(world.form.errors().email(), Some("Email is required"));
}

#[when("the user retypes the email")]
fn the_user_retypes_the_email(world: &mut LoginWorld) {
    world.form.set_email("x@y.com");
}

#[then("the email error says it is required")]
fn the_email_error_says_it_is_required(world: &mut LoginWorld) {
    assert_eq!(world.form.errors().email(), Some("Email is required"));
}

#[then("the password error says it is required")]
fn the_password_error_says_it_is_required(world: &mut LoginWorld) {
    assert_eq!(world.form.errors().password(), Some("Password is required"));
}

#[then("no email error is shown")]
fn no_email_error_is_shown(world: &mut LoginWorld) {
    assert_eq!(world.form.errors().email(), None);
}

#[then("the authentication service was not called")]
fn the_authentication_service_was_not_called(world: &mut LoginWorld) {
    assert_eq!(world.calls(), 0);
}

#[then("the authentication service was called once")]
fn the_authentication_service_was_called_once(world: &mut LoginWorld) {
    assert_eq!(world.calls(), 1);
}

#[then("the form is idle")]
fn the_form_is_idle(world: &mut LoginWorld) {
    assert_eq!(world.form.submission_state(), SubmissionState::Idle);
}

#[then("the sign-in succeeds")]
fn the_sign_in_succeeds(world: &mut LoginWorld) {
    assert_eq!(world.outcomes.last(), Some(&SubmitOutcome::Authenticated));
}

#[then("no global error is shown")]
fn no_global_error_is_shown(world: &mut LoginWorld) {
    assert_eq!(world.form.errors().global(), None);
}

#[then("the sign-in is rejected as unauthorised")]
fn the_sign_in_is_rejected_as_unauthorised(world: &mut LoginWorld) {
    match world.outcomes.last() {
        Some(SubmitOutcome::Rejected(error)) => assert_eq!(error.status(), Some(401)),
        other => panic!("expected a rejection, got {other:?}"),
    }
}

#[then("the global error says the email or password is invalid")]
fn the_global_error_says_the_email_or_password_is_invalid(world: &mut LoginWorld) {
    assert_eq!(
        world.form.errors().global(),
        Some("Invalid email or password")
    );
}

#[then("focus moves to the global error once")]
fn focus_moves_to_the_global_error_once(world: &mut LoginWorld) {
    assert_eq!(world.focus_moves.load(Ordering::SeqCst), 1);
}

#[then("one submission reports it is already in progress")]
fn one_submission_reports_it_is_already_in_progress(world: &mut LoginWorld) {
    let ignored = world
        .outcomes
        .iter()
        .filter(|outcome| **outcome == SubmitOutcome::AlreadySubmitting)
        .count();
    assert_eq!(ignored, 1);
    assert!(world.outcomes.contains(&SubmitOutcome::Authenticated));
}

#[scenario(
    path = "tests/features/login_form.feature",
    name = "Submitting an empty form reports both required fields"
)]
fn submitting_an_empty_form_reports_both_required_fields(world: LoginWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/login_form.feature",
    name = "Valid demo credentials sign the user in"
)]
fn valid_demo_credentials_sign_the_user_in(world: LoginWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/login_form.feature",
    name = "Wrong credentials show a global error"
)]
fn wrong_credentials_show_a_global_error(world: LoginWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/login_form.feature",
    name = "A second submit while one is in flight is ignored"
)]
fn a_second_submit_while_one_is_in_flight_is_ignored(world: LoginWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/login_form.feature",
    name = "Retyping a field clears only its inline error"
)]
fn retyping_a_field_clears_only_its_inline_error(world: LoginWorld) {
    drop(world);
}
