use std::{num::NonZeroUsize, sync::Arc};

use canvas::{DrawCall, Point, RecordingSurface, SurfaceErr};
use machine_learning::{MlErr, Sample};
use session::{
    AdmissionPolicy, CycleEvent, NoopObserver, Outcome, Phase, Session, SessionConfig, SessionErr,
};
use tokio::sync::mpsc::{self, UnboundedReceiver};

type TestSession = Session<RecordingSurface>;

fn config() -> SessionConfig {
    let mut config = SessionConfig::default();
    config.training.seed = Some(42);
    config
}

fn slow_config(policy: AdmissionPolicy) -> SessionConfig {
    let mut config = config();
    config.training.epochs = NonZeroUsize::new(200_000).unwrap();
    config.admission = policy;
    config
}

fn start(config: SessionConfig) -> (TestSession, UnboundedReceiver<CycleEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let session = Session::new(&config, RecordingSurface::new(), Arc::new(tx)).unwrap();
    (session, rx)
}

fn completed(outcome: Outcome) -> session::CycleReport {
    match outcome {
        Outcome::Completed(report) => report,
        other => panic!("expected a completed cycle, got {other:?}"),
    }
}

#[tokio::test]
async fn seed_path_is_drawn_on_start() {
    let (session, _rx) = start(config());
    let surface = session.surface();
    let surface = surface.lock();

    assert_eq!(surface.stroke(), Some(10.));
    assert_eq!(surface.calls()[0], DrawCall::Clear { width: 10., height: 10. });
    assert_eq!(surface.markers().len(), 6);
    assert_eq!(surface.segments().len(), 5);
    assert_eq!(session.phase(), Phase::Idle);
}

#[tokio::test]
async fn predicts_the_seed_line() {
    let (session, _rx) = start(config());

    let report = completed(session.compute("5").await.unwrap());

    assert_eq!(report.x, 5.);
    assert!((report.y - 9.).abs() < 0.5, "predicted {}", report.y);
    assert_eq!(report.trained_on, 6);
}

#[tokio::test]
async fn valid_cycles_only_append() {
    let (session, _rx) = start(config());
    let before = session.snapshot();

    for input in ["5", "3", "8", "1"] {
        completed(session.compute(input).await.unwrap());
    }

    let after = session.snapshot();
    assert_eq!(after.len(), before.len() + 4);
    assert_eq!(&after.samples()[..before.len()], before.samples());

    let xs: Vec<_> = after.samples()[before.len()..].iter().map(|s| s.x).collect();
    assert_eq!(xs, [5., 3., 8., 1.]);
    assert_eq!(session.phase(), Phase::Idle);
}

#[tokio::test]
async fn each_cycle_trains_on_the_grown_dataset() {
    let (session, _rx) = start(config());

    let first = completed(session.compute("2").await.unwrap());
    let second = completed(session.compute("2").await.unwrap());

    assert_eq!(first.trained_on, 6);
    assert_eq!(second.trained_on, 7);
}

#[tokio::test]
async fn invalid_input_changes_nothing() {
    let (session, mut rx) = start(config());
    let dataset = session.snapshot();
    let calls = session.surface().lock().calls().to_vec();

    for input in ["", "abc", "0", "[[1,2],[3,4]]", "  "] {
        assert_eq!(session.compute(input).await.unwrap(), Outcome::Aborted);
    }

    assert_eq!(session.snapshot(), dataset);
    assert_eq!(session.surface().lock().calls(), calls.as_slice());
    assert!(rx.try_recv().is_err());
    assert_eq!(session.phase(), Phase::Idle);
}

#[tokio::test]
async fn surface_mirrors_the_dataset() {
    let (session, _rx) = start(config());

    for input in ["4", "6", "9"] {
        session.compute(input).await.unwrap();
    }

    let dataset = session.snapshot();
    let surface = session.surface();
    let surface = surface.lock();

    let expected: Vec<_> = dataset.iter().map(|s| Point::new(s.x, s.y)).collect();
    assert_eq!(surface.markers(), expected);
    assert_eq!(surface.segments().len(), dataset.len() - 1);
    assert_eq!(surface.calls()[0], DrawCall::Clear { width: 10., height: 10. });
}

#[tokio::test]
async fn observer_hears_every_prediction() {
    let (session, mut rx) = start(config());

    let report = completed(session.compute("7").await.unwrap());

    match rx.try_recv().unwrap() {
        CycleEvent::Predicted { x, y, elapsed } => {
            assert_eq!(x, 7.);
            assert_eq!(y, report.y);
            assert_eq!(elapsed, report.elapsed);
        }
        other => panic!("unexpected event {other:?}"),
    }

    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn far_inputs_do_not_break_later_cycles() {
    let (session, _rx) = start(config());

    let far = completed(session.compute("100").await.unwrap());
    assert!((far.y - 199.).abs() < 0.5, "predicted {}", far.y);

    for x in [5., 3., 7.] {
        let report = completed(session.compute(&x.to_string()).await.unwrap());
        assert!((report.y - (2. * x - 1.)).abs() < 0.5, "x {x}, predicted {}", report.y);
    }

    assert_eq!(session.snapshot().len(), 10);
}

#[tokio::test]
async fn divergence_appends_nothing() {
    let mut config = config();
    config.training.learning_rate = 10.;
    let (session, mut rx) = start(config);

    let err = session.compute("5").await.unwrap_err();

    assert!(matches!(err, SessionErr::Ml(MlErr::NumericDivergence { .. })));
    assert_eq!(session.snapshot().len(), 6);
    assert!(matches!(rx.try_recv().unwrap(), CycleEvent::Failed { x, .. } if x == 5.));
    assert_eq!(session.phase(), Phase::Idle);
}

#[tokio::test]
async fn render_failure_keeps_the_append() {
    let (session, mut rx) = start(config());
    session.surface().lock().set_unavailable(true);

    let err = session.compute("5").await.unwrap_err();

    assert!(matches!(err, SessionErr::Render(SurfaceErr::Unavailable)));
    let dataset = session.snapshot();
    assert_eq!(dataset.len(), 7);
    assert_eq!(dataset.samples()[6].x, 5.);
    assert!(matches!(rx.try_recv().unwrap(), CycleEvent::Failed { .. }));
}

#[tokio::test]
async fn unavailable_surface_at_start() {
    let mut surface = RecordingSurface::new();
    surface.set_unavailable(true);

    let err = Session::new(&config(), surface, Arc::new(NoopObserver))
        .err()
        .unwrap();
    assert!(matches!(err, SessionErr::Render(_)));
}

#[tokio::test]
async fn reject_policy_refuses_overlapping_cycles() {
    let (session, _rx) = start(slow_config(AdmissionPolicy::Reject));

    let (first, second) = tokio::join!(session.compute("5"), session.compute("6"));

    completed(first.unwrap());
    assert_eq!(second.unwrap(), Outcome::Rejected);
    assert_eq!(session.snapshot().len(), 7);
    assert!(!session.is_busy());
}

#[tokio::test]
async fn queue_policy_serializes_cycles() {
    let (session, _rx) = start(slow_config(AdmissionPolicy::Queue));

    let (first, second) = tokio::join!(session.compute("5"), session.compute("6"));

    let mut trained_on = [
        completed(first.unwrap()).trained_on,
        completed(second.unwrap()).trained_on,
    ];
    trained_on.sort();

    assert_eq!(trained_on, [6, 7]);
    assert_eq!(session.snapshot().len(), 8);
}

#[tokio::test]
async fn phase_follows_the_oldest_cycle_in_flight() {
    let (session, _rx) = start(slow_config(AdmissionPolicy::Unguarded));
    let session = Arc::new(session);

    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.compute("5").await })
    };

    while session.phase() != Phase::Training {
        tokio::task::yield_now().await;
    }

    assert_eq!(session.compute("abc").await.unwrap(), Outcome::Aborted);
    assert!(!first.is_finished());
    assert_eq!(session.phase(), Phase::Training);
    assert_eq!(session.cycles_in_flight(), 1);

    completed(first.await.unwrap().unwrap());
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.cycles_in_flight(), 0);
}

#[tokio::test]
async fn unguarded_cycles_interleave_without_losing_appends() {
    let (session, _rx) = start(slow_config(AdmissionPolicy::Unguarded));

    let (first, second) = tokio::join!(session.compute("5"), session.compute("6"));

    let first = completed(first.unwrap());
    let second = completed(second.unwrap());
    assert_eq!(first.trained_on, 6);
    assert_eq!(second.trained_on, 6);

    let dataset = session.snapshot();
    assert_eq!(dataset.len(), 8);

    let mut xs: Vec<_> = dataset.samples()[6..].iter().map(|s| s.x).collect();
    xs.sort_by(f32::total_cmp);
    assert_eq!(xs, [5., 6.]);
    assert_eq!(&dataset.samples()[..6], &session_seed()[..]);
}

fn session_seed() -> Vec<Sample> {
    config().seed_samples().collect()
}
