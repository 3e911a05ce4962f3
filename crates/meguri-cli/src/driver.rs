use std::time::Duration;

use meguri_core::models::Entry;
use meguri_core::wheel::{SpinObserver, SpinRejected, SpinStart, Wheel};
use tokio::time::{interval, Instant, MissedTickBehavior};

/// About 60 frames per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Start a spin over `candidates` and step it every frame until it settles.
///
/// Returns the winner, or `None` if a spin was already running.
pub async fn spin_to_rest<O>(
    wheel: &mut Wheel,
    candidates: Vec<Entry>,
    observer: &mut O,
) -> Result<Option<Entry>, SpinRejected>
where
    O: SpinObserver + ?Sized,
{
    let started = {
        let mut rng = rand::rng();
        wheel.start_spin(candidates, &mut rng, observer)?
    };
    if started == SpinStart::Ignored {
        return Ok(None);
    }

    let clock = Instant::now();
    let mut ticker = interval(FRAME_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        let now = clock.elapsed().as_secs_f64() * 1000.0;
        if wheel.advance(now, observer).done {
            break;
        }
    }

    Ok(wheel.winner().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use meguri_core::wheel::SpinEvent;

    fn candidates(n: u64) -> Vec<Entry> {
        (1..=n).map(|id| Entry::new(id, format!("Title {id}"))).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_spins_until_settled() {
        let mut wheel = Wheel::new(Duration::from_millis(200), 3600.0);
        let mut events: Vec<SpinEvent> = Vec::new();

        let winner = spin_to_rest(&mut wheel, candidates(4), &mut events)
            .await
            .unwrap()
            .unwrap();

        assert!(wheel.is_settled());
        assert_eq!(wheel.winner(), Some(&winner));
        assert!(matches!(events.first(), Some(SpinEvent::Started { candidates: 4, .. })));
        assert!(matches!(events.last(), Some(SpinEvent::Settled { .. })));
        assert!(events
            .iter()
            .any(|e| matches!(e, SpinEvent::PinCrossed { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejects_single_candidate() {
        let mut wheel = Wheel::default();
        let err = spin_to_rest(&mut wheel, candidates(1), &mut ())
            .await
            .unwrap_err();
        assert_eq!(err, SpinRejected::NotEnoughCandidates { count: 1 });
        assert!(!wheel.is_spinning());
    }
}
