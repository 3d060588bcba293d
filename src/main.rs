use glam::{vec2, Vec2};
use glissando::*;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
#[error("no global tracing subscriber set")]
struct NoTracingSubscriber;

fn configure_tracing() -> anyhow::Result<()> {
	let result = Err(NoTracingSubscriber);

	#[cfg(target_arch = "wasm32")]
	let result = result.or_else(|_| tracing_wasm::try_set_as_global_default());

	let result = result.or_else(|_| {
		let max_level = if cfg!(debug_assertions) {
			tracing::Level::TRACE
		} else {
			tracing::Level::INFO
		};
		tracing::subscriber::set_global_default(
			tracing_subscriber::FmtSubscriber::builder()
				.with_max_level(max_level)
				.finish(),
		)
	});

	Ok(result?)
}

const SURFACE_ORIGIN: Vec2 = Vec2::new(32.0, 96.0);
const SURFACE_SIZE: Vec2 = Vec2::new(800.0, 400.0);
const SOURCE_DURATION: Duration = Duration::from_secs(5);

/// Client-space samples of a wavy stroke that starts low on the left and runs off the right edge.
fn demo_stroke(rng: &mut fastrand::Rng) -> Vec<Vec2> {
	(0..=48)
		.map(|i| {
			let t = i as f32 / 48.0;
			let wave = (t * std::f32::consts::TAU * 1.5).sin() * 60.0;
			let jitter = vec2(rng.f32() - 0.5, rng.f32() - 0.5) * 4.0;
			SURFACE_ORIGIN + vec2(40.0 + t * 820.0, 320.0 - t * 220.0 + wave) + jitter
		})
		.collect()
}

fn main() {
	#[cfg(target_arch = "wasm32")]
	console_error_panic_hook::set_once();

	if let Err(error) = configure_tracing() {
		// We can technically continue without logging.
		tracing::error!(error = error.to_string());
	}

	let mut rng = fastrand::Rng::with_seed(0x5eed);
	let mut tracker = GestureTracker::new(SurfaceRect::new(SURFACE_ORIGIN, SURFACE_SIZE));

	let stroke = demo_stroke(&mut rng);
	let Some((&first, rest)) = stroke.split_first() else {
		return;
	};
	let Some((&last, middle)) = rest.split_last() else {
		return;
	};

	let finger = PointerId(1);
	let thumb = PointerId(2);
	tracker.pointer_down(PointerEvent::new(finger, first));
	for (i, &client) in middle.iter().enumerate() {
		if i == middle.len() / 2 {
			// A second contact lands mid-stroke and is ignored.
			tracker.pointer_down(PointerEvent::new(thumb, client + vec2(0.0, 80.0)));
		}
		tracker.pointer_move(PointerEvent::new(finger, client));
	}

	let Some(gesture) = tracker.pointer_leave(PointerEvent::new(finger, last)) else {
		tracing::error!("stroke did not complete");
		return;
	};

	let params = gesture.params(SURFACE_SIZE.y);
	tracing::info!(
		samples = gesture.path().len(),
		distance = gesture.distance(),
		path_length = gesture.path_length(),
		end = ?gesture.end_point(),
		reverse = is_reverse_playback(gesture.end_point().x - gesture.start_point().x),
		legacy_pitch = pitch_rate(params.normalized_y),
		"gesture"
	);

	let Some(plan) = PlaybackPlan::builder()
		.gesture(&gesture)
		.surface_size(SURFACE_SIZE)
		.source_duration(SOURCE_DURATION)
		.plan()
		.ok_or_log("planning playback")
	else {
		return;
	};

	tracing::info!(
		duration_rate = plan.duration_rate(),
		duration = ?plan.duration(),
		"playback plan"
	);
	if let Some(rates) = plan.rate_curve() {
		let seconds = plan.duration().as_secs_f32();
		for step in 0..=8 {
			let at = seconds * step as f32 / 8.0;
			tracing::info!(at, rate = rates.evaluate(at), "playback rate");
		}
	}
}
