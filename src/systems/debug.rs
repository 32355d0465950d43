use bevy::prelude::*;

use crate::components::{ControlChannels, FlightController, SpatialComponent, SpeedState};

/// Interval between flight state log lines [s]
const LOG_INTERVAL: f64 = 0.2;

/// Logs the conditioned inputs and speed state a few times per second, for
/// tuning sessions and debug overlays.
pub fn flight_log_system(
    time: Res<Time>,
    mut next_log: Local<f64>,
    query: Query<(&ControlChannels, &SpeedState, &SpatialComponent), With<FlightController>>,
) {
    let now = time.elapsed_secs_f64();
    if now < *next_log {
        return;
    }
    *next_log = now + LOG_INTERVAL;

    for (channels, speed, spatial) in query.iter() {
        info!(
            "stick=({:.2},{:.2}) throttle={:.2} speed={:.1} vel={:.1}",
            channels.stick.x,
            channels.stick.y,
            channels.throttle,
            speed.current,
            spatial.velocity.norm()
        );
    }
}
