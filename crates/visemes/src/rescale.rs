use crate::cue::{MouthCue, Viseme};

/// Tolerance used when aligning the timeline end with the audio end
pub const END_TOLERANCE: f64 = 1e-6;

/// Stretch or compress `cues` so the timeline ends at `target` seconds
///
/// The timeline is assumed to start at zero. Nothing happens when either the
/// current length or the target is not a positive finite number. After
/// scaling, a shortfall larger than [`END_TOLERANCE`] is covered with a final
/// neutral cue; a smaller one is absorbed into the last cue.
pub fn rescale(cues: &mut Vec<MouthCue>, target: f64) {
    let current = cues.last().map_or(0.0, |cue| cue.end);

    if !(current > 0.0 && current.is_finite() && target > 0.0 && target.is_finite()) {
        return;
    }

    let scale = target / current;

    for cue in cues.iter_mut() {
        cue.start *= scale;
        cue.end *= scale;
    }

    let Some(last) = cues.last_mut() else {
        return;
    };

    if target - last.end > END_TOLERANCE {
        let start = last.end;
        cues.push(MouthCue::new(start, target, Viseme::X));
    } else {
        last.end = target;
    }
}
